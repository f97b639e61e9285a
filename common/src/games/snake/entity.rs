use super::point::Point;
use super::point_map::PointMap;
use super::types::Heading;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub point: Point,
    pub heading: Heading,
    /// 0 for the head, `len - 1` for the tail.
    pub index: usize,
}

/// Snake body: the newest segment is the head, the oldest is the tail.
#[derive(Clone, Debug, Default)]
pub struct Snake {
    body: PointMap<Heading>,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: PointMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(point)
    }

    pub fn clear(&mut self) {
        self.body.clear();
    }

    pub fn push_head(&mut self, point: Point, heading: Heading) {
        self.body.insert(point, heading);
    }

    pub fn pop_tail(&mut self) -> Option<(Point, Heading)> {
        let (point, _) = self.body.first()?;
        self.body.remove(point).map(|heading| (point, heading))
    }

    pub fn head(&self) -> (Point, Heading) {
        self.body
            .last()
            .map(|(point, heading)| (point, *heading))
            .expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> (Point, Heading) {
        self.body
            .first()
            .map(|(point, heading)| (point, *heading))
            .expect("Snake body should never be empty")
    }

    /// Head first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.body
            .iter()
            .rev()
            .enumerate()
            .map(|(index, (point, heading))| Segment {
                point,
                heading: *heading,
                index,
            })
    }

    /// Tail first.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.keys()
    }
}
