use std::collections::HashMap;
use std::iter::FusedIterator;

use super::point::Point;

#[derive(Clone, Debug)]
struct Entry<T> {
    item: T,
    prev: Option<u32>,
    next: Option<u32>,
}

/// Insertion-ordered map keyed by packed [`Point`]s.
///
/// Entries are threaded into a doubly linked list through their packed keys,
/// so lookups, inserts and removals anywhere in the order are O(1). Iteration
/// runs oldest to newest. Overwriting an existing point replaces the item in
/// place and keeps its position.
#[derive(Clone, Debug)]
pub struct PointMap<T> {
    entries: HashMap<u32, Entry<T>>,
    first: Option<u32>,
    last: Option<u32>,
}

impl<T> Default for PointMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PointMap<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            first: None,
            last: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            first: None,
            last: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.first = None;
        self.last = None;
    }

    pub fn contains(&self, point: Point) -> bool {
        self.entries.contains_key(&point.pack())
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.entries.get(&point.pack()).map(|entry| &entry.item)
    }

    /// Returns the previous item when `point` was already present.
    pub fn insert(&mut self, point: Point, item: T) -> Option<T> {
        let key = point.pack();
        if let Some(entry) = self.entries.get_mut(&key) {
            return Some(std::mem::replace(&mut entry.item, item));
        }

        match self.last.and_then(|last| self.entries.get_mut(&last)) {
            Some(last_entry) => last_entry.next = Some(key),
            None => self.first = Some(key),
        }

        self.entries.insert(
            key,
            Entry {
                item,
                prev: self.last,
                next: None,
            },
        );
        self.last = Some(key);
        None
    }

    pub fn remove(&mut self, point: Point) -> Option<T> {
        let entry = self.entries.remove(&point.pack())?;

        match entry.prev.and_then(|prev| self.entries.get_mut(&prev)) {
            Some(prev_entry) => prev_entry.next = entry.next,
            None => self.first = entry.next,
        }
        match entry.next.and_then(|next| self.entries.get_mut(&next)) {
            Some(next_entry) => next_entry.prev = entry.prev,
            None => self.last = entry.prev,
        }

        Some(entry.item)
    }

    /// Oldest entry.
    pub fn first(&self) -> Option<(Point, &T)> {
        let key = self.first?;
        self.entries.get(&key).map(|entry| (Point::unpack(key), &entry.item))
    }

    /// Newest entry.
    pub fn last(&self) -> Option<(Point, &T)> {
        let key = self.last?;
        self.entries.get(&key).map(|entry| (Point::unpack(key), &entry.item))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            map: self,
            front: self.first,
            back: self.last,
            remaining: self.entries.len(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.iter().map(|(point, _)| point)
    }
}

impl<'a, T> IntoIterator for &'a PointMap<T> {
    type Item = (Point, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    map: &'a PointMap<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Point, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        let entry = self.map.entries.get(&key)?;
        self.front = entry.next;
        self.remaining -= 1;
        Some((Point::unpack(key), &entry.item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        let entry = self.map.entries.get(&key)?;
        self.back = entry.prev;
        self.remaining -= 1;
        Some((Point::unpack(key), &entry.item))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: u16, y: u16) -> Point {
        Point::new(x, y)
    }

    fn keys_of<T>(map: &PointMap<T>) -> Vec<Point> {
        map.keys().collect()
    }

    #[test]
    fn test_iterates_in_insertion_order() {
        let mut map = PointMap::new();
        map.insert(p(5, 5), 'a');
        map.insert(p(0, 0), 'b');
        map.insert(p(3, 1), 'c');

        assert_eq!(keys_of(&map), vec![p(5, 5), p(0, 0), p(3, 1)]);
        assert_eq!(map.first(), Some((p(5, 5), &'a')));
        assert_eq!(map.last(), Some((p(3, 1), &'c')));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_reverse_iteration() {
        let mut map = PointMap::new();
        for x in 0..4 {
            map.insert(p(x, 0), x);
        }
        let reversed: Vec<u16> = map.iter().rev().map(|(_, item)| *item).collect();
        assert_eq!(reversed, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = PointMap::new();
        map.insert(p(1, 1), 1);
        map.insert(p(2, 2), 2);
        assert_eq!(map.insert(p(1, 1), 10), Some(1));

        assert_eq!(keys_of(&map), vec![p(1, 1), p(2, 2)]);
        assert_eq!(map.get(p(1, 1)), Some(&10));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_remove_first_middle_last() {
        let mut map = PointMap::new();
        for x in 0..5 {
            map.insert(p(x, x), x);
        }

        assert_eq!(map.remove(p(2, 2)), Some(2));
        assert_eq!(keys_of(&map), vec![p(0, 0), p(1, 1), p(3, 3), p(4, 4)]);

        assert_eq!(map.remove(p(0, 0)), Some(0));
        assert_eq!(map.first(), Some((p(1, 1), &1)));

        assert_eq!(map.remove(p(4, 4)), Some(4));
        assert_eq!(map.last(), Some((p(3, 3), &3)));

        assert_eq!(map.remove(p(4, 4)), None);
        assert_eq!(keys_of(&map), vec![p(1, 1), p(3, 3)]);
    }

    #[test]
    fn test_remove_only_entry_then_reinsert() {
        let mut map = PointMap::new();
        map.insert(p(7, 7), ());
        assert!(map.remove(p(7, 7)).is_some());
        assert!(map.is_empty());
        assert_eq!(map.first(), None);
        assert_eq!(map.last(), None);
        assert_eq!(map.iter().count(), 0);

        map.insert(p(8, 8), ());
        assert_eq!(keys_of(&map), vec![p(8, 8)]);
    }

    #[test]
    fn test_contains_and_get() {
        let mut map = PointMap::new();
        map.insert(p(0, 9), Some(3usize));
        map.insert(p(9, 0), None);

        assert!(map.contains(p(0, 9)));
        assert!(map.contains(p(9, 0)));
        assert!(!map.contains(p(9, 9)));
        assert_eq!(map.get(p(0, 9)), Some(&Some(3)));
        assert_eq!(map.get(p(9, 0)), Some(&None));
        assert_eq!(map.get(p(1, 1)), None);
    }

    #[test]
    fn test_clear() {
        let mut map = PointMap::new();
        map.insert(p(1, 2), 0);
        map.insert(p(2, 1), 0);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.first(), None);
        map.insert(p(3, 3), 1);
        assert_eq!(map.first(), map.last());
    }

    #[test]
    fn test_double_ended_iteration_meets_in_middle() {
        let mut map = PointMap::new();
        for x in 0..3 {
            map.insert(p(x, 0), x);
        }
        let mut iter = map.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().map(|(_, v)| *v), Some(0));
        assert_eq!(iter.next_back().map(|(_, v)| *v), Some(2));
        assert_eq!(iter.next().map(|(_, v)| *v), Some(1));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }
}
