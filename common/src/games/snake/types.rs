use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn index(self) -> i32 {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Any integer maps onto the 4-cycle; negative values wrap (-1 is West).
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    pub fn turned(self, turn: Turn) -> Self {
        Self::from_index(self.index() + turn.offset())
    }

    /// Unit step on the grid. North is towards row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    #[default]
    None,
    Right,
}

impl Turn {
    pub fn offset(self) -> i32 {
        match self {
            Turn::Left => -1,
            Turn::None => 0,
            Turn::Right => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Paused,
    Dead,
}

/// Opaque index into the front end's colour-scheme table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleToken(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_turns_cycle_clockwise() {
        assert_eq!(Heading::North.turned(Turn::Right), Heading::East);
        assert_eq!(Heading::East.turned(Turn::Right), Heading::South);
        assert_eq!(Heading::South.turned(Turn::Right), Heading::West);
        assert_eq!(Heading::West.turned(Turn::Right), Heading::North);
    }

    #[test]
    fn test_left_from_north_wraps_to_west() {
        assert_eq!(Heading::North.turned(Turn::Left), Heading::West);
        assert_eq!(Heading::from_index(-1), Heading::West);
        assert_eq!(Heading::from_index(-5), Heading::West);
        assert_eq!(Heading::from_index(7), Heading::West);
    }

    #[test]
    fn test_opposite_turns_cancel() {
        for heading in Heading::ALL {
            assert_eq!(heading.turned(Turn::Left).turned(Turn::Right), heading);
            assert_eq!(heading.turned(Turn::Right).turned(Turn::Left), heading);
            assert_eq!(heading.turned(Turn::None), heading);
        }
    }

    #[test]
    fn test_from_index_always_in_cycle() {
        for index in -12..12 {
            let heading = Heading::from_index(index);
            assert!(Heading::ALL.contains(&heading));
            assert_eq!(heading.index(), index.rem_euclid(4));
        }
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for heading in Heading::ALL {
            let (dx, dy) = heading.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Heading::North.delta(), (0, -1));
    }
}
