use serde::{Deserialize, Serialize};

const AXIS_BITS: u32 = 16;
const AXIS_MASK: u32 = 0xffff;

/// A grid cell. Both axes fit in 16 bits so a point packs into one `u32` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Builds a point from signed coordinates, rejecting negative values and
    /// values past the 16-bit axis limit.
    pub fn try_new(x: i32, y: i32) -> Result<Self, String> {
        if x < 0 {
            return Err(format!("x < 0 at ({}, {})", x, y));
        }
        if y < 0 {
            return Err(format!("y < 0 at ({}, {})", x, y));
        }
        let x = u16::try_from(x).map_err(|_| format!("x > {} at ({}, {})", u16::MAX, x, y))?;
        let y = u16::try_from(y).map_err(|_| format!("y > {} at ({}, {})", u16::MAX, x, y))?;
        Ok(Self { x, y })
    }

    pub fn pack(self) -> u32 {
        (u32::from(self.x) << AXIS_BITS) | u32::from(self.y)
    }

    pub fn unpack(key: u32) -> Self {
        Self {
            x: (key >> AXIS_BITS) as u16,
            y: (key & AXIS_MASK) as u16,
        }
    }
}

pub fn pack_coords(x: i32, y: i32) -> Result<u32, String> {
    Point::try_new(x, y).map(Point::pack)
}
