//! Grid coordinates: [`GridSpace`], [`GridSpace3D`] and the [`GridCoord`]
//! trait grid search is generic over.

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

/// A coordinate of an unbounded integer grid.
pub trait GridCoord: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Unit offsets to every surrounding space, in successor enumeration
    /// order.
    fn offsets() -> &'static [Self];

    /// Whether `offset` moves along more than one axis.
    fn is_diagonal(offset: Self) -> bool;

    /// `self + offset`, or `None` past the edge of the `i32` range.
    fn checked_add(self, offset: Self) -> Option<Self>;
}

/// A single space in an unbounded 2D integer grid.
///
/// Two spaces with equal coordinates are the same space; there is no other
/// identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpace {
    pub x: i32,
    pub y: i32,
}

impl GridSpace {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const RIGHT: Self = Self::new(1, 0);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const UP: Self = Self::new(0, 1);
    pub const DOWN: Self = Self::new(0, -1);
    pub const UP_RIGHT: Self = Self::new(1, 1);
    pub const UP_LEFT: Self = Self::new(-1, 1);
    pub const DOWN_RIGHT: Self = Self::new(1, -1);
    pub const DOWN_LEFT: Self = Self::new(-1, -1);

    /// The four adjacent offsets, in successor enumeration order.
    pub const ADJACENT: [Self; 4] = [Self::RIGHT, Self::LEFT, Self::UP, Self::DOWN];

    /// The four diagonal offsets, in successor enumeration order.
    pub const DIAGONAL: [Self; 4] = [
        Self::UP_RIGHT,
        Self::UP_LEFT,
        Self::DOWN_RIGHT,
        Self::DOWN_LEFT,
    ];

    /// Adjacent then diagonal offsets.
    pub const NEIGHBORS: [Self; 8] = [
        Self::RIGHT,
        Self::LEFT,
        Self::UP,
        Self::DOWN,
        Self::UP_RIGHT,
        Self::UP_LEFT,
        Self::DOWN_RIGHT,
        Self::DOWN_LEFT,
    ];

    /// Create a new grid space.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a space shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Componentwise addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Whether `other` is one of the eight spaces surrounding `self`.
    #[inline]
    pub fn is_neighbor(self, other: Self) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Whether `other` differs from `self` by exactly one adjacent step.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (0, 1) | (1, 0)
        )
    }
}

impl GridCoord for GridSpace {
    #[inline]
    fn offsets() -> &'static [Self] {
        &Self::NEIGHBORS
    }

    #[inline]
    fn is_diagonal(offset: Self) -> bool {
        offset.x != 0 && offset.y != 0
    }

    #[inline]
    fn checked_add(self, offset: Self) -> Option<Self> {
        GridSpace::checked_add(self, offset)
    }
}

impl PartialOrd for GridSpace {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridSpace {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for GridSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridSpace {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for GridSpace {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridSpace {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for GridSpace {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for GridSpace {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A single space in an unbounded 3D integer grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpace3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridSpace3D {
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// The six single-axis offsets, in successor enumeration order.
    pub const ADJACENT: [Self; 6] = [
        Self::new(0, 0, -1),
        Self::new(0, -1, 0),
        Self::new(-1, 0, 0),
        Self::new(1, 0, 0),
        Self::new(0, 1, 0),
        Self::new(0, 0, 1),
    ];

    /// All 26 offsets of the surrounding cube, `z` outermost and `x`
    /// innermost, each running from -1 to 1.
    pub const NEIGHBORS: [Self; 26] = [
        Self::new(-1, -1, -1),
        Self::new(0, -1, -1),
        Self::new(1, -1, -1),
        Self::new(-1, 0, -1),
        Self::new(0, 0, -1),
        Self::new(1, 0, -1),
        Self::new(-1, 1, -1),
        Self::new(0, 1, -1),
        Self::new(1, 1, -1),
        Self::new(-1, -1, 0),
        Self::new(0, -1, 0),
        Self::new(1, -1, 0),
        Self::new(-1, 0, 0),
        Self::new(1, 0, 0),
        Self::new(-1, 1, 0),
        Self::new(0, 1, 0),
        Self::new(1, 1, 0),
        Self::new(-1, -1, 1),
        Self::new(0, -1, 1),
        Self::new(1, -1, 1),
        Self::new(-1, 0, 1),
        Self::new(0, 0, 1),
        Self::new(1, 0, 1),
        Self::new(-1, 1, 1),
        Self::new(0, 1, 1),
        Self::new(1, 1, 1),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }
}

impl GridCoord for GridSpace3D {
    #[inline]
    fn offsets() -> &'static [Self] {
        &Self::NEIGHBORS
    }

    #[inline]
    fn is_diagonal(offset: Self) -> bool {
        [offset.x, offset.y, offset.z]
            .iter()
            .filter(|&&c| c != 0)
            .count()
            > 1
    }

    #[inline]
    fn checked_add(self, offset: Self) -> Option<Self> {
        GridSpace3D::checked_add(self, offset)
    }
}

impl fmt::Display for GridSpace3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {}, {} }}", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for GridSpace3D {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for GridSpace3D {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GridSpace3D {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_space_round_trip() {
        let s = GridSpace::new(-3, 12);
        let json = serde_json::to_string(&s).unwrap();
        let back: GridSpace = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
