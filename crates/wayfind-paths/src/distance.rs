use wayfind_core::{GridSpace, GridSpace3D};

use crate::traits::Heuristic;

/// Euclidean (L2) distance between two spaces.
#[inline]
pub fn euclidean(a: GridSpace, b: GridSpace) -> f32 {
    let dx = a.x.abs_diff(b.x) as f32;
    let dy = a.y.abs_diff(b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two spaces.
#[inline]
pub fn manhattan(a: GridSpace, b: GridSpace) -> f32 {
    (u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))) as f32
}

#[inline]
pub fn euclidean_3d(a: GridSpace3D, b: GridSpace3D) -> f32 {
    let dx = a.x.abs_diff(b.x) as f32;
    let dy = a.y.abs_diff(b.y) as f32;
    let dz = a.z.abs_diff(b.z) as f32;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[inline]
pub fn manhattan_3d(a: GridSpace3D, b: GridSpace3D) -> f32 {
    (u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y)) + u64::from(a.z.abs_diff(b.z)))
        as f32
}

/// Built-in grid heuristic: Euclidean unless `manhattan` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridHeuristic {
    pub manhattan: bool,
}

impl GridHeuristic {
    pub const EUCLIDEAN: Self = Self { manhattan: false };
    pub const MANHATTAN: Self = Self { manhattan: true };
}

impl Heuristic<GridSpace> for GridHeuristic {
    #[inline]
    fn estimate(&self, current: GridSpace, goal: GridSpace) -> f32 {
        if self.manhattan {
            manhattan(current, goal)
        } else {
            euclidean(current, goal)
        }
    }
}

impl Heuristic<GridSpace3D> for GridHeuristic {
    #[inline]
    fn estimate(&self, current: GridSpace3D, goal: GridSpace3D) -> f32 {
        if self.manhattan {
            manhattan_3d(current, goal)
        } else {
            euclidean_3d(current, goal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = GridSpace::new(0, 0);
        let b = GridSpace::new(3, -4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(euclidean(b, a), euclidean(a, b));
        assert_eq!(manhattan(a, a), 0.0);
    }

    #[test]
    fn distances_span_the_whole_i32_range() {
        let low = GridSpace::new(i32::MIN, 0);
        let high = GridSpace::new(i32::MAX, 0);
        assert_eq!(euclidean(low, high), 4_294_967_296.0);
        assert_eq!(manhattan(low, high), 4_294_967_296.0);
        let far = manhattan(GridSpace::new(i32::MIN, i32::MIN), GridSpace::new(i32::MAX, i32::MAX));
        assert_eq!(far, 8_589_934_592.0);
        let corner = GridSpace3D::new(i32::MIN, i32::MIN, i32::MIN);
        assert!(euclidean_3d(corner, GridSpace3D::new(i32::MAX, i32::MAX, i32::MAX)).is_finite());
    }

    #[test]
    fn cube_distances() {
        let a = GridSpace3D::ZERO;
        let b = GridSpace3D::new(2, -3, 6);
        assert_eq!(euclidean_3d(a, b), 7.0);
        assert_eq!(manhattan_3d(a, b), 11.0);
        assert_eq!(GridHeuristic::MANHATTAN.estimate(b, a), 11.0);
        assert_eq!(GridHeuristic::EUCLIDEAN.estimate(b, a), 7.0);
    }

    #[test]
    fn heuristic_flag_selects_metric() {
        let a = GridSpace::new(1, 1);
        let b = GridSpace::new(2, 2);
        assert_eq!(GridHeuristic::MANHATTAN.estimate(a, b), 2.0);
        assert!((GridHeuristic::EUCLIDEAN.estimate(a, b) - 2f32.sqrt()).abs() < 1e-6);
        assert_eq!(GridHeuristic::default(), GridHeuristic::EUCLIDEAN);
    }
}
