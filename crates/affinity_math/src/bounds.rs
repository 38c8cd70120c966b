//! Bounding volumes.

use crate::{num::Float, vector::Vector3};

/// A box with faces parallel to the coordinate planes, given by its minimum
/// and maximum corners.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisAlignedBox<F> {
    min: Vector3<F>,
    max: Vector3<F>,
}

pub type AxisAlignedBoxf = AxisAlignedBox<f32>;
pub type AxisAlignedBoxd = AxisAlignedBox<f64>;

impl<F: Float> AxisAlignedBox<F> {
    /// Creates a box with the given minimum and maximum corners.
    #[inline]
    pub fn new(min: Vector3<F>, max: Vector3<F>) -> Self {
        Self { min, max }
    }

    /// Creates the smallest box containing all the given points.
    ///
    /// # Panics
    /// If the slice of points is empty.
    pub fn aabb_for_points(points: &[Vector3<F>]) -> Self {
        assert!(
            !points.is_empty(),
            "Tried to create AABB for empty point slice"
        );
        let first = points[0];
        let (min, max) = points[1..].iter().fold((first, first), |(min, max), point| {
            (min.component_min(point), max.component_max(point))
        });
        Self::new(min, max)
    }

    #[inline]
    pub fn min(&self) -> &Vector3<F> {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &Vector3<F> {
        &self.max
    }

    #[inline]
    pub fn center(&self) -> Vector3<F> {
        (self.min + self.max) * F::ONE_HALF
    }

    #[inline]
    pub fn half_extents(&self) -> Vector3<F> {
        (self.max - self.min) * F::ONE_HALF
    }

    /// Returns all eight corners. Bit `i` of the corner index selects the
    /// maximum (set) or minimum (unset) coordinate along axis `i`.
    pub fn corners(&self) -> [Vector3<F>; 8] {
        std::array::from_fn(|index| {
            Vector3::new(
                if index & 1 == 0 { self.min.x() } else { self.max.x() },
                if index & 2 == 0 { self.min.y() } else { self.max.y() },
                if index & 4 == 0 { self.min.z() } else { self.max.z() },
            )
        })
    }

    #[inline]
    pub fn contains_point(&self, point: &Vector3<F>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    #[inline]
    fn to_array(&self) -> [F; 6] {
        [
            self.min.x(),
            self.min.y(),
            self.min.z(),
            self.max.x(),
            self.max.y(),
            self.max.z(),
        ]
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> AxisAlignedBox<G> {
        AxisAlignedBox::new(self.min.map_elements(&f), self.max.map_elements(&f))
    }
}

impl_approx_via_array!(AxisAlignedBox<F>, to_array);
impl_precision_conversions!(AxisAlignedBox);
