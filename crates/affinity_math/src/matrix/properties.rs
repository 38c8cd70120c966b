//! Cached structural properties of 4x3 and 4x4 matrices.

use bitflags::bitflags;

bitflags! {
    /// Known structural properties of a [`Matrix4x3`](super::Matrix4x3) or
    /// [`Matrix4`](super::Matrix4).
    ///
    /// The flags are a hint for choosing fast paths. A set flag guarantees
    /// the property holds, while an unset flag only means it is not known.
    /// Clearing flags (see `assume_nothing`) is therefore always valid and
    /// only costs performance.
    #[repr(transparent)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MatrixProperties: u8 {
        /// The matrix is the identity.
        const IDENTITY = 1 << 0;
        /// The linear (upper-left 3x3) part is the identity, so the matrix
        /// at most translates.
        const TRANSLATION = 1 << 1;
        /// The linear part is orthonormal.
        const ORTHONORMAL = 1 << 2;
        /// The bottom row is `(0, 0, 0, 1)`.
        const AFFINE = 1 << 3;
        /// The matrix is a perspective projection as created by
        /// `perspective_projection` or a symmetric `frustum_projection`.
        const PERSPECTIVE = 1 << 4;
    }
}

impl MatrixProperties {
    /// Properties of the identity matrix.
    pub const OF_IDENTITY: Self = Self::IDENTITY
        .union(Self::TRANSLATION)
        .union(Self::ORTHONORMAL)
        .union(Self::AFFINE);

    /// Properties of a pure translation.
    pub const OF_TRANSLATION: Self = Self::TRANSLATION
        .union(Self::ORTHONORMAL)
        .union(Self::AFFINE);

    /// Properties of a rotation, reflection or rigid transform.
    pub const OF_RIGID: Self = Self::ORTHONORMAL.union(Self::AFFINE);

    /// Properties of the product `a * b` of two matrices with the given
    /// properties.
    pub(crate) fn of_product(a: Self, b: Self) -> Self {
        a.intersection(b).difference(Self::PERSPECTIVE)
    }

    /// Properties remaining after applying a transform that keeps the
    /// linear part orthonormal but may change it and the translation.
    pub(crate) fn after_rigid(self) -> Self {
        self.intersection(Self::OF_RIGID)
    }

    /// Properties remaining after applying a translation.
    pub(crate) fn after_translation(self) -> Self {
        self.intersection(Self::OF_TRANSLATION)
    }

    /// Properties remaining after applying a general affine transform.
    pub(crate) fn after_affine(self) -> Self {
        self.intersection(Self::AFFINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_of_translations_is_translation() {
        let props = MatrixProperties::of_product(
            MatrixProperties::OF_TRANSLATION,
            MatrixProperties::OF_IDENTITY,
        );
        assert_eq!(props, MatrixProperties::OF_TRANSLATION);
    }

    #[test]
    fn product_never_keeps_perspective() {
        let perspective = MatrixProperties::PERSPECTIVE;
        assert!(MatrixProperties::of_product(perspective, perspective).is_empty());
    }

    #[test]
    fn affine_transform_clears_everything_but_affine() {
        assert_eq!(
            MatrixProperties::OF_IDENTITY.after_affine(),
            MatrixProperties::AFFINE
        );
        assert_eq!(
            MatrixProperties::OF_IDENTITY.after_rigid(),
            MatrixProperties::OF_RIGID
        );
    }
}
