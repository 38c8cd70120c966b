//! Writing matrices to and reading them from flat buffers in column-major
//! order, for example for uploading to GPU buffers.
//!
//! Every function checks that the buffer has room for the matrix at the
//! requested position and reports a [`BufferError`] otherwise, leaving the
//! buffer untouched.

use crate::{
    matrix::{Matrix3, Matrix3x2, Matrix4, Matrix4x3},
    num::Float,
};
use affinity_log::trace;
use bytemuck::Pod;
use thiserror::Error;

/// Errors from reading or writing a buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("buffer has room for {available} elements but {required} are required")]
    InsufficientCapacity { required: usize, available: usize },
    #[error("start index {index} is out of bounds for buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A matrix that can be flattened into a sequence of elements in
/// column-major order.
pub trait ColumnMajor<F: Float>: Sized {
    /// Number of elements in the flattened matrix.
    const LEN: usize;

    /// Writes the elements in column-major order into the first
    /// [`LEN`](Self::LEN) entries of `dest`.
    ///
    /// # Panics
    /// If `dest` is shorter than [`LEN`](Self::LEN).
    fn write_column_major(&self, dest: &mut [F]);

    /// Creates the matrix from the first [`LEN`](Self::LEN) entries of
    /// `elements`, taken in column-major order.
    ///
    /// # Panics
    /// If `elements` is shorter than [`LEN`](Self::LEN).
    fn from_column_major(elements: &[F]) -> Self;
}

macro_rules! impl_column_major {
    ($t:ident, $len:literal) => {
        impl<F: Float> ColumnMajor<F> for $t<F> {
            const LEN: usize = $len;

            fn write_column_major(&self, dest: &mut [F]) {
                dest[..$len].copy_from_slice(&self.to_cols_array());
            }

            fn from_column_major(elements: &[F]) -> Self {
                Self::from_cols_array(&std::array::from_fn(|idx| elements[idx]))
            }
        }
    };
}

impl_column_major!(Matrix3x2, 6);
impl_column_major!(Matrix3, 9);
impl_column_major!(Matrix4x3, 12);
impl_column_major!(Matrix4, 16);

/// Writes the matrix to the start of the slice.
pub fn write_to_slice<F: Float, M: ColumnMajor<F>>(
    matrix: &M,
    dest: &mut [F],
) -> Result<(), BufferError> {
    write_to_slice_at(matrix, 0, dest)
}

/// Writes the matrix to the slice starting at the given element index.
pub fn write_to_slice_at<F: Float, M: ColumnMajor<F>>(
    matrix: &M,
    index: usize,
    dest: &mut [F],
) -> Result<(), BufferError> {
    let range = checked_range(index, M::LEN, dest.len())?;
    matrix.write_column_major(&mut dest[range]);
    Ok(())
}

/// Reads a matrix from the start of the slice.
pub fn read_from_slice<F: Float, M: ColumnMajor<F>>(src: &[F]) -> Result<M, BufferError> {
    read_from_slice_at(0, src)
}

/// Reads a matrix from the slice starting at the given element index.
pub fn read_from_slice_at<F: Float, M: ColumnMajor<F>>(
    index: usize,
    src: &[F],
) -> Result<M, BufferError> {
    let range = checked_range(index, M::LEN, src.len())?;
    Ok(M::from_column_major(&src[range]))
}

/// Writes the matrix to the start of the byte slice, using the native
/// endianness.
pub fn write_to_bytes<F: Float + Pod, M: ColumnMajor<F>>(
    matrix: &M,
    dest: &mut [u8],
) -> Result<(), BufferError> {
    write_to_bytes_at(matrix, 0, dest)
}

/// Writes the matrix to the byte slice starting at the given byte index,
/// using the native endianness. The byte slice need not be aligned.
pub fn write_to_bytes_at<F: Float + Pod, M: ColumnMajor<F>>(
    matrix: &M,
    index: usize,
    dest: &mut [u8],
) -> Result<(), BufferError> {
    let range = checked_range(index, M::LEN * F::SIZE, dest.len())?;
    let mut elements = [F::ZERO; 16];
    matrix.write_column_major(&mut elements);
    dest[range].copy_from_slice(bytemuck::cast_slice(&elements[..M::LEN]));
    Ok(())
}

/// Reads a matrix from the start of the byte slice, using the native
/// endianness.
pub fn read_from_bytes<F: Float + Pod, M: ColumnMajor<F>>(src: &[u8]) -> Result<M, BufferError> {
    read_from_bytes_at(0, src)
}

/// Reads a matrix from the byte slice starting at the given byte index,
/// using the native endianness. The byte slice need not be aligned.
pub fn read_from_bytes_at<F: Float + Pod, M: ColumnMajor<F>>(
    index: usize,
    src: &[u8],
) -> Result<M, BufferError> {
    let range = checked_range(index, M::LEN * F::SIZE, src.len())?;
    let mut elements = [F::ZERO; 16];
    for (element, bytes) in elements.iter_mut().zip(src[range].chunks_exact(F::SIZE)) {
        *element = bytemuck::pod_read_unaligned(bytes);
    }
    Ok(M::from_column_major(&elements[..M::LEN]))
}

/// Matrices that have a 4x4 representation for consumers expecting a full
/// 4x4 matrix.
pub trait PaddedTo4x4<F: Float> {
    /// Returns the 16 column-major elements of the padded matrix.
    fn to_4x4_cols_array(&self) -> [F; 16];
}

impl<F: Float> PaddedTo4x4<F> for Matrix4<F> {
    fn to_4x4_cols_array(&self) -> [F; 16] {
        self.to_cols_array()
    }
}

impl<F: Float> PaddedTo4x4<F> for Matrix4x3<F> {
    fn to_4x4_cols_array(&self) -> [F; 16] {
        self.to_cols_array_4x4()
    }
}

impl<F: Float> PaddedTo4x4<F> for Matrix3<F> {
    fn to_4x4_cols_array(&self) -> [F; 16] {
        Matrix4::from_matrix3(self).to_cols_array()
    }
}

impl<F: Float> PaddedTo4x4<F> for Matrix3x2<F> {
    /// The 2D transform acts on the xy-plane and leaves z unchanged.
    #[rustfmt::skip]
    fn to_4x4_cols_array(&self) -> [F; 16] {
        let (o, i) = (F::ZERO, F::ONE);
        [
            self.m00(), self.m01(), o, o,
            self.m10(), self.m11(), o, o,
            o, o, i, o,
            self.m20(), self.m21(), o, i,
        ]
    }
}

/// Writes the matrix padded to 4x4 to the start of the slice.
pub fn write_4x4_to_slice<F: Float, M: PaddedTo4x4<F>>(
    matrix: &M,
    dest: &mut [F],
) -> Result<(), BufferError> {
    write_4x4_to_slice_at(matrix, 0, dest)
}

/// Writes the matrix padded to 4x4 to the slice starting at the given
/// element index.
pub fn write_4x4_to_slice_at<F: Float, M: PaddedTo4x4<F>>(
    matrix: &M,
    index: usize,
    dest: &mut [F],
) -> Result<(), BufferError> {
    let range = checked_range(index, 16, dest.len())?;
    dest[range].copy_from_slice(&matrix.to_4x4_cols_array());
    Ok(())
}

fn checked_range(
    index: usize,
    required: usize,
    len: usize,
) -> Result<std::ops::Range<usize>, BufferError> {
    if index > len || (index == len && required > 0) {
        trace!("Rejected buffer access at index {index} in buffer of length {len}");
        return Err(BufferError::IndexOutOfBounds { index, len });
    }
    let available = len - index;
    if available < required {
        trace!(
            "Rejected buffer access needing {required} elements with {available} available"
        );
        return Err(BufferError::InsufficientCapacity {
            required,
            available,
        });
    }
    Ok(index..index + required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;

    #[test]
    fn writing_4x3_gives_column_major_order() {
        let m = Matrix4x3::<f32>::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
        ]);
        let mut buffer = [0.0; 12];
        write_to_slice(&m, &mut buffer).unwrap();
        assert_eq!(
            buffer,
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn writing_to_short_slice_fails_without_writing() {
        let mut buffer = [-1.0; 10];
        assert_eq!(
            write_to_slice(&Matrix4x3::<f64>::identity(), &mut buffer),
            Err(BufferError::InsufficientCapacity {
                required: 12,
                available: 10
            })
        );
        assert!(buffer.iter().all(|&value| value == -1.0));

        let mut buffer = [0.0; 20];
        assert_eq!(
            write_to_slice_at(&Matrix3::<f64>::identity(), 15, &mut buffer),
            Err(BufferError::InsufficientCapacity {
                required: 9,
                available: 5
            })
        );
        assert_eq!(
            write_to_slice_at(&Matrix3::<f64>::identity(), 21, &mut buffer),
            Err(BufferError::IndexOutOfBounds { index: 21, len: 20 })
        );
    }

    #[test]
    fn writing_at_index_leaves_rest_of_slice_untouched() {
        let m = Matrix3x2::<f32>::translation(5.0, 6.0);
        let mut buffer = [-1.0; 9];
        write_to_slice_at(&m, 2, &mut buffer).unwrap();
        assert_eq!(
            buffer,
            [-1.0, -1.0, 1.0, 0.0, 0.0, 1.0, 5.0, 6.0, -1.0]
        );
        let read: Matrix3x2<f32> = read_from_slice_at(2, &buffer).unwrap();
        assert_eq!(read, m);
    }

    #[test]
    fn reading_4x4_determines_properties() {
        let mut buffer = [0.0; 16];
        write_to_slice(&Matrix4::<f64>::translation(1.0, 2.0, 3.0), &mut buffer).unwrap();
        let read: Matrix4<f64> = read_from_slice(&buffer).unwrap();
        assert!(read.is_affine());
        assert_eq!(read.translation_part(), Vector3::new(1.0, 2.0, 3.0));
        assert!(read_from_slice::<f64, Matrix4<f64>>(&buffer[1..]).is_err());
    }

    #[test]
    fn byte_round_trip_works_at_unaligned_offsets() {
        let m = Matrix4x3::<f32>::rotation_xyz(0.1, 0.2, 0.3).translate(1.0, 2.0, 3.0);
        let mut bytes = [0_u8; 12 * 4 + 3];
        write_to_bytes_at(&m, 3, &mut bytes).unwrap();
        let read: Matrix4x3<f32> = read_from_bytes_at(3, &bytes).unwrap();
        assert_eq!(read, m);
        assert_eq!(
            write_to_bytes(&Matrix4::<f64>::identity(), &mut bytes),
            Err(BufferError::InsufficientCapacity {
                required: 128,
                available: 51
            })
        );
    }

    #[test]
    fn padding_3x2_to_4x4_keeps_z_unchanged() {
        let m = Matrix3x2::<f64>::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let mut buffer = [0.0; 16];
        write_4x4_to_slice(&m, &mut buffer).unwrap();
        assert_eq!(
            buffer,
            [
                1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 6.0, 0.0, 1.0
            ]
        );
    }

    #[test]
    fn padding_4x3_appends_bottom_row() {
        let m = Matrix4x3::<f32>::translation(7.0, 8.0, 9.0);
        let mut buffer = [0.0; 20];
        write_4x4_to_slice_at(&m, 4, &mut buffer).unwrap();
        assert_eq!(&buffer[16..20], &[7.0, 8.0, 9.0, 1.0]);
        assert_eq!(&buffer[4..8], &[1.0, 0.0, 0.0, 0.0]);

        let mut buffer = [0.0; 16];
        write_4x4_to_slice(&Matrix3::<f32>::scaling(2.0, 3.0, 4.0), &mut buffer).unwrap();
        assert_eq!(
            buffer,
            [
                2.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 1.0
            ]
        );
    }
}
