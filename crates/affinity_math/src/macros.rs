//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, F: $crate::num::Float> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, F: $crate::num::Float> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Binary operator with a plain scalar on the right-hand side.
macro_rules! impl_scalar_binop {
    ($op:ident, $method:ident, $t:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op<F> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: F) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<F> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: F) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }
    };
}

/// `scalar * value` for the concrete precisions, which coherence rules
/// prevent implementing generically.
macro_rules! impl_scalar_lhs_mul {
    ($t:ident) => {
        impl_scalar_lhs_mul!($t, f32);
        impl_scalar_lhs_mul!($t, f64);
    };
    ($t:ident, $f:ty) => {
        impl ::std::ops::Mul<$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: $t<$f>) -> Self::Output {
                rhs * self
            }
        }

        impl ::std::ops::Mul<&$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: &$t<$f>) -> Self::Output {
                rhs * self
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<F: $crate::num::Float> ::approx::AbsDiffEq for $t {
            type Epsilon = F;

            fn default_epsilon() -> Self::Epsilon {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<F: $crate::num::Float> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                F::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements both approximate comparison traits by comparing the arrays
/// returned by the given method element by element.
macro_rules! impl_approx_via_array {
    ($t:ty, $to_array:ident) => {
        impl_abs_diff_eq!($t, |a, b, epsilon| {
            a.$to_array()
                .iter()
                .zip(b.$to_array().iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            a.$to_array()
                .iter()
                .zip(b.$to_array().iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
        });
    };
}

/// Implements [`bytemuck::Zeroable`] and [`bytemuck::Pod`] for a `#[repr(C)]`
/// type whose fields all have the generic float type.
macro_rules! impl_pod {
    ($t:ident) => {
        // SAFETY: `#[repr(C)]` with fields of a single `Pod` type, so there is
        // no padding and every bit pattern is valid.
        unsafe impl<F: $crate::num::Float + ::bytemuck::Pod> ::bytemuck::Zeroable for $t<F> {}
        // SAFETY: see above.
        unsafe impl<F: $crate::num::Float + ::bytemuck::Pod> ::bytemuck::Pod for $t<F> {}
    };
}

/// Adds `widened` and `narrowed` in terms of a `map_elements` method, plus
/// the lossless `From` conversion from single to double precision.
macro_rules! impl_precision_conversions {
    ($t:ident) => {
        impl<F: $crate::num::Float> $t<F> {
            /// Converts every element to a type of equal or higher precision.
            /// This never loses information.
            #[inline]
            pub fn widened<G: $crate::num::Float>(&self) -> $t<G>
            where
                F: $crate::num::Widen<G>,
            {
                self.map_elements($crate::num::Widen::widen)
            }

            /// Converts every element to a type of equal or lower precision,
            /// rounding to the nearest representable value when narrowing.
            #[inline]
            pub fn narrowed<G: $crate::num::Float>(&self) -> $t<G>
            where
                F: $crate::num::Narrow<G>,
            {
                self.map_elements($crate::num::Narrow::narrow)
            }
        }

        impl From<$t<f32>> for $t<f64> {
            fn from(value: $t<f32>) -> Self {
                value.widened()
            }
        }
    };
}

/// Generates `_mut` methods that overwrite `self` with the result of the
/// corresponding value-returning method and return `self` for chaining.
macro_rules! impl_in_place_ops {
    ($t:ty; $($name:ident => $op:ident($($arg:ident: $arg_ty:ty),*);)*) => {
        impl<F: $crate::num::Float> $t {
            $(
                #[doc = concat!("In-place version of [`Self::", stringify!($op), "`].")]
                #[inline]
                pub fn $name(&mut self, $($arg: $arg_ty),*) -> &mut Self {
                    *self = self.$op($($arg),*);
                    self
                }
            )*
        }
    };
}

/// Generates the `m<col><row>()` getters and `set_m<col><row>()` setters of a
/// matrix stored as an array of column vectors. With `properties = field`,
/// the setters also clear the cached properties in that field.
macro_rules! impl_element_accessors {
    ($t:ty, properties = $props:ident, [$($get:ident, $set:ident => $col:literal, $row:literal);+ $(;)?]) => {
        impl<F: $crate::num::Float> $t {
            $(
                #[inline]
                pub fn $get(&self) -> F {
                    self.columns[$col][$row]
                }

                #[inline]
                pub fn $set(&mut self, value: F) -> &mut Self {
                    self.columns[$col][$row] = value;
                    self.$props = $crate::matrix::MatrixProperties::empty();
                    self
                }
            )+
        }
    };
    ($t:ty, [$($get:ident, $set:ident => $col:literal, $row:literal);+ $(;)?]) => {
        impl<F: $crate::num::Float> $t {
            $(
                #[inline]
                pub fn $get(&self) -> F {
                    self.columns[$col][$row]
                }

                #[inline]
                pub fn $set(&mut self, value: F) -> &mut Self {
                    self.columns[$col][$row] = value;
                    self
                }
            )+
        }
    };
}

macro_rules! impl_matrix_indexing {
    (
        $t:ty,
        $(properties = $props:ident,)?
        column: $column:ident,
        row: $row:ident,
        n_columns: $n_cols:literal,
        n_rows: $n_rows:literal,
        column_indices: [$($c:literal),+]
    ) => {
        impl<F: $crate::num::Float> $t {
            /// Returns the element in the given column and row.
            ///
            /// # Panics
            /// If the indices are outside the matrix.
            #[inline]
            pub fn element(&self, col: usize, row: usize) -> F {
                self[(col, row)]
            }

            /// Returns the element in the given column and row, or [`None`]
            /// if the indices are outside the matrix.
            #[inline]
            pub fn try_element(&self, col: usize, row: usize) -> Option<F> {
                (col < $n_cols && row < $n_rows).then(|| self.columns[col][row])
            }

            /// Sets the element in the given column and row.
            ///
            /// # Panics
            /// If the indices are outside the matrix.
            #[inline]
            pub fn set_element(&mut self, col: usize, row: usize, value: F) -> &mut Self {
                self[(col, row)] = value;
                self
            }

            /// Returns the column with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn column(&self, index: usize) -> $column<F> {
                self.try_column(index).unwrap_or_else(|| {
                    panic!(
                        "column index {index} out of bounds for matrix with {} columns",
                        $n_cols
                    )
                })
            }

            #[inline]
            pub fn try_column(&self, index: usize) -> Option<$column<F>> {
                self.columns.get(index).copied()
            }

            /// Replaces the column with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn set_column(&mut self, index: usize, column: &$column<F>) -> &mut Self {
                assert!(
                    index < $n_cols,
                    "column index {index} out of bounds for matrix with {} columns",
                    $n_cols
                );
                self.columns[index] = *column;
                $(self.$props = $crate::matrix::MatrixProperties::empty();)?
                self
            }

            /// Returns the row with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn row(&self, index: usize) -> $row<F> {
                self.try_row(index).unwrap_or_else(|| {
                    panic!(
                        "row index {index} out of bounds for matrix with {} rows",
                        $n_rows
                    )
                })
            }

            #[inline]
            pub fn try_row(&self, index: usize) -> Option<$row<F>> {
                (index < $n_rows).then(|| $row::new($(self.columns[$c][index]),+))
            }

            /// Replaces the row with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn set_row(&mut self, index: usize, row: &$row<F>) -> &mut Self {
                assert!(
                    index < $n_rows,
                    "row index {index} out of bounds for matrix with {} rows",
                    $n_rows
                );
                $(self.columns[$c][index] = row[$c];)+
                $(self.$props = $crate::matrix::MatrixProperties::empty();)?
                self
            }
        }

        impl<F: $crate::num::Float> ::std::ops::Index<(usize, usize)> for $t {
            type Output = F;

            /// # Panics
            /// If the indices are outside the matrix.
            #[inline]
            fn index(&self, (col, row): (usize, usize)) -> &F {
                assert!(
                    col < $n_cols && row < $n_rows,
                    "element ({col}, {row}) out of bounds for {}x{} matrix",
                    $n_cols,
                    $n_rows
                );
                &self.columns[col][row]
            }
        }

        impl<F: $crate::num::Float> ::std::ops::IndexMut<(usize, usize)> for $t {
            /// # Panics
            /// If the indices are outside the matrix.
            #[inline]
            fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut F {
                assert!(
                    col < $n_cols && row < $n_rows,
                    "element ({col}, {row}) out of bounds for {}x{} matrix",
                    $n_cols,
                    $n_rows
                );
                $(self.$props = $crate::matrix::MatrixProperties::empty();)?
                &mut self.columns[col][row]
            }
        }
    };
}
