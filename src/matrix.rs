use std::fmt;

use crate::{vec3, vec4, CastFrom, Number, One, Quat, Real, Trig, Vec3, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create
///   a matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] allow creating 2D
///   rotation matrices from a rotation angle.
/// - The affine constructors on [`Mat4`] ([`from_translation`], [`from_scale`],
///   [`from_rotation`], [`look_at`], [`from_scale_rotation_translation`]) build homogeneous
///   transform matrices; see the section below for the convention they follow.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a square matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`.
/// The first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use metria::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// and [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Transform convention
///
/// Affine transforms treat positions as *row* vectors that are multiplied onto the left of the
/// matrix (`v' = v * M`), so the translation lives in the **last row** and transforms compose
/// left-to-right in application order: `a * b` applies `a` first, then `b`.
/// [`Mat4::transform_point`] and [`Mat4::transform_vector`] apply a matrix under this convention.
///
/// [`from_translation`]: Mat4::from_translation
/// [`from_scale`]: Mat4::from_scale
/// [`from_rotation`]: Mat4::from_rotation
/// [`look_at`]: Mat4::look_at
/// [`from_scale_rotation_translation`]: Mat4::from_scale_rotation_translation
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`std::array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(std::array::from_fn(|col| {
            std::array::from_fn(|row| cb(row, col))
        }))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Converts each element to a different precision, returning a new matrix.
    pub fn cast<U: CastFrom<T>>(self) -> Matrix<U, R, C> {
        self.map(U::cast_from)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the row vector at index `row`.
    ///
    /// Rows are derived from the column storage; this panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns the column vector at index `col`.
    ///
    /// Panics if `col` is out of bounds.
    pub fn col(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self[(row, col)])
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self[(row, col)]
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), vec2(1, 4));
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Matrix::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }

    /// Returns whether this matrix is exactly the identity matrix.
    ///
    /// The comparison is exact, with no tolerance for rounding error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// assert!(Mat3f::IDENTITY.is_identity());
    /// assert!(!(Mat3f::IDENTITY * 0.9999).is_identity());
    /// ```
    pub fn is_identity(&self) -> bool
    where
        T: Zero + One + Copy + PartialEq,
    {
        *self == Self::IDENTITY
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::from_columns([
            [radians.cos(), radians.sin()],
            [-radians.sin(), radians.cos()],
        ])
    }
}

impl<T: Real> Matrix<T, 2, 2> {
    /// Computes the inverse of this matrix.
    ///
    /// Returns [`None`] when the determinant's magnitude does not exceed the machine epsilon,
    /// in which case no meaningful inverse exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// assert_eq!(Mat2f::IDENTITY.invert(), Some(Mat2f::IDENTITY));
    /// assert_eq!(Mat2f::ZERO.invert(), None);
    /// ```
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= T::EPSILON {
            return None;
        }

        let [[a, c], [b, d]] = self.0;
        Some(Matrix::from_columns([[d, -c], [-b, a]]) * det.recip())
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;

        let ei_fh = e * i - f * h;
        let di_fg = d * i - f * g;
        let dh_eg = d * h - e * g;

        a * ei_fh - b * di_fg + c * dh_eg
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Computes the inverse of this matrix via its adjugate.
    ///
    /// Returns [`None`] when the determinant's magnitude does not exceed the machine epsilon,
    /// in which case no meaningful inverse exists. The threshold is a fixed absolute value, so
    /// matrices with very large or very small entries can be misclassified; callers working at
    /// extreme scales should rescale first.
    pub fn invert(&self) -> Option<Self> {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;

        let ei_fh = e * i - f * h;
        let di_fg = d * i - f * g;
        let dh_eg = d * h - e * g;

        let det = a * ei_fh - b * di_fg + c * dh_eg;
        if det.abs() <= T::EPSILON {
            return None;
        }

        // Transposed cofactor matrix, divided by the determinant.
        let inv = det.recip();
        Some(
            Matrix::from_rows([
                [ei_fh, -(b * i - c * h), b * f - c * e],
                [-di_fg, a * i - c * g, -(a * f - c * d)],
                [dh_eg, -(a * h - b * g), a * e - b * d],
            ]) * inv,
        )
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by cofactor expansion along the first row; the six 2x2 sub-determinants are
    /// shared between the four cofactors (28 multiplications and 17 additions in total), and
    /// [`invert`][Self::invert] reuses the same scheme.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        // | a b c d |
        // | e f g h |
        // | i j k l |
        // | m n o p |
        let [[a, e, i, m], [b, f, j, n], [c, g, k, o], [d, h, l, p]] = self.0;

        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        a * (f * kp_lo - g * jp_ln + h * jo_kn) - b * (e * kp_lo - g * ip_lm + h * io_km)
            + c * (e * jp_ln - f * ip_lm + h * in_jm)
            - d * (e * jo_kn - f * io_km + g * in_jm)
    }

    /// Gets the translation component of this transform matrix (its last row).
    pub fn translation(&self) -> Vec3<T>
    where
        T: Copy,
    {
        vec3(self[(3, 0)], self[(3, 1)], self[(3, 2)])
    }

    /// Returns `self` with the translation component replaced by `translation`.
    pub fn with_translation(self, translation: Vec3<T>) -> Self {
        let mut mat = self;
        mat[(3, 0)] = translation.x;
        mat[(3, 1)] = translation.y;
        mat[(3, 2)] = translation.z;
        mat
    }

    /// Creates a translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat.transform_point(Vec3f::ZERO), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn from_translation(translation: Vec3<T>) -> Self {
        Self::IDENTITY.with_translation(translation)
    }

    /// Creates a scaling matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Mat4f::from_scale(vec3(2.0, 3.0, 4.0));
    /// assert_eq!(mat.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn from_scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale.extend(T::ONE))
    }

    /// Creates a transform matrix from an orthonormal basis and a position.
    ///
    /// The translation row encodes `-dot(axis, pos)` per axis, so transforming `pos` by the
    /// result yields the origin of the new basis (a camera/view-style matrix).
    pub fn from_basis(xaxis: Vec3<T>, yaxis: Vec3<T>, zaxis: Vec3<T>, pos: Vec3<T>) -> Self {
        Self::from_columns([
            xaxis.extend(-xaxis.dot(pos)),
            yaxis.extend(-yaxis.dot(pos)),
            zaxis.extend(-zaxis.dot(pos)),
            vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        ])
    }

    /// Transforms the point `point` by this matrix (`v' = v * M`), applying the translation row.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        Vector::from_fn(|col| {
            point.x * self[(0, col)]
                + point.y * self[(1, col)]
                + point.z * self[(2, col)]
                + self[(3, col)]
        })
    }

    /// Transforms the direction `vector` by this matrix (`v' = v * M`), ignoring the translation
    /// row.
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        Vector::from_fn(|col| {
            vector.x * self[(0, col)] + vector.y * self[(1, col)] + vector.z * self[(2, col)]
        })
    }

    /// Calculates the determinant of the 3x3 rotational component of this transform matrix.
    pub fn rotation_determinant(&self) -> T {
        self.resize::<3, 3>().determinant()
    }

    /// Returns whether this transform matrix flips handedness.
    ///
    /// The translation part of an affine transform cannot affect orientation, so a transform
    /// switches orientation iff the determinant of its 3x3 rotational component is negative.
    pub fn is_reflection(&self) -> bool
    where
        T: PartialOrd,
    {
        self.rotation_determinant() < T::ZERO
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Computes the inverse of this matrix: the adjugate (transposed cofactor matrix) divided by
    /// the determinant.
    ///
    /// Returns [`None`] when the determinant's magnitude does not exceed the machine epsilon,
    /// in which case no meaningful inverse exists. The threshold is a fixed absolute value, so
    /// matrices with very large or very small entries can be misclassified; callers working at
    /// extreme scales should rescale first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let mat = Mat4d::from_scale(vec3(2.0, 3.0, 4.0));
    /// let inv = mat.invert().unwrap();
    /// assert_approx_eq!(inv.transform_point(vec3(2.0, 3.0, 4.0)), vec3(1.0, 1.0, 1.0));
    ///
    /// assert_eq!(Mat4d::ZERO.invert(), None);
    /// ```
    pub fn invert(&self) -> Option<Self> {
        // | a b c d |
        // | e f g h |
        // | i j k l |
        // | m n o p |
        let [[a, e, i, m], [b, f, j, n], [c, g, k, o], [d, h, l, p]] = self.0;

        // The six 2x2 sub-determinants of the lower half are shared between the determinant and
        // the first two columns of the cofactor matrix.
        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        let c11 = f * kp_lo - g * jp_ln + h * jo_kn;
        let c12 = -(e * kp_lo - g * ip_lm + h * io_km);
        let c13 = e * jp_ln - f * ip_lm + h * in_jm;
        let c14 = -(e * jo_kn - f * io_km + g * in_jm);

        let det = a * c11 + b * c12 + c * c13 + d * c14;
        if det.abs() <= T::EPSILON {
            return None;
        }
        let inv = det.recip();

        let m11 = c11 * inv;
        let m21 = c12 * inv;
        let m31 = c13 * inv;
        let m41 = c14 * inv;

        let m12 = -(b * kp_lo - c * jp_ln + d * jo_kn) * inv;
        let m22 = (a * kp_lo - c * ip_lm + d * io_km) * inv;
        let m32 = -(a * jp_ln - b * ip_lm + d * in_jm) * inv;
        let m42 = (a * jo_kn - b * io_km + c * in_jm) * inv;

        let gp_ho = g * p - h * o;
        let fp_hn = f * p - h * n;
        let fo_gn = f * o - g * n;
        let ep_hm = e * p - h * m;
        let eo_gm = e * o - g * m;
        let en_fm = e * n - f * m;

        let m13 = (b * gp_ho - c * fp_hn + d * fo_gn) * inv;
        let m23 = -(a * gp_ho - c * ep_hm + d * eo_gm) * inv;
        let m33 = (a * fp_hn - b * ep_hm + d * en_fm) * inv;
        let m43 = -(a * fo_gn - b * eo_gm + c * en_fm) * inv;

        let gl_hk = g * l - h * k;
        let fl_hj = f * l - h * j;
        let fk_gj = f * k - g * j;
        let el_hi = e * l - h * i;
        let ek_gi = e * k - g * i;
        let ej_fi = e * j - f * i;

        let m14 = -(b * gl_hk - c * fl_hj + d * fk_gj) * inv;
        let m24 = (a * gl_hk - c * el_hi + d * ek_gi) * inv;
        let m34 = -(a * fl_hj - b * el_hi + d * ej_fi) * inv;
        let m44 = (a * fk_gj - b * ek_gi + c * ej_fi) * inv;

        Some(Matrix::from_rows([
            [m11, m12, m13, m14],
            [m21, m22, m23, m24],
            [m31, m32, m33, m34],
            [m41, m42, m43, m44],
        ]))
    }

    /// Creates a rotation matrix from a quaternion, with zero translation.
    ///
    /// The quaternion is normalized first, so non-unit quaternions are accepted; the zero
    /// quaternion has no meaningful direction and yields the identity.
    pub fn from_rotation(rotation: Quat<T>) -> Self {
        let mut mat = rotation.to_mat3().resize::<4, 4>();
        mat[(3, 3)] = T::ONE;
        mat
    }

    /// Creates a transform that scales by `scale`, then rotates by `rotation`, then translates
    /// by `translation` (the standard TRS composition).
    ///
    /// # Examples
    ///
    /// ```
    /// # use metria::*;
    /// let t = vec3(5.0, 6.0, 7.0);
    /// let mat = Mat4f::from_scale_rotation_translation(
    ///     vec3(2.0, 2.0, 2.0),
    ///     Quat::from_rotation_z(1.0),
    ///     t,
    /// );
    /// // The origin is unaffected by scale and rotation and lands on the translation.
    /// assert_approx_eq!(mat.transform_point(Vec3f::ZERO), t);
    /// ```
    pub fn from_scale_rotation_translation(
        scale: Vec3<T>,
        rotation: Quat<T>,
        translation: Vec3<T>,
    ) -> Self {
        Self::from_scale(scale) * Self::from_rotation(rotation) * Self::from_translation(translation)
    }

    /// Creates a view matrix for a camera at `pos`, looking at `target`.
    ///
    /// `up` controls the roll of the camera. If it is (nearly) parallel to the viewing
    /// direction it cannot do that, and the world X or Y axis is substituted, whichever is less
    /// parallel to the viewing direction.
    pub fn look_at(pos: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let zaxis = (target - pos).normalize();
        let up = if up.dot(zaxis).abs() > T::ONE - T::PARALLEL_EPSILON {
            if zaxis.x.abs() < zaxis.y.abs() {
                Vec3::X
            } else {
                Vec3::Y
            }
        } else {
            up
        };
        let xaxis = up.cross(zaxis).normalize();
        let yaxis = zaxis.cross(xaxis);
        Self::from_basis(xaxis, yaxis, zaxis, pos)
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, vec2, Vec3d};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), vec2(1, 2));
    }

    #[test]
    fn rows_and_columns() {
        let mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mat.row(0), crate::vec3(0, 1, 2));
        assert_eq!(mat.row(1), crate::vec3(3, 4, 5));
        assert_eq!(mat.col(0), vec2(0, 3));
        assert_eq!(mat.col(2), vec2(2, 5));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, vec2(4 * 0 + 5 * 1, 4 * 2 + 5 * 3));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_absorbs() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [ 1.0, -2.5,  3.0, 0.5],
            [ 0.0,  4.0, -1.0, 2.0],
            [ 7.0,  0.5,  0.0, 1.0],
            [-3.0,  1.0,  2.0, 1.0f32],
        ]);
        assert_eq!(Mat4f::IDENTITY * mat, mat);
        assert_eq!(mat * Mat4f::IDENTITY, mat);

        assert!(Mat4f::IDENTITY.is_identity());
        assert!(!mat.is_identity());
        // The identity check is exact.
        assert!(!(Mat4f::IDENTITY * (1.0 + f32::EPSILON)).is_identity());
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        // Cofactor expansion along the first row, checked against the product rule for a
        // block-diagonal matrix.
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [ 2.0, 3.0, 0.0, 0.0],
            [ 1.0, 4.0, 0.0, 0.0],
            [ 0.0, 0.0, 5.0, 1.0],
            [ 0.0, 0.0, 2.0, 3.0f64],
        ]);
        assert_approx_eq!(mat.determinant(), (2.0 * 4.0 - 3.0 * 1.0) * (5.0 * 3.0 - 1.0 * 2.0));

        let scaled = Mat4d::from_scale(crate::vec3(2.0, 3.0, 4.0));
        assert_approx_eq!(scaled.determinant(), 24.0);
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.invert().unwrap());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, ccw.invert().unwrap());

        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert().unwrap()).abs(1e-6);
    }

    #[test]
    fn invert_scale() {
        let mat = Mat4d::from_scale(crate::vec3(2.0, 3.0, 4.0));
        let inv = mat.invert().unwrap();
        assert_approx_eq!(inv.transform_point(crate::vec3(2.0, 3.0, 4.0)), Vec3d::splat(1.0));
        assert_approx_eq!(mat * inv, Mat4d::IDENTITY);
    }

    #[test]
    fn invert_singular() {
        // Two identical columns make the determinant vanish.
        #[rustfmt::skip]
        let mat = Mat4d::from_columns([
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(mat.determinant(), 0.0);
        assert_eq!(mat.invert(), None);

        assert_eq!(Mat3d::ZERO.invert(), None);
        assert_eq!(Mat2d::ZERO.invert(), None);

        // The threshold is a fixed absolute epsilon: a uniformly tiny but perfectly regular
        // matrix is reported as singular.
        let tiny = Mat4d::from_scale(Vec3d::splat(1e-6));
        assert!(tiny.determinant().abs() <= f64::EPSILON);
        assert_eq!(tiny.invert(), None);
    }

    #[test]
    fn invert_round_trip() {
        fastrand::seed(0x5EED);
        for _ in 0..100 {
            let mat = random_affine();
            let inv = match mat.invert() {
                Some(inv) => inv,
                None => continue,
            };
            assert_approx_eq!(mat * inv, Mat4d::IDENTITY).abs(1e-9);
            assert_approx_eq!(inv * mat, Mat4d::IDENTITY).abs(1e-9);
            assert_approx_eq!(inv.invert().unwrap(), mat).abs(1e-9);
        }
    }

    #[test]
    fn invert_matches_3x3() {
        fastrand::seed(0xF00D);
        for _ in 0..100 {
            let mat = Mat3d::from_fn(|_, _| fastrand::f64() * 4.0 - 2.0);
            let inv = match mat.invert() {
                Some(inv) => inv,
                None => continue,
            };
            assert_approx_eq!(mat * inv, Mat3d::IDENTITY).abs(1e-9);
        }
    }

    #[test]
    fn translation_lives_in_the_last_row() {
        let t = crate::vec3(1.0, 2.0, 3.0);
        let mat = Mat4d::from_translation(t);
        assert_eq!(mat.translation(), t);
        assert_eq!(mat.row(3), crate::vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(mat.col(3), crate::vec4(0.0, 0.0, 0.0, 1.0));

        assert_eq!(mat.transform_point(Vec3d::ZERO), t);
        // Directions ignore translation entirely.
        assert_eq!(mat.transform_vector(Vec3d::X), Vec3d::X);
    }

    #[test]
    fn trs_round_trip() {
        let t = crate::vec3(4.0, -2.0, 9.0);
        let q = Quat::from_axis_angle(crate::vec3(1.0, 2.0, -1.0), 0.8);
        let s = crate::vec3(2.0, 0.5, 3.0);

        // The origin only picks up the translation, for arbitrary rotation and scale.
        let mat = Mat4d::from_scale_rotation_translation(s, q, t);
        assert_approx_eq!(mat.transform_point(Vec3d::ZERO), t).abs(1e-12);

        // Under identity rotation and scale, a unit axis is translated but otherwise unchanged.
        let mat = Mat4d::from_scale_rotation_translation(Vec3d::splat(1.0), Quat::IDENTITY, t);
        assert_approx_eq!(mat.transform_point(Vec3d::X), Vec3d::X + t).abs(1e-12);

        // Application order: scale first, then rotate, then translate.
        let quarter = Quat::from_rotation_z(TAU / 4.0);
        let mat = Mat4d::from_scale_rotation_translation(Vec3d::splat(2.0), quarter, t);
        assert_approx_eq!(mat.transform_point(Vec3d::X), crate::vec3(0.0, 2.0, 0.0) + t).abs(1e-9);
    }

    #[test]
    fn look_at() {
        // A camera at the origin looking down +Z leaves points on the Z axis in place.
        let mat = Mat4d::look_at(Vec3d::ZERO, Vec3d::Z, Vec3d::Y);
        assert_approx_eq!(mat.transform_point(crate::vec3(0.0, 0.0, 5.0)), crate::vec3(0.0, 0.0, 5.0));

        // The camera position maps to the view-space origin.
        let pos = crate::vec3(1.0, 2.0, 3.0);
        let mat = Mat4d::look_at(pos, crate::vec3(-4.0, 0.0, 7.0), Vec3d::Y);
        assert_approx_eq!(mat.transform_point(pos), Vec3d::ZERO).abs(1e-12);

        // The basis is orthonormal, so the view transform preserves handedness.
        assert!(!mat.is_reflection());
        assert_approx_eq!(mat.rotation_determinant(), 1.0).abs(1e-12);
    }

    #[test]
    fn look_at_parallel_up() {
        // An up vector parallel to the viewing direction is replaced by a world axis instead of
        // producing a degenerate basis.
        let mat = Mat4d::look_at(Vec3d::ZERO, Vec3d::Y, Vec3d::Y);
        assert_approx_eq!(mat.rotation_determinant(), 1.0).abs(1e-12);

        let mat = Mat4d::look_at(Vec3d::ZERO, -Vec3d::Y, Vec3d::Y);
        assert_approx_eq!(mat.rotation_determinant(), 1.0).abs(1e-12);
    }

    #[test]
    fn reflection() {
        assert!(!Mat4d::IDENTITY.is_reflection());
        assert!(!Mat4d::from_scale(crate::vec3(2.0, 3.0, 4.0)).is_reflection());

        // Mirroring a single axis flips handedness; mirroring two restores it.
        assert!(Mat4d::from_scale(crate::vec3(-1.0, 1.0, 1.0)).is_reflection());
        assert!(!Mat4d::from_scale(crate::vec3(-1.0, -1.0, 1.0)).is_reflection());

        // Translation does not affect orientation.
        let mat = Mat4d::from_scale(crate::vec3(-1.0, 1.0, 1.0))
            .with_translation(crate::vec3(10.0, 0.0, 0.0));
        assert!(mat.is_reflection());
    }

    fn random_affine() -> Mat4d {
        let axis = crate::vec3(
            fastrand::f64() * 2.0 - 1.0,
            fastrand::f64() * 2.0 - 1.0,
            fastrand::f64() * 2.0 - 1.0,
        );
        let rotation = Quat::from_axis_angle(axis, fastrand::f64() * TAU);
        let scale = crate::vec3(
            fastrand::f64() * 1.5 + 0.5,
            fastrand::f64() * 1.5 + 0.5,
            fastrand::f64() * 1.5 + 0.5,
        );
        let translation = crate::vec3(
            fastrand::f64() * 10.0 - 5.0,
            fastrand::f64() * 10.0 - 5.0,
            fastrand::f64() * 10.0 - 5.0,
        );
        Mat4d::from_scale_rotation_translation(scale, rotation, translation)
    }
}
