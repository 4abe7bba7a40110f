use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// Closed set of scalar types the matrix kernel operates on.
///
/// Implemented for `f32` and `f64` only; the gemm hook routes to the
/// matching `matrixmultiply` kernel.
pub trait Element: 'static + Sized + Copy + Float + NumAssignOps + Display + Debug {
    const ZERO: Self;
    const ONE: Self;

    fn from_f64(val: f64) -> Self;
    fn from_usize(val: usize) -> Self;

    /// C := alpha * A * B + beta * C over strided buffers.
    ///
    /// # Safety
    /// The pointers must address buffers valid for the given dimensions
    /// and strides.
    #[allow(clippy::too_many_arguments)]
    unsafe fn gemm(
        m: usize,
        k: usize,
        n: usize,
        alpha: Self,
        a: *const Self,
        rsa: isize,
        csa: isize,
        b: *const Self,
        rsb: isize,
        csb: isize,
        beta: Self,
        c: *mut Self,
        rsc: isize,
        csc: isize,
    );
}

macro_rules! impl_element {
    ($ty:ty, $gemm:ident) => {
        impl Element for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn from_f64(val: f64) -> Self {
                val as $ty
            }

            #[inline]
            fn from_usize(val: usize) -> Self {
                val as $ty
            }

            #[inline]
            unsafe fn gemm(
                m: usize,
                k: usize,
                n: usize,
                alpha: Self,
                a: *const Self,
                rsa: isize,
                csa: isize,
                b: *const Self,
                rsb: isize,
                csb: isize,
                beta: Self,
                c: *mut Self,
                rsc: isize,
                csc: isize,
            ) {
                unsafe {
                    matrixmultiply::$gemm(m, k, n, alpha, a, rsa, csa, b, rsb, csb, beta, c, rsc, csc);
                }
            }
        }
    };
}

impl_element!(f32, sgemm);
impl_element!(f64, dgemm);
