//! Scalar abstraction shared by every value type in the crate.
//!
//! Vectors, matrices and quaternions are generic over [`Real`], which is implemented
//! for `f32` (single precision) and `f64` (double precision). The trait extends
//! [`nalgebra::RealField`] with the handful of things the kernel needs that nalgebra
//! does not provide: literal constants, NaN/∞ sentinels and the big-endian
//! IEEE-754 byte layout used by [`crate::codec`].

use core::fmt::Debug;
use core::str::FromStr;
use nalgebra::RealField;
use std::sync::OnceLock;

/// Floating point scalar usable by the kernel.
pub trait Real: RealField + Copy + Debug + Default + Send + Sync + 'static {
    /// Width of one encoded scalar in bytes.
    const BYTES: usize;
    /// Precision tag used in textual output (`'f'` or `'d'`).
    const PRECISION: char;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    /// Converts an `f64` literal into this precision.
    fn lit(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    fn is_nan_value(self) -> bool;

    fn is_infinite_value(self) -> bool;

    /// Writes the big-endian IEEE-754 bit pattern into `buf[..Self::BYTES]`.
    ///
    /// # Panics
    /// If `buf` is shorter than [`Real::BYTES`].
    fn write_be(self, buf: &mut [u8]);

    /// Reads a big-endian IEEE-754 bit pattern from `buf[..Self::BYTES]`.
    ///
    /// # Panics
    /// If `buf` is shorter than [`Real::BYTES`].
    fn read_be(buf: &[u8]) -> Self;

    /// Degrees to radians.
    #[inline]
    fn deg_to_rad(self) -> Self {
        self * Self::lit(core::f64::consts::PI / 180.0)
    }
}

impl Real for f32 {
    const BYTES: usize = 4;
    const PRECISION: char = 'f';

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;

    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }

    #[inline]
    fn write_be(self, buf: &mut [u8]) {
        buf[..4].copy_from_slice(&self.to_bits().to_be_bytes());
    }

    #[inline]
    fn read_be(buf: &[u8]) -> Self {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&buf[..4]);
        f32::from_bits(u32::from_be_bytes(raw))
    }
}

impl Real for f64 {
    const BYTES: usize = 8;
    const PRECISION: char = 'd';

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;

    #[inline]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }

    #[inline]
    fn write_be(self, buf: &mut [u8]) {
        buf[..8].copy_from_slice(&self.to_bits().to_be_bytes());
    }

    #[inline]
    fn read_be(buf: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&buf[..8]);
        f64::from_bits(u64::from_be_bytes(raw))
    }
}

/// Lazily-initialized tolerance used by the `*_approx` predicates.
/// Defaults to `1e-6`, but can be overridden:
///  1) **Build-time**: set env var `GEOKERN_TOLERANCE` (e.g. `GEOKERN_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<f64> = OnceLock::new();

const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Returns the current tolerance, converted to the requested precision.
pub fn tolerance<T: Real>() -> T {
    let value = *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("GEOKERN_TOLERANCE") {
            if let Ok(value) = f64::from_str(environment_variable) {
                return value.max(f64::EPSILON);
            }
        }
        DEFAULT_TOLERANCE
    });
    T::lit(value)
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `geokern::float_types::set_tolerance(1e-9);`
pub fn set_tolerance(value: f64) {
    let _ = TOLERANCE_CELL.set(value.max(f64::EPSILON));
}
