//! Fixed-width binary encoding.
//!
//! Every value type is written as its scalars in declared order (`x, y, z[, w]`, matrices
//! row-major), each as the big-endian IEEE-754 bit pattern: 4 bytes per `f32`, 8 per `f64`.
//! There is no tag or length prefix; the caller tracks which decoder applies and where each
//! record starts. Because the encoding is a bit copy, decoding an encoded value gives back
//! exactly the same bits, NaN payloads included.
//!
//! | type        | f32 | f64 |
//! |-------------|-----|-----|
//! | `Vec3`      | 12  | 24  |
//! | `Vec4`      | 16  | 32  |
//! | `Quat`      | 16  | 32  |
//! | `Mat4`      | 64  | 128 |
//! | `Pose`      | 40  | 80  |

use crate::errors::CodecError;
use crate::float_types::Real;
use crate::matrix::Mat4;
use crate::quaternion::Quat;
use crate::transform::Pose;
use crate::vector::{Vec3, Vec4};
use core2::io::{self, Read, Write};

/// A value with a fixed-size big-endian byte representation.
pub trait ByteCodec: Sized {
    /// Encoded length in bytes.
    const BYTES: usize;

    /// Encodes into `buf[offset..offset + Self::BYTES]`.
    ///
    /// # Panics
    /// If `buf` is shorter than `offset + Self::BYTES`.
    fn write_bytes(&self, buf: &mut [u8], offset: usize);

    /// Decodes from `buf[offset..offset + Self::BYTES]`.
    ///
    /// # Panics
    /// If `buf` is shorter than `offset + Self::BYTES`.
    fn read_bytes(buf: &[u8], offset: usize) -> Self;

    /// Encodes into a freshly allocated buffer of exactly [`ByteCodec::BYTES`] bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; Self::BYTES];
        self.write_bytes(&mut buf, 0);
        buf
    }

    /// Encodes at the start of `buf`.
    fn to_bytes_into(&self, buf: &mut [u8]) {
        self.write_bytes(buf, 0);
    }

    /// Decodes from the start of `buf`.
    fn from_bytes(buf: &[u8]) -> Self {
        Self::read_bytes(buf, 0)
    }

    /// [`ByteCodec::write_bytes`] with a bounds check instead of a panic.
    fn try_write_bytes(&self, buf: &mut [u8], offset: usize) -> Result<(), CodecError> {
        check_len(buf.len(), offset, Self::BYTES)?;
        self.write_bytes(buf, offset);
        Ok(())
    }

    /// [`ByteCodec::read_bytes`] with a bounds check instead of a panic.
    fn try_read_bytes(buf: &[u8], offset: usize) -> Result<Self, CodecError> {
        check_len(buf.len(), offset, Self::BYTES)?;
        Ok(Self::read_bytes(buf, offset))
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buf = vec![0u8; Self::BYTES];
        reader.read_exact(&mut buf)?;
        Ok(Self::from_bytes(&buf))
    }
}

fn check_len(available: usize, offset: usize, needed: usize) -> Result<(), CodecError> {
    match offset.checked_add(needed) {
        Some(end) if end <= available => Ok(()),
        _ => Err(CodecError::BufferTooShort {
            offset,
            needed,
            available,
        }),
    }
}

fn write_scalars<T: Real>(values: &[T], buf: &mut [u8], offset: usize) {
    let out = &mut buf[offset..offset + values.len() * T::BYTES];
    for (chunk, value) in out.chunks_exact_mut(T::BYTES).zip(values) {
        value.write_be(chunk);
    }
}

fn read_scalars<T: Real, const N: usize>(buf: &[u8], offset: usize) -> [T; N] {
    let input = &buf[offset..offset + N * T::BYTES];
    let mut values = [T::ZERO; N];
    for (value, chunk) in values.iter_mut().zip(input.chunks_exact(T::BYTES)) {
        *value = T::read_be(chunk);
    }
    values
}

impl<T: Real> ByteCodec for Vec3<T> {
    const BYTES: usize = 3 * T::BYTES;

    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        write_scalars(&self.to_array(), buf, offset);
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        Self::from_array(read_scalars(buf, offset))
    }
}

impl<T: Real> ByteCodec for Vec4<T> {
    const BYTES: usize = 4 * T::BYTES;

    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        write_scalars(&self.to_array(), buf, offset);
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        Self::from_array(read_scalars(buf, offset))
    }
}

impl<T: Real> ByteCodec for Quat<T> {
    const BYTES: usize = 4 * T::BYTES;

    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        write_scalars(&[self.x, self.y, self.z, self.w], buf, offset);
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        let [x, y, z, w] = read_scalars(buf, offset);
        Self::new(x, y, z, w)
    }
}

impl<T: Real> ByteCodec for Mat4<T> {
    const BYTES: usize = 16 * T::BYTES;

    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        let rows = self.to_rows();
        write_scalars(rows.as_flattened(), buf, offset);
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        let flat: [T; 16] = read_scalars(buf, offset);
        let mut rows = [[T::ZERO; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(flat.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self::from_rows(rows)
    }
}

impl<T: Real> ByteCodec for Pose<T> {
    const BYTES: usize = 2 * Vec3::<T>::BYTES + Quat::<T>::BYTES;

    fn write_bytes(&self, buf: &mut [u8], offset: usize) {
        let rot_at = offset + Vec3::<T>::BYTES;
        let scale_at = rot_at + Quat::<T>::BYTES;
        self.position.write_bytes(buf, offset);
        self.rotation.write_bytes(buf, rot_at);
        self.scale.write_bytes(buf, scale_at);
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Self {
        let rot_at = offset + Vec3::<T>::BYTES;
        let scale_at = rot_at + Quat::<T>::BYTES;
        Self {
            position: Vec3::read_bytes(buf, offset),
            rotation: Quat::read_bytes(buf, rot_at),
            scale: Vec3::read_bytes(buf, scale_at),
        }
    }
}

/// Encodes `values` back to back into one contiguous buffer.
pub fn encode_slice<C: ByteCodec + Sync>(values: &[C]) -> Vec<u8> {
    let mut buf = vec![0u8; values.len() * C::BYTES];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        buf.par_chunks_mut(C::BYTES)
            .zip(values.par_iter())
            .for_each(|(chunk, value)| value.write_bytes(chunk, 0));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (chunk, value) in buf.chunks_mut(C::BYTES).zip(values) {
            value.write_bytes(chunk, 0);
        }
    }

    tracing::trace!(count = values.len(), bytes = buf.len(), "encoded batch");
    buf
}

/// Decodes a buffer produced by [`encode_slice`].
///
/// # Errors
/// [`CodecError::RaggedLength`] if `buf` is not a whole number of records.
pub fn decode_slice<C: ByteCodec + Send>(buf: &[u8]) -> Result<Vec<C>, CodecError> {
    if buf.len() % C::BYTES != 0 {
        tracing::debug!(len = buf.len(), record = C::BYTES, "rejecting ragged batch");
        return Err(CodecError::RaggedLength {
            len: buf.len(),
            record: C::BYTES,
        });
    }

    #[cfg(feature = "parallel")]
    let values = {
        use rayon::prelude::*;
        buf.par_chunks(C::BYTES).map(C::from_bytes).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let values = buf.chunks(C::BYTES).map(C::from_bytes).collect();

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_sizes() {
        assert_eq!(Vec3::<f32>::BYTES, 12);
        assert_eq!(Vec3::<f64>::BYTES, 24);
        assert_eq!(Vec4::<f32>::BYTES, 16);
        assert_eq!(Vec4::<f64>::BYTES, 32);
        assert_eq!(Quat::<f32>::BYTES, 16);
        assert_eq!(Quat::<f64>::BYTES, 32);
        assert_eq!(Mat4::<f64>::BYTES, 128);
        assert_eq!(Mat4::<f32>::BYTES, 64);
        assert_eq!(Pose::<f32>::BYTES, 40);
        assert_eq!(Pose::<f64>::BYTES, 80);
    }

    #[test]
    fn short_buffer_is_reported() {
        let mut buf = [0u8; 20];
        let err = Vec3::new(1.0f64, 2.0, 3.0).try_write_bytes(&mut buf, 0);
        assert_eq!(
            err,
            Err(CodecError::BufferTooShort {
                offset: 0,
                needed: 24,
                available: 20
            })
        );
    }

    #[test]
    fn offset_overflow_is_reported() {
        let buf = [0u8; 4];
        assert!(Vec3::<f32>::try_read_bytes(&buf, usize::MAX).is_err());
    }
}
