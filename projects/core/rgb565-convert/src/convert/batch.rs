//! Conversion of whole buffers of RGBA8888 colours.
//!
//! These validate buffer sizes up front and then convert element by element. Only the first
//! `src.len()` entries of the destination are written; any remainder is left untouched.

use super::{shift_mask, ConvertStrategy};
use crate::color_565::Color565;
use crate::color_rgba32::Rgba32;
use crate::error::ConvertError;
use multiversion::multiversion;

/// Converts packed RGBA8888 colours to [`Color565`] with the canonical strategy.
///
/// # Arguments
///
/// * `src` - Packed colours, see [`crate::rgba32_to_rgb565`] for the layout.
/// * `dst` - Receives the converted colours. Must be at least `src.len()` long.
///
/// # Errors
///
/// [`ConvertError::OutputBufferTooSmall`] if `dst` is shorter than `src`.
///
/// # Examples
///
/// ```
/// use rgb565_convert::{color_565::Color565, convert_slice};
///
/// let src = [0x00FF_FFFF, 0xDDCC_BBAA];
/// let mut dst = [Color565::default(); 2];
/// convert_slice(&src, &mut dst).unwrap();
/// assert_eq!(dst.map(|c| c.raw_value()), [0xFFFF, 0xADD9]);
/// ```
pub fn convert_slice(src: &[u32], dst: &mut [Color565]) -> Result<(), ConvertError> {
    ensure_output_len(src.len(), dst.len())?;
    convert_slice_shift_mask(src, &mut dst[..src.len()]);
    Ok(())
}

/// Same as [`convert_slice`], converting with the given `strategy`.
///
/// # Errors
///
/// [`ConvertError::OutputBufferTooSmall`] if `dst` is shorter than `src`.
pub fn convert_slice_with(
    strategy: ConvertStrategy,
    src: &[u32],
    dst: &mut [Color565],
) -> Result<(), ConvertError> {
    ensure_output_len(src.len(), dst.len())?;
    match strategy {
        ConvertStrategy::ShiftMask => convert_slice_shift_mask(src, &mut dst[..src.len()]),
        #[allow(unreachable_patterns)]
        _ => {
            for (out, &color32) in dst.iter_mut().zip(src) {
                *out = strategy.convert(color32);
            }
        }
    }
    Ok(())
}

/// Converts RGBA8888 pixels given as raw bytes (`R, G, B, A` per pixel) to [`Color565`].
///
/// Reads bytes in memory order, so the result does not depend on the host's byte order.
///
/// # Errors
///
/// - [`ConvertError::InvalidLength`] if `src.len()` is not a multiple of 4.
/// - [`ConvertError::OutputBufferTooSmall`] if `dst` holds fewer than `src.len() / 4` colours.
pub fn convert_bytes(src: &[u8], dst: &mut [Color565]) -> Result<(), ConvertError> {
    if src.len() % 4 != 0 {
        return Err(ConvertError::InvalidLength(src.len()));
    }

    ensure_output_len(src.len() / 4, dst.len())?;
    for (out, pixel) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *out = Rgba32::new(pixel[0], pixel[1], pixel[2], pixel[3]).to_color_565();
    }
    Ok(())
}

#[inline]
fn ensure_output_len(needed: usize, actual: usize) -> Result<(), ConvertError> {
    if actual < needed {
        return Err(ConvertError::OutputBufferTooSmall { needed, actual });
    }
    Ok(())
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
fn convert_slice_shift_mask(src: &[u32], dst: &mut [Color565]) {
    for (out, &color32) in dst.iter_mut().zip(src) {
        *out = Color565::from_raw(shift_mask(color32));
    }
}
