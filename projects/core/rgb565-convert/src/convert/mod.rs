//! # RGBA8888 to RGB565
//!
//! Takes a 32-bit colour whose bytes sit in memory as `R, G, B, A` and packs the top bits
//! of each colour channel into 16 bits. Alpha is read as part of the input but never
//! contributes to the output.
//!
//! ```text
//! u32 (little endian):  AAAAAAAA BBBBBbbb GGGGGGgg RRRRRrrr
//!                                  |        |        |
//! u16:                          RRRRR GGGGGG BBBBB
//! ```
//!
//! Each strategy in this module computes that same result with a slightly different
//! technique. [`shift_mask`] is the canonical one: it works on the integer's value, so
//! it holds on any host byte order. The `byte_view` strategies read the integer's storage
//! directly and are only available on little endian targets.

mod shift_mask;

#[cfg(all(feature = "byte-view", target_endian = "little"))]
mod byte_view;

pub mod batch;

pub use shift_mask::shift_mask;

#[cfg(all(feature = "byte-view", target_endian = "little"))]
pub use byte_view::{byte_view_fused, byte_view_inline, byte_view_named};

#[cfg(all(feature = "byte-view", target_endian = "big"))]
compile_error!(
    "The `byte-view` feature reads colours in little endian storage order. Disable it on big endian targets."
);

use crate::color_565::Color565;
use derive_enum_all_values::AllValues;

/// Converts a packed RGBA8888 colour to [`Color565`] using the canonical strategy.
///
/// `color32` holds red in bits 0-7, green in 8-15, blue in 16-23 and alpha in 24-31,
/// i.e. the bytes `R, G, B, A` read as a little endian `u32`.
///
/// Total over all inputs, never fails.
///
/// # Examples
///
/// ```
/// use rgb565_convert::rgba32_to_rgb565;
///
/// assert_eq!(rgba32_to_rgb565(0x00FF_FFFF).raw_value(), 0xFFFF);
/// assert_eq!(rgba32_to_rgb565(0xFF00_0000).raw_value(), 0x0000);
/// ```
#[inline]
pub const fn rgba32_to_rgb565(color32: u32) -> Color565 {
    Color565::from_raw(shift_mask(color32))
}

/// The techniques available for packing an RGBA8888 colour into RGB565.
///
/// All of them produce bit-identical results. Use [`ConvertStrategy::all_values`] to list
/// the ones compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum ConvertStrategy {
    /// Shift and mask the integer. Independent of host byte order.
    #[default]
    ShiftMask,
    /// Read channel bytes through a named byte pointer into the integer's storage.
    #[cfg(all(feature = "byte-view", target_endian = "little"))]
    ByteViewNamed,
    /// As [`ConvertStrategy::ByteViewNamed`], casting the pointer at every read.
    #[cfg(all(feature = "byte-view", target_endian = "little"))]
    ByteViewInline,
    /// As [`ConvertStrategy::ByteViewInline`], with each channel's shifts fused into one.
    #[cfg(all(feature = "byte-view", target_endian = "little"))]
    ByteViewFused,
}

impl ConvertStrategy {
    /// Converts a packed RGBA8888 colour to [`Color565`] with this strategy.
    #[inline]
    pub fn convert(self, color32: u32) -> Color565 {
        Color565::from_raw(match self {
            Self::ShiftMask => shift_mask(color32),
            #[cfg(all(feature = "byte-view", target_endian = "little"))]
            Self::ByteViewNamed => byte_view_named(color32),
            #[cfg(all(feature = "byte-view", target_endian = "little"))]
            Self::ByteViewInline => byte_view_inline(color32),
            #[cfg(all(feature = "byte-view", target_endian = "little"))]
            Self::ByteViewFused => byte_view_fused(color32),
        })
    }

    /// Short, kebab-case name of the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShiftMask => "shift-mask",
            #[cfg(all(feature = "byte-view", target_endian = "little"))]
            Self::ByteViewNamed => "byte-view-named",
            #[cfg(all(feature = "byte-view", target_endian = "little"))]
            Self::ByteViewInline => "byte-view-inline",
            #[cfg(all(feature = "byte-view", target_endian = "little"))]
            Self::ByteViewFused => "byte-view-fused",
        }
    }

    /// Looks up a strategy by its [`name`](Self::name), ignoring ASCII case.
    ///
    /// Returns [`None`] for unknown names and for strategies not compiled into this build.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
    }
}
