//! Conversions which read the colour's channels straight out of the `u32`'s storage.
//!
//! The bytes of a `u32` only sit in `R, G, B, A` order on little endian targets, so this
//! module is not compiled anywhere else. See the parent module for the portable version.
//!
//! All 3 functions here produce the same result as [`super::shift_mask`].

/// Reads the channel bytes through a named pointer into `color32`'s storage,
/// then truncates and repacks them.
#[inline(always)]
pub fn byte_view_named(color32: u32) -> u16 {
    let p32 = &color32 as *const u32 as *const u8;

    // SAFETY: `p32` points at the 4 bytes of a live `u32`, offsets 0-2 are in bounds
    // and `u8` has no alignment requirement.
    let (r8, g8, b8) = unsafe {
        (
            *p32.add(0) as u16,
            *p32.add(1) as u16,
            *p32.add(2) as u16,
        )
    };

    // Reduce
    let r5 = r8 >> 3;
    let g6 = g8 >> 2;
    let b5 = b8 >> 3;

    (r5 << 11) | (g6 << 5) | b5
}

/// Same as [`byte_view_named`], but casts `&color32` at every read instead of keeping
/// a named pointer around.
#[inline(always)]
pub fn byte_view_inline(color32: u32) -> u16 {
    // SAFETY: Each read is within the 4 bytes of a live `u32`; `u8` is always aligned.
    let (r8, g8, b8) = unsafe {
        (
            *(&color32 as *const u32 as *const u8).add(0) as u16,
            *(&color32 as *const u32 as *const u8).add(1) as u16,
            *(&color32 as *const u32 as *const u8).add(2) as u16,
        )
    };

    let r5 = r8 >> 3;
    let g6 = g8 >> 2;
    let b5 = b8 >> 3;

    (r5 << 11) | (g6 << 5) | b5
}

/// Same as [`byte_view_inline`], but each channel's `>> n << m` pair is folded into a
/// single mask and shift, and no intermediate values are named.
#[inline(always)]
pub fn byte_view_fused(color32: u32) -> u16 {
    let bytes = &color32 as *const u32 as *const u8;

    // SAFETY: Reads bytes 0-2 of a live `u32`; `u8` is always aligned.
    unsafe {
        ((*bytes.add(0) as u16 & 0xF8) << 8)
            | ((*bytes.add(1) as u16 & 0xFC) << 3)
            | (*bytes.add(2) as u16 >> 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::shift_mask;
    use rstest::rstest;

    /// Function pointer type for the single colour conversions
    type ConvertFn = fn(u32) -> u16;

    #[rstest]
    #[case(byte_view_named, "byte_view_named")]
    #[case(byte_view_inline, "byte_view_inline")]
    #[case(byte_view_fused, "byte_view_fused")]
    fn reads_channels_in_memory_order(#[case] implementation: ConvertFn, #[case] impl_name: &str) {
        let color32 = u32::from_ne_bytes([0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(implementation(color32), 0xADD9, "{impl_name}");
    }

    #[rstest]
    #[case(byte_view_named, "byte_view_named")]
    #[case(byte_view_inline, "byte_view_inline")]
    #[case(byte_view_fused, "byte_view_fused")]
    fn matches_shift_mask_for_every_byte_in_each_lane(
        #[case] implementation: ConvertFn,
        #[case] impl_name: &str,
    ) {
        for lane in 0..4 {
            for value in 0..=255u32 {
                // Fill the other lanes too, so cross-lane leaks show up.
                let color32 = (value << (lane * 8)) | (0x5A5A_5A5A & !(0xFF << (lane * 8)));
                assert_eq!(
                    implementation(color32),
                    shift_mask(color32),
                    "{impl_name} differs from shift_mask for {color32:#010X}"
                );
            }
        }
    }
}
