/// Packs RGBA8888 into RGB565 by shifting and masking the integer value.
///
/// Each channel is pulled out of `color32` with `(color32 >> n) & 0xFF`, truncated to its
/// field width, then OR'd into place. Works on the value rather than its storage, so the
/// result is the same on any host byte order.
///
/// # Arguments
///
/// * `color32` - Red in bits 0-7, green in 8-15, blue in 16-23, alpha in 24-31.
#[inline(always)]
pub const fn shift_mask(color32: u32) -> u16 {
    // Unpack
    let r8 = color32 & 0xFF;
    let g8 = (color32 >> 8) & 0xFF;
    let b8 = (color32 >> 16) & 0xFF;

    // Reduce
    let r5 = r8 >> 3;
    let g6 = g8 >> 2;
    let b5 = b8 >> 3;

    // Repack
    ((r5 << 11) | (g6 << 5) | b5) as u16
}
