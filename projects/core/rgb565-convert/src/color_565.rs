//! # RGB565 Color Format
//!
//! RGB565 packs red, green and blue into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! Green gets the extra bit because the human eye is more sensitive to it.
//!
//! Packing from 8 bits per channel truncates, i.e. drops the low bits of each channel.
//! Unpacking back to 8 bits replicates the top bits into the freed low bits, so
//! `0b11111` becomes `0xFF` rather than `0xF8`.
//!
//! ```rust
//! use rgb565_convert::color_565::Color565;
//!
//! let color = Color565::from_raw(0xF800); // Pure red
//! assert_eq!(color.red5(), 31);
//! assert_eq!(color.red(), 255);
//! assert_eq!(color.green(), 0);
//! assert_eq!(color.blue(), 0);
//! ```

use crate::color_rgba32::Rgba32;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate 8-bit RGB components.
    ///
    /// Each channel is truncated to its field width; no rounding takes place.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        // Masking off the low bits then shifting once is the same as `(x >> n) << m`.
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the 5-bit red field (0-31)
    #[inline]
    pub const fn red5(&self) -> u8 {
        (self.value >> 11) as u8
    }

    /// Returns the 6-bit green field (0-63)
    #[inline]
    pub const fn green6(&self) -> u8 {
        ((self.value >> 5) & 0b111111) as u8
    }

    /// Returns the 5-bit blue field (0-31)
    #[inline]
    pub const fn blue5(&self) -> u8 {
        (self.value & 0b11111) as u8
    }

    /// Extracts the expanded 8-bit red component (0-255)
    ///
    /// The 5-bit field is widened by replicating its top bits:
    /// `result = (value << 3) | (value >> 2)`.
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = self.red5();
        (r << 3) | (r >> 2)
    }

    /// Extracts the expanded 8-bit green component (0-255)
    ///
    /// The 6-bit field is widened by replicating its top bits:
    /// `result = (value << 2) | (value >> 4)`.
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = self.green6();
        (g << 2) | (g >> 4)
    }

    /// Extracts the expanded 8-bit blue component (0-255)
    ///
    /// The 5-bit field is widened by replicating its top bits:
    /// `result = (value << 3) | (value >> 2)`.
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.blue5();
        (b << 3) | (b >> 2)
    }

    /// Converts this [`Color565`] to an [`Rgba32`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb565_convert::color_565::Color565;
    ///
    /// let rgba = Color565::from_rgb(255, 0, 0).to_rgba32();
    /// assert_eq!(rgba.r, 255);
    /// assert_eq!(rgba.g, 0);
    /// assert_eq!(rgba.b, 0);
    /// assert_eq!(rgba.a, 255);
    /// ```
    #[inline]
    pub const fn to_rgba32(&self) -> Rgba32 {
        self.to_rgba32_with_alpha(255)
    }

    /// Converts this [`Color565`] to an [`Rgba32`] with the specified alpha value
    #[inline]
    pub const fn to_rgba32_with_alpha(&self, alpha: u8) -> Rgba32 {
        Rgba32::new(self.red(), self.green(), self.blue(), alpha)
    }
}

impl From<u16> for Color565 {
    #[inline]
    fn from(value: u16) -> Self {
        Self::from_raw(value)
    }
}

impl From<Color565> for u16 {
    #[inline]
    fn from(color: Color565) -> Self {
        color.raw_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0xFF, 0xFF, 0xFF, 0xFFFF)]
    #[case(0x00, 0x00, 0x00, 0x0000)]
    #[case(0x08, 0x04, 0x08, 0x0821)]
    #[case(0xAA, 0xBB, 0xCC, 0xADD9)]
    #[case(0xFF, 0x00, 0x00, 0xF800)]
    #[case(0x00, 0xFF, 0x00, 0x07E0)]
    #[case(0x00, 0x00, 0xFF, 0x001F)]
    fn from_rgb_packs_truncated_channels(
        #[case] r: u8,
        #[case] g: u8,
        #[case] b: u8,
        #[case] expected: u16,
    ) {
        assert_eq!(Color565::from_rgb(r, g, b).raw_value(), expected);
    }

    #[test]
    fn fields_hold_top_bits_of_each_channel() {
        for value in 0..=255u8 {
            let color = Color565::from_rgb(value, value, value);
            assert_eq!(color.red5(), value >> 3, "red for {value:#04X}");
            assert_eq!(color.green6(), value >> 2, "green for {value:#04X}");
            assert_eq!(color.blue5(), value >> 3, "blue for {value:#04X}");
        }
    }

    #[test]
    fn channels_are_truncated_not_rounded() {
        // 0x07 would round up to 1 in 5 bits; truncation keeps it at 0.
        let color = Color565::from_rgb(0x07, 0x03, 0x07);
        assert_eq!(color.raw_value(), 0);
    }

    #[test]
    fn expansion_replicates_top_bits() {
        let white = Color565::from_raw(0xFFFF);
        assert_eq!((white.red(), white.green(), white.blue()), (255, 255, 255));

        let low = Color565::from_raw(0b00001_000001_00001);
        assert_eq!((low.red(), low.green(), low.blue()), (0x08, 0x04, 0x08));
    }

    #[test]
    fn every_565_value_survives_expand_then_pack() {
        for raw in 0..=u16::MAX {
            let color = Color565::from_raw(raw);
            assert_eq!(
                color.to_rgba32().to_color_565(),
                color,
                "{raw:#06X} did not survive expansion to 8 bits per channel"
            );
        }
    }

    #[test]
    fn to_rgba32_with_alpha_keeps_alpha() {
        let rgba = Color565::from_raw(0x07E0).to_rgba32_with_alpha(128);
        assert_eq!(rgba, Rgba32::new(0, 255, 0, 128));
    }
}
