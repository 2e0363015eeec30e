use crate::color_565::Color565;

/// Represents a single RGBA8888 pixel, stored in memory as `R, G, B, A`.
///
/// When the 4 bytes are loaded as a little endian [`u32`], red ends up in the least
/// significant byte. [`Rgba32::from_packed`] and [`Rgba32::to_packed`] use that layout
/// regardless of the host's byte order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba32 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Rgba32 {
    /// Constructs a new [`Rgba32`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb565_convert::color_rgba32::Rgba32;
    ///
    /// let pixel = Rgba32::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// assert_eq!(pixel.to_packed(), 0xFF00_00FF);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a colour from a `u32` holding `R` in bits 0-7, `G` in 8-15, `B` in 16-23
    /// and `A` in 24-31.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }

    /// Packs this colour into a `u32`. Inverse of [`Rgba32::from_packed`].
    #[inline]
    pub const fn to_packed(&self) -> u32 {
        u32::from_le_bytes(self.to_bytes())
    }

    /// Creates a colour from its 4 bytes in memory order.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the 4 bytes of this colour in memory order.
    #[inline]
    pub const fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to [`Color565`], truncating each channel and dropping alpha.
    #[inline]
    pub const fn to_color_565(&self) -> Color565 {
        Color565::from_rgb(self.r, self.g, self.b)
    }
}

impl From<u32> for Rgba32 {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Rgba32> for u32 {
    #[inline]
    fn from(color: Rgba32) -> Self {
        color.to_packed()
    }
}

impl From<Rgba32> for Color565 {
    #[inline]
    fn from(color: Rgba32) -> Self {
        color.to_color_565()
    }
}
