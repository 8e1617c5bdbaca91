//! Channel sample types and source colors.
//!
//! A pixel source reports each coordinate as a [`Color`]: four channels
//! (R, G, B, A) at either 8 or 16 bits, with straight (non-premultiplied)
//! alpha as stored in the file. Conversions between the two depths follow
//! the usual integer rules:
//!
//! - 16 → 8 keeps the high byte (`v >> 8`)
//! - 8 → 16 replicates the byte (`v * 257`), so 255 maps to 65535
//!
//! Conversions read colors through [`Color::premultiplied16`], which scales
//! R, G and B by alpha at 16 bits (`c * a / 0xFFFF`, truncating).
//!
//! ```
//! use imgconv_core::{Color, Sample};
//!
//! assert_eq!(0xABCDu16.to_u8(), 0xAB);
//! assert_eq!(255u8.to_u16(), 65535);
//!
//! let c = Color::rgba16(0x1234, 0xFF00, 0x00FF, 0xFFFF);
//! assert_eq!(c.to_rgba8(), [0x12, 0xFF, 0x00, 0xFF]);
//! ```

/// Integer channel sample stored in a raster.
///
/// Implemented for `u8` and `u16`.
pub trait Sample: Copy + Default + Send + Sync + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Number of bits per channel.
    const BITS: u32;

    /// Maximum representable value (fully on / fully opaque).
    const MAX: Self;

    /// Downscale to 8 bits by keeping the high byte.
    fn to_u8(self) -> u8;

    /// Upscale to 16 bits by bit replication.
    fn to_u16(self) -> u16;

    /// Convert from a 16-bit sample to this depth.
    fn from_u16(v: u16) -> Self;

    /// Builds the source color for one RGBA pixel of this depth.
    fn color(rgba: [Self; 4]) -> Color;

    /// Zero value.
    #[inline]
    fn zero() -> Self {
        Self::default()
    }
}

impl Sample for u8 {
    const BITS: u32 = 8;
    const MAX: Self = u8::MAX;

    #[inline]
    fn to_u8(self) -> u8 {
        self
    }

    #[inline]
    fn to_u16(self) -> u16 {
        self as u16 * 257
    }

    #[inline]
    fn from_u16(v: u16) -> Self {
        (v >> 8) as u8
    }

    #[inline]
    fn color(rgba: [Self; 4]) -> Color {
        Color::Rgba8(rgba)
    }
}

impl Sample for u16 {
    const BITS: u32 = 16;
    const MAX: Self = u16::MAX;

    #[inline]
    fn to_u8(self) -> u8 {
        (self >> 8) as u8
    }

    #[inline]
    fn to_u16(self) -> u16 {
        self
    }

    #[inline]
    fn from_u16(v: u16) -> Self {
        v
    }

    #[inline]
    fn color(rgba: [Self; 4]) -> Color {
        Color::Rgba16(rgba)
    }
}

/// Color of a single source coordinate.
///
/// Channels are ordered `[R, G, B, A]`. Alpha is straight, not
/// premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 8 bits per channel.
    Rgba8([u8; 4]),
    /// 16 bits per channel.
    Rgba16([u16; 4]),
}

impl Color {
    /// Opaque 8-bit RGB color.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba8([r, g, b, u8::MAX])
    }

    /// 8-bit RGBA color.
    #[inline]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba8([r, g, b, a])
    }

    /// 16-bit RGBA color.
    #[inline]
    pub const fn rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self::Rgba16([r, g, b, a])
    }

    /// Opaque 8-bit gray.
    #[inline]
    pub const fn gray8(v: u8) -> Self {
        Self::Rgba8([v, v, v, u8::MAX])
    }

    /// Bit depth of each channel as reported by the source.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Rgba8(_) => u8::BITS,
            Self::Rgba16(_) => u16::BITS,
        }
    }

    /// Channels at 8-bit depth; 16-bit channels keep their high byte.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        match self {
            Self::Rgba8(c) => c,
            Self::Rgba16(c) => c.map(Sample::to_u8),
        }
    }

    /// Channels at 16-bit depth; 8-bit channels are bit-replicated.
    #[inline]
    pub fn to_rgba16(self) -> [u16; 4] {
        match self {
            Self::Rgba8(c) => c.map(Sample::to_u16),
            Self::Rgba16(c) => c,
        }
    }

    /// Channels at 16-bit depth with R, G and B premultiplied by alpha.
    ///
    /// Each color channel becomes `c * a / 0xFFFF` (integer division);
    /// alpha itself is returned unchanged.
    ///
    /// ```
    /// use imgconv_core::Color;
    ///
    /// let c = Color::rgba8(200, 200, 200, 100);
    /// assert_eq!(c.premultiplied16(), [20156, 20156, 20156, 25700]);
    ///
    /// let opaque = Color::rgb8(10, 20, 30);
    /// assert_eq!(opaque.premultiplied16(), opaque.to_rgba16());
    /// ```
    #[inline]
    pub fn premultiplied16(self) -> [u16; 4] {
        let [r, g, b, a] = self.to_rgba16();
        let scale = |c: u16| (c as u32 * a as u32 / 0xFFFF) as u16;
        [scale(r), scale(g), scale(b), a]
    }

    /// Alpha at 8-bit depth.
    #[inline]
    pub fn alpha8(self) -> u8 {
        self.to_rgba8()[3]
    }

    /// Alpha at 16-bit depth.
    #[inline]
    pub fn alpha16(self) -> u16 {
        self.to_rgba16()[3]
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::Rgba8(rgba)
    }
}

impl From<[u16; 4]> for Color {
    fn from(rgba: [u16; 4]) -> Self {
        Self::Rgba16(rgba)
    }
}
