//! Pixel color type and the default palette.
//!
//! The rasterizer treats colors as opaque tokens; only the [`Canvas`] looks
//! inside a [`Color`] when it is encoded to an image.
//!
//! [`Canvas`]: crate::render::Canvas

/// A 4-byte pixel value stored in BGRA order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Build a color from BGRA bytes, the storage order.
    pub const fn bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self([b, g, r, a])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([b, g, r, a])
    }

    /// The channels reordered to RGBA for encoders.
    pub const fn to_rgba(self) -> [u8; 4] {
        let [b, g, r, a] = self.0;
        [r, g, b, a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(bgra: [u8; 4]) -> Self {
        Self(bgra)
    }
}

pub const BLACK: Color = Color::bgra(0, 0, 0, 255);
pub const WHITE: Color = Color::bgra(255, 255, 255, 255);
pub const GREEN: Color = Color::bgra(0, 255, 0, 255);
pub const RED: Color = Color::bgra(0, 0, 255, 255);
pub const BLUE: Color = Color::bgra(255, 128, 64, 255);
pub const YELLOW: Color = Color::bgra(0, 200, 255, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_constructor_stores_bgra() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.0, [3, 2, 1, 4]);
        assert_eq!(c.to_rgba(), [1, 2, 3, 4]);
    }

    #[test]
    fn palette_channel_order() {
        assert_eq!(RED.to_rgba(), [255, 0, 0, 255]);
        assert_eq!(BLUE.to_rgba(), [64, 128, 255, 255]);
        assert_eq!(YELLOW.to_rgba(), [255, 200, 0, 255]);
    }
}
