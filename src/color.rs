//! Stroke and background colors.
//!
//! The engine never blends colors itself; it only hands an `Rgba8` to the
//! drawing surface with every stroke.

use serde::{Deserialize, Serialize};

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Pale silver-blue used for web strands.
    pub const SILK: Rgba8 = Rgba8::new(170, 188, 190, 255);
    /// Near-black night background.
    pub const NIGHT: Rgba8 = Rgba8::new(17, 17, 23, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to `[r, g, b, a]` byte order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_new_opaque() {
        let c = Rgba8::new_opaque(1, 2, 3);
        assert_eq!(c.to_array(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_palette_bytes() {
        assert_eq!(Rgba8::SILK.to_array(), [170, 188, 190, 255]);
        assert_eq!(Rgba8::from_array([17, 17, 23, 255]), Rgba8::NIGHT);
    }

    #[test]
    fn test_serde_as_struct() {
        let json = serde_json::to_string(&Rgba8::NIGHT).unwrap();
        assert_eq!(json, r#"{"r":17,"g":17,"b":23,"a":255}"#);
        let back: Rgba8 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba8::NIGHT);
    }
}
