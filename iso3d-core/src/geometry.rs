/// Geometry primitives for isometric rendering
use nalgebra::{Point2, Vector3};

/// A point or origin in world space
pub type Vec3 = Vector3<i32>;

/// A projected point in screen space
pub type ScreenPoint = Point2<i32>;

/// Footprint of a rectangle in the world x/y plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// An 8-bit pixel value written verbatim into the framebuffer.
///
/// The reference display packs colors as ARGB2222 (two bits per channel,
/// alpha in the high bits). The rasterizer never looks inside the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u8);

impl Color {
    pub const CLEAR: Color = Color(0b0000_0000);
    pub const BLACK: Color = Color(0b1100_0000);
    pub const WHITE: Color = Color(0b1111_1111);
    pub const RED: Color = Color(0b1111_0000);
    pub const GREEN: Color = Color(0b1100_1100);
    pub const BLUE: Color = Color(0b1100_0011);
    pub const YELLOW: Color = Color(0b1111_1100);
    pub const CYAN: Color = Color(0b1100_1111);
    pub const LIGHT_GRAY: Color = Color(0b1110_1010);
    pub const DARK_GRAY: Color = Color(0b1101_0101);

    /// Build an opaque color from 2-bit channels (values above 3 are masked)
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0b1100_0000 | (r & 0b11) << 4 | (g & 0b11) << 2 | (b & 0b11))
    }

    pub const fn argb(self) -> u8 {
        self.0
    }

    /// Expand the packed channels to 8-bit RGB (each 2-bit step is 85)
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let r = (self.0 >> 4) & 0b11;
        let g = (self.0 >> 2) & 0b11;
        let b = self.0 & 0b11;
        (r * 85, g * 85, b * 85)
    }

    pub const fn is_opaque(self) -> bool {
        self.0 >> 6 == 0b11
    }
}

/// The four corners of a world-space rectangle at a fixed z.
///
/// Named as seen in the isometric view: `back` is the origin corner,
/// `front` is the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectCorners {
    pub back: Vec3,
    pub right: Vec3,
    pub left: Vec3,
    pub front: Vec3,
}

impl RectCorners {
    pub fn new(origin: Vec3, size: Size) -> Self {
        Self::at_z(origin, size, origin.z)
    }

    /// Corner coordinates wrap at the `i32` limits.
    pub fn at_z(origin: Vec3, size: Size, z: i32) -> Self {
        let (x, y) = (origin.x, origin.y);
        let (x2, y2) = (x.wrapping_add(size.w), y.wrapping_add(size.h));
        Self {
            back: Vec3::new(x, y, z),
            right: Vec3::new(x2, y, z),
            left: Vec3::new(x, y2, z),
            front: Vec3::new(x2, y2, z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb() {
        assert_eq!(Color::from_rgb(3, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb(3, 3, 3), Color::WHITE);
        assert_eq!(Color::from_rgb(7, 0, 0), Color::RED);
        assert!(Color::BLUE.is_opaque());
        assert!(!Color::CLEAR.is_opaque());
    }

    #[test]
    fn test_color_to_rgb888() {
        assert_eq!(Color::WHITE.to_rgb888(), (255, 255, 255));
        assert_eq!(Color::BLACK.to_rgb888(), (0, 0, 0));
        assert_eq!(Color::LIGHT_GRAY.to_rgb888(), (170, 170, 170));
    }

    #[test]
    fn test_rect_corners() {
        let corners = RectCorners::new(Vec3::new(1, 2, 3), Size::new(4, 5));
        assert_eq!(corners.back, Vec3::new(1, 2, 3));
        assert_eq!(corners.right, Vec3::new(5, 2, 3));
        assert_eq!(corners.left, Vec3::new(1, 7, 3));
        assert_eq!(corners.front, Vec3::new(5, 7, 3));

        let raised = RectCorners::at_z(Vec3::new(1, 2, 3), Size::new(4, 5), 9);
        assert_eq!(raised.front.z, 9);
    }

    #[test]
    fn test_rect_corners_wrap() {
        let corners = RectCorners::new(Vec3::new(i32::MAX, 0, 0), Size::new(1, 2));
        assert_eq!(corners.right.x, i32::MIN);
        assert_eq!(corners.left, Vec3::new(i32::MAX, 2, 0));
    }
}
