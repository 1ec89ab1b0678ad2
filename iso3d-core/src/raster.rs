/// Line rasterization into a render target
use crate::framebuffer::RenderTarget;
use crate::geometry::{Color, ScreenPoint};

impl RenderTarget<'_> {
    /// Draw a line from `start` to `end` using Bresenham's algorithm.
    ///
    /// Both endpoints are written. The x and y steps are tested
    /// independently, so a single iteration can move diagonally.
    /// Deltas are kept in `i64` so endpoints anywhere in the `i32` range
    /// cannot overflow; the walk itself never leaves the segment.
    pub fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, color: Color) {
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let sx = if start.x < end.x { 1 } else { -1 };
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        let sy = if start.y < end.y { 1 } else { -1 };
        let mut err = (if dx > dy { dx } else { -dy }) / 2;

        let mut current = start;
        loop {
            let _ = self.set_pixel(current, color);
            if current == end {
                break;
            }

            let e2 = err;
            if e2 > -dx {
                err -= dy;
                current.x += sx;
            }
            if e2 < dy {
                err += dx;
                current.y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::framebuffer::{BitmapLayout, DisplayConfig, RenderTarget};
    use crate::geometry::{Color, ScreenPoint};

    const W: usize = 144;
    const H: usize = 168;

    fn lit(buf: &[u8]) -> Vec<(usize, usize)> {
        buf.iter()
            .enumerate()
            .filter(|&(_, &p)| p != 0)
            .map(|(i, _)| (i % W, i / W))
            .collect()
    }

    fn draw(start: (i32, i32), end: (i32, i32)) -> Vec<(usize, usize)> {
        let mut buf = vec![0u8; W * H];
        let mut target =
            RenderTarget::new(&mut buf, BitmapLayout::packed(W, H), DisplayConfig::PEBBLE).unwrap();
        target.draw_line(
            ScreenPoint::new(start.0, start.1),
            ScreenPoint::new(end.0, end.1),
            Color::WHITE,
        );
        lit(&buf)
    }

    #[test]
    fn test_draw_line_horizontal() {
        let pixels = draw((0, 0), (5, 0));
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|&(x, y)| y == 0 && x <= 5));
    }

    #[test]
    fn test_draw_line_vertical() {
        let pixels = draw((0, 0), (0, 5));
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|&(x, y)| x == 0 && y <= 5));
    }

    #[test]
    fn test_draw_line_single_point() {
        assert_eq!(draw((7, 9), (7, 9)), vec![(7, 9)]);
    }

    #[test]
    fn test_draw_line_diagonal_is_8_connected() {
        let pixels = draw((10, 10), (20, 20));
        assert_eq!(pixels.len(), 11);
        assert!(pixels.iter().all(|&(x, y)| x == y));
    }

    #[test]
    fn test_draw_line_reversed_direction() {
        let mut forward = draw((2, 3), (2, 9));
        let mut backward = draw((2, 9), (2, 3));
        forward.sort();
        backward.sort();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_draw_line_shallow_slope_matches_reference() {
        // err starts at 4/2 = 2 for a (4, 2) delta
        let pixels = draw((0, 0), (4, 2));
        assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_draw_line_steep_slope_matches_reference() {
        // dy > dx, so err starts at -4/2 = -2
        let pixels = draw((0, 0), (2, 4));
        assert_eq!(pixels, vec![(0, 0), (0, 1), (1, 2), (1, 3), (2, 4)]);
    }

    #[test]
    fn test_draw_line_negative_steps_match_reference() {
        // sx = -1, sy = -1
        let pixels = draw((4, 2), (0, 0));
        assert_eq!(pixels, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);

        // sx = +1, sy = -1, steep
        let pixels = draw((0, 4), (2, 0));
        assert_eq!(pixels, vec![(2, 0), (1, 1), (1, 2), (0, 3), (0, 4)]);

        // sx = -1, sy = -1, steep
        let pixels = draw((10, 10), (6, 3));
        assert_eq!(
            pixels,
            vec![(6, 3), (7, 4), (7, 5), (8, 6), (8, 7), (9, 8), (9, 9), (10, 10)]
        );
    }

    #[test]
    fn test_draw_line_depends_on_direction() {
        // The rounding of the error term favors the starting end
        assert_ne!(draw((0, 0), (4, 2)), draw((4, 2), (0, 0)));
        assert_eq!(draw((2, 0), (0, 4)), vec![(2, 0), (2, 1), (1, 2), (1, 3), (0, 4)]);
        assert_ne!(draw((2, 0), (0, 4)), draw((0, 4), (2, 0)));
    }

    #[test]
    fn test_draw_line_extreme_endpoints_do_not_overflow() {
        let mut buf = vec![0u8; W * H];
        let mut target =
            RenderTarget::new(&mut buf, BitmapLayout::packed(W, H), DisplayConfig::PEBBLE).unwrap();
        target.draw_line(
            ScreenPoint::new(i32::MAX - 2, i32::MAX),
            ScreenPoint::new(i32::MAX, i32::MAX - 3),
            Color::WHITE,
        );
        target.draw_line(
            ScreenPoint::new(i32::MIN, i32::MIN + 5),
            ScreenPoint::new(i32::MIN + 2, i32::MIN),
            Color::WHITE,
        );
        assert_eq!(target.stats().written, 0);
        assert_eq!(target.stats().clipped, 4 + 6);
    }

    #[test]
    fn test_draw_line_clips_offscreen_part() {
        let mut buf = vec![0u8; W * H];
        let mut target =
            RenderTarget::new(&mut buf, BitmapLayout::packed(W, H), DisplayConfig::PEBBLE).unwrap();
        target.draw_line(ScreenPoint::new(-5, 0), ScreenPoint::new(5, 0), Color::WHITE);
        let stats = target.stats();
        assert_eq!(stats.written, 6);
        assert_eq!(stats.clipped, 5);
        assert_eq!(lit(&buf).len(), 6);
    }
}
