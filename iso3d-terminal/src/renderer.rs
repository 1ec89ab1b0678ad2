/// Half-block painter that shows an 8-bit framebuffer in the terminal
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use iso3d_core::{Color, MemoryDisplay};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

/// Shown for fully transparent pixels
const BACKDROP: TermColor = TermColor::Rgb { r: 16, g: 16, b: 24 };

/// Paints two framebuffer rows per terminal row
pub struct HalfBlockRenderer {
    /// Terminal cell of the top-left pixel pair
    origin: (u16, u16),
}

impl HalfBlockRenderer {
    pub fn new(origin_col: u16, origin_row: u16) -> Self {
        Self {
            origin: (origin_col, origin_row),
        }
    }

    /// Terminal rows needed to show `height` pixel rows
    pub fn rows_for(height: usize) -> usize {
        height.div_ceil(2)
    }

    pub fn draw<W: Write>(&self, display: &MemoryDisplay, writer: &mut W) -> std::io::Result<()> {
        let layout = display.layout();
        let mut current: Option<(TermColor, TermColor)> = None;

        for row in 0..Self::rows_for(layout.height) {
            writer.queue(cursor::MoveTo(self.origin.0, self.origin.1 + row as u16))?;
            for x in 0..layout.width {
                let top = display.pixel(x, row * 2).map_or(BACKDROP, to_term_color);
                let bottom = display.pixel(x, row * 2 + 1).map_or(BACKDROP, to_term_color);

                if current != Some((top, bottom)) {
                    writer.queue(SetForegroundColor(top))?;
                    writer.queue(SetBackgroundColor(bottom))?;
                    current = Some((top, bottom));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Map a packed pixel to a terminal color
pub fn to_term_color(color: Color) -> TermColor {
    if !color.is_opaque() {
        return BACKDROP;
    }
    let (r, g, b) = color.to_rgb888();
    TermColor::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iso3d_core::BitmapLayout;

    #[test]
    fn test_rows_for_odd_height() {
        assert_eq!(HalfBlockRenderer::rows_for(168), 84);
        assert_eq!(HalfBlockRenderer::rows_for(5), 3);
    }

    #[test]
    fn test_to_term_color() {
        assert_eq!(
            to_term_color(Color::RED),
            TermColor::Rgb { r: 255, g: 0, b: 0 }
        );
        assert_eq!(to_term_color(Color::CLEAR), BACKDROP);
    }

    #[test]
    fn test_draw_emits_one_cell_per_pixel_pair() {
        let display = MemoryDisplay::new(BitmapLayout::packed(6, 4));
        let renderer = HalfBlockRenderer::new(0, 1);
        let mut out = Vec::new();
        renderer.draw(&display, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(HALF_BLOCK).count(), 12);
    }
}
