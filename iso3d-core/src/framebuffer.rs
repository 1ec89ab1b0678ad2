//! Borrowed framebuffer view with bounds-checked pixel writes.
//!
//! Pixels are one byte each. The view never owns the memory: it wraps a
//! slice handed out by a [`GraphicsContext`](crate::context::GraphicsContext)
//! for the duration of a single draw call inside a render pass.

use crate::error::{RenderError, Result};
use crate::geometry::{Color, ScreenPoint};

/// Dimensions of a captured framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapLayout {
    pub width: usize,
    pub height: usize,
    /// Bytes per row, at least `width`.
    pub stride: usize,
}

impl BitmapLayout {
    /// Unpadded layout where the stride equals the width.
    pub const fn packed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width,
        }
    }

    /// Number of bytes the layout addresses.
    pub const fn byte_len(&self) -> usize {
        self.stride * self.height
    }

    /// Check that a buffer of `len` bytes can back this layout.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.stride < self.width {
            return Err(RenderError::InvalidLayout {
                width: self.width,
                height: self.height,
                stride: self.stride,
            });
        }
        let needed = self.byte_len();
        if len < needed {
            return Err(RenderError::BufferTooSmall {
                needed,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Visible display area used for clipping.
///
/// This is independent of the buffer layout: a buffer may be wider than
/// what the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: i32,
    pub height: i32,
}

impl DisplayConfig {
    /// 144x168, the reference watch display.
    pub const PEBBLE: DisplayConfig = DisplayConfig {
        width: 144,
        height: 168,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::PEBBLE
    }
}

/// What happened to a single pixel write.
///
/// Callers normally ignore this; it exists so tests and diagnostics can
/// tell clipping apart from drawing outside a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PixelWrite {
    Written,
    Clipped,
    NoTarget,
}

/// Running counts of pixel write outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipStats {
    pub written: u64,
    pub clipped: u64,
    pub no_target: u64,
}

impl ClipStats {
    pub fn record(&mut self, outcome: PixelWrite) {
        match outcome {
            PixelWrite::Written => self.written += 1,
            PixelWrite::Clipped => self.clipped += 1,
            PixelWrite::NoTarget => self.no_target += 1,
        }
    }

    pub fn merge(&mut self, other: ClipStats) {
        self.written += other.written;
        self.clipped += other.clipped;
        self.no_target += other.no_target;
    }

    pub fn total(&self) -> u64 {
        self.written + self.clipped + self.no_target
    }
}

/// Mutable view over framebuffer memory.
pub struct RenderTarget<'a> {
    pixels: &'a mut [u8],
    layout: BitmapLayout,
    display: DisplayConfig,
    stats: ClipStats,
}

impl<'a> RenderTarget<'a> {
    /// Wrap a buffer, failing if it is too short for `layout`.
    pub fn new(
        pixels: &'a mut [u8],
        layout: BitmapLayout,
        display: DisplayConfig,
    ) -> Result<Self> {
        layout.validate(pixels.len())?;
        Ok(Self {
            pixels,
            layout,
            display,
            stats: ClipStats::default(),
        })
    }

    pub fn layout(&self) -> BitmapLayout {
        self.layout
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    /// Outcomes recorded since this view was created.
    pub fn stats(&self) -> ClipStats {
        self.stats
    }

    pub fn pixels(&self) -> &[u8] {
        &*self.pixels
    }

    /// Write `color` at `point` if it lies on the visible display.
    ///
    /// This is the only place pixels are written. Anything outside the
    /// display bounds, or past the end of the buffer when the display is
    /// configured larger than the layout, is dropped.
    #[inline]
    pub fn set_pixel(&mut self, point: ScreenPoint, color: Color) -> PixelWrite {
        let outcome = self.write(point, color);
        self.stats.record(outcome);
        outcome
    }

    fn write(&mut self, point: ScreenPoint, color: Color) -> PixelWrite {
        if !self.display.contains(point) {
            return PixelWrite::Clipped;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.layout.width || y >= self.layout.height {
            return PixelWrite::Clipped;
        }
        match self.pixels.get_mut(y * self.layout.stride + x) {
            Some(pixel) => {
                *pixel = color.argb();
                PixelWrite::Written
            }
            None => PixelWrite::Clipped,
        }
    }
}
