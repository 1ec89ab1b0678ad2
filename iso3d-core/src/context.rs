//! Render pass lifecycle.
//!
//! A [`GraphicsContext`] owns the display memory. A [`Renderer`] borrows the
//! context, captures the framebuffer in [`Renderer::begin_render`], draws into
//! it, and hands it back in [`Renderer::finish_render`]. Draw calls made
//! outside a pass do nothing.

use crate::error::{RenderError, Result};
use crate::framebuffer::{BitmapLayout, ClipStats, DisplayConfig, PixelWrite, RenderTarget};
use crate::geometry::{Color, ScreenPoint, Size, Vec3};
use crate::projection::{Projector, ProjectorConfig};
use crate::shapes::{self, FillMode};

/// Host-side owner of the display framebuffer.
pub trait GraphicsContext {
    /// Grant exclusive access to the framebuffer and report its layout.
    fn acquire_framebuffer(&mut self) -> Result<BitmapLayout>;

    /// Framebuffer memory. Only called between acquire and release.
    fn framebuffer_mut(&mut self) -> &mut [u8];

    /// Return the framebuffer to the host.
    fn release_framebuffer(&mut self);
}

/// Framebuffer kept in memory, standing in for display hardware.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    pixels: Vec<u8>,
    layout: BitmapLayout,
    captured: bool,
    capture_count: usize,
    refuse_capture: bool,
}

impl MemoryDisplay {
    pub fn new(layout: BitmapLayout) -> Self {
        Self {
            pixels: vec![0; layout.byte_len()],
            layout,
            captured: false,
            capture_count: 0,
            refuse_capture: false,
        }
    }

    /// Unpadded buffer matching the reference display.
    pub fn pebble() -> Self {
        let display = DisplayConfig::PEBBLE;
        Self::new(BitmapLayout::packed(
            display.width as usize,
            display.height as usize,
        ))
    }

    pub fn layout(&self) -> BitmapLayout {
        self.layout
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.layout.width || y >= self.layout.height {
            return None;
        }
        self.pixels.get(y * self.layout.stride + x).copied().map(Color)
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.argb());
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Number of successful captures so far.
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// Make subsequent captures fail, as a busy display would.
    pub fn set_refuse_capture(&mut self, refuse: bool) {
        self.refuse_capture = refuse;
    }
}

impl GraphicsContext for MemoryDisplay {
    fn acquire_framebuffer(&mut self) -> Result<BitmapLayout> {
        if self.refuse_capture {
            return Err(RenderError::CaptureFailed("display is busy".to_string()));
        }
        if self.captured {
            return Err(RenderError::CaptureFailed(
                "framebuffer already captured".to_string(),
            ));
        }
        self.captured = true;
        self.capture_count += 1;
        Ok(self.layout)
    }

    fn framebuffer_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn release_framebuffer(&mut self) {
        self.captured = false;
    }
}

/// Draws isometric primitives into a [`GraphicsContext`].
///
/// Holds its own [`Projector`], so projector changes are local to this
/// renderer. Dropping a renderer with an active pass releases the
/// framebuffer.
pub struct Renderer<'c, C: GraphicsContext> {
    ctx: &'c mut C,
    projector: Projector,
    display: DisplayConfig,
    layout: Option<BitmapLayout>,
    stats: ClipStats,
}

impl<'c, C: GraphicsContext> Renderer<'c, C> {
    pub fn new(ctx: &'c mut C, projector: ProjectorConfig, display: DisplayConfig) -> Self {
        Self {
            ctx,
            projector: Projector::new(projector),
            display,
            layout: None,
            stats: ClipStats::default(),
        }
    }

    /// Capture the framebuffer. Draw calls take effect until `finish_render`.
    pub fn begin_render(&mut self) -> Result<BitmapLayout> {
        if self.layout.is_some() {
            return Err(RenderError::PassActive);
        }

        let layout = self.ctx.acquire_framebuffer()?;
        let len = self.ctx.framebuffer_mut().len();
        if let Err(err) = layout.validate(len) {
            log::warn!("rejecting captured framebuffer: {}", err);
            self.ctx.release_framebuffer();
            return Err(err);
        }

        log::debug!(
            "render pass started ({}x{}, stride {})",
            layout.width,
            layout.height,
            layout.stride
        );
        self.layout = Some(layout);
        Ok(layout)
    }

    /// Release the framebuffer. Does nothing when no pass is active.
    pub fn finish_render(&mut self) {
        match self.layout.take() {
            Some(_) => {
                self.ctx.release_framebuffer();
                log::debug!(
                    "render pass finished: {} of {} pixel writes landed, {} clipped",
                    self.stats.written,
                    self.stats.total(),
                    self.stats.clipped
                );
            }
            None => log::debug!("finish_render called without an active pass"),
        }
    }

    pub fn is_active(&self) -> bool {
        self.layout.is_some()
    }

    pub fn layout(&self) -> Option<BitmapLayout> {
        self.layout
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    pub fn stats(&self) -> ClipStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = ClipStats::default();
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn project(&self, v: Vec3) -> ScreenPoint {
        self.projector.project(v)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.projector.set_enabled(enabled);
    }

    pub fn set_offset(&mut self, offset: ScreenPoint) {
        self.projector.set_offset(offset);
    }

    pub fn set_pixel(&mut self, point: ScreenPoint, color: Color) -> PixelWrite {
        self.with_target(|target, _| target.set_pixel(point, color))
            .unwrap_or_else(|dropped| dropped)
    }

    pub fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, color: Color) {
        self.draw(|target, _| target.draw_line(start, end, color));
    }

    pub fn draw_line_3d(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.draw(|target, projector| {
            shapes::draw_line_3d(target, projector, start, end, color)
        });
    }

    pub fn draw_pixel(&mut self, point: Vec3, color: Color) -> PixelWrite {
        self.with_target(|target, projector| shapes::draw_pixel(target, projector, point, color))
            .unwrap_or_else(|dropped| dropped)
    }

    pub fn draw_rect(&mut self, origin: Vec3, size: Size, color: Color) {
        self.draw(|target, projector| shapes::draw_rect(target, projector, origin, size, color));
    }

    pub fn fill_rect(&mut self, origin: Vec3, size: Size, color: Color) {
        self.draw(|target, projector| shapes::fill_rect(target, projector, origin, size, color));
    }

    pub fn fill_box(
        &mut self,
        origin: Vec3,
        size: Size,
        z_height: i32,
        mode: FillMode,
        color: Color,
    ) {
        self.draw(|target, projector| {
            shapes::fill_box(target, projector, origin, size, z_height, mode, color)
        });
    }

    pub fn draw_box(&mut self, origin: Vec3, size: Size, z_height: i32, color: Color) {
        self.draw(|target, projector| {
            shapes::draw_box(target, projector, origin, size, z_height, color)
        });
    }

    fn draw(&mut self, f: impl FnOnce(&mut RenderTarget<'_>, &Projector)) {
        let _ = self.with_target(f);
    }

    /// Run `f` against the captured framebuffer.
    ///
    /// A dropped draw is recorded once and its outcome returned as the
    /// error: `NoTarget` outside a pass, `Clipped` when the host hands back
    /// a buffer that no longer fits the captured layout.
    fn with_target<R>(
        &mut self,
        f: impl FnOnce(&mut RenderTarget<'_>, &Projector) -> R,
    ) -> std::result::Result<R, PixelWrite> {
        let Some(layout) = self.layout else {
            log::trace!("draw call outside a render pass ignored");
            self.stats.record(PixelWrite::NoTarget);
            return Err(PixelWrite::NoTarget);
        };

        let pixels = self.ctx.framebuffer_mut();
        let mut target = match RenderTarget::new(pixels, layout, self.display) {
            Ok(target) => target,
            Err(err) => {
                log::warn!("framebuffer changed size during the pass: {}", err);
                self.stats.record(PixelWrite::Clipped);
                return Err(PixelWrite::Clipped);
            }
        };
        let result = f(&mut target, &self.projector);
        self.stats.merge(target.stats());
        Ok(result)
    }
}

impl<C: GraphicsContext> Drop for Renderer<'_, C> {
    fn drop(&mut self) {
        if self.layout.is_some() {
            self.finish_render();
        }
    }
}

/// Run one render pass: capture, draw with `f`, release.
///
/// The framebuffer is released even if `f` panics.
pub fn render_pass<'c, C, R>(
    ctx: &'c mut C,
    projector: ProjectorConfig,
    display: DisplayConfig,
    f: impl FnOnce(&mut Renderer<'c, C>) -> R,
) -> Result<R>
where
    C: GraphicsContext,
{
    let mut renderer = Renderer::new(ctx, projector, display);
    renderer.begin_render()?;
    let result = f(&mut renderer);
    renderer.finish_render();
    Ok(result)
}
