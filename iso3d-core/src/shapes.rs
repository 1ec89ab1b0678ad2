//! Isometric shape composition.
//!
//! Every shape is a fixed sequence of projected line draws. Filled shapes
//! are approximated with adjacent parallel lines, there is no polygon fill.

use crate::framebuffer::{PixelWrite, RenderTarget};
use crate::geometry::{Color, RectCorners, Size, Vec3};
use crate::projection::Projector;

/// Per-layer strategy for [`fill_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Outline every layer with all four edges.
    #[default]
    Full,
    /// Draw only the right and bottom edges of each layer. The back edges
    /// are left out on the assumption that they are hidden by the box.
    FastSidesOnly,
}

impl FillMode {
    pub fn toggled(self) -> Self {
        match self {
            FillMode::Full => FillMode::FastSidesOnly,
            FillMode::FastSidesOnly => FillMode::Full,
        }
    }
}

/// Project both ends and rasterize the segment between them.
pub fn draw_line_3d(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    start: Vec3,
    end: Vec3,
    color: Color,
) {
    target.draw_line(projector.project(start), projector.project(end), color);
}

/// Project a single world point and write it.
pub fn draw_pixel(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    point: Vec3,
    color: Color,
) -> PixelWrite {
    target.set_pixel(projector.project(point), color)
}

/// Outline a rectangle in the x/y plane at `origin.z`.
pub fn draw_rect(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    origin: Vec3,
    size: Size,
    color: Color,
) {
    let c = RectCorners::new(origin, size);
    // Top
    draw_line_3d(target, projector, c.back, c.right, color);
    // Right
    draw_line_3d(target, projector, c.right, c.front, color);
    // Bottom
    draw_line_3d(target, projector, c.left, c.front, color);
    // Left
    draw_line_3d(target, projector, c.back, c.left, color);
}

/// Fill a rectangle with one x-direction line per row.
///
/// The rows are drawn at `origin.z` and again at `origin.z - 1`; a single
/// layer leaves one-pixel gaps between rows after projection.
pub fn fill_rect(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    origin: Vec3,
    size: Size,
    color: Color,
) {
    let far_x = origin.x.wrapping_add(size.w);
    for z in [origin.z, origin.z.wrapping_sub(1)] {
        for row in 0..size.h {
            let y = origin.y.wrapping_add(row);
            draw_line_3d(
                target,
                projector,
                Vec3::new(origin.x, y, z),
                Vec3::new(far_x, y, z),
                color,
            );
        }
    }
}

/// Right and bottom edges of the rectangle at height `z`.
fn draw_front_edges(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    origin: Vec3,
    size: Size,
    z: i32,
    color: Color,
) {
    let c = RectCorners::at_z(origin, size, z);
    draw_line_3d(target, projector, c.right, c.front, color);
    draw_line_3d(target, projector, c.left, c.front, color);
}

/// Fill a box by stacking `z_height` layers and capping it with a filled top.
///
/// Layers are counted from `origin.z`, so a box that reaches past
/// `i32::MAX` wraps instead of being cut short.
pub fn fill_box(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    origin: Vec3,
    size: Size,
    z_height: i32,
    mode: FillMode,
    color: Color,
) {
    for layer in 0..z_height {
        let z = origin.z.wrapping_add(layer);
        match mode {
            FillMode::Full => {
                draw_rect(target, projector, Vec3::new(origin.x, origin.y, z), size, color)
            }
            FillMode::FastSidesOnly => draw_front_edges(target, projector, origin, size, z, color),
        }
    }

    let top = if z_height > 0 {
        origin.z.wrapping_add(z_height - 1)
    } else {
        origin.z
    };
    fill_rect(target, projector, Vec3::new(origin.x, origin.y, top), size, color);
}

/// Wireframe box. The vertical edge at the back-left corner is hidden in
/// the isometric view and is not drawn.
pub fn draw_box(
    target: &mut RenderTarget<'_>,
    projector: &Projector,
    origin: Vec3,
    size: Size,
    z_height: i32,
    color: Color,
) {
    let top_z = origin.z.wrapping_add(z_height);

    // Bottom
    draw_front_edges(target, projector, origin, size, origin.z, color);

    // Top
    draw_rect(target, projector, Vec3::new(origin.x, origin.y, top_z), size, color);

    // Sides
    let bottom = RectCorners::at_z(origin, size, origin.z);
    let top = RectCorners::at_z(origin, size, top_z);
    draw_line_3d(target, projector, bottom.left, top.left, color);
    draw_line_3d(target, projector, bottom.front, top.front, color);
    draw_line_3d(target, projector, bottom.right, top.right, color);
}
