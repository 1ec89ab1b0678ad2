//! iso3d Core Library - Isometric projection and framebuffer rasterization
//!
//! This library projects integer world coordinates onto an 8-bit framebuffer
//! and composes rectangles and boxes out of Bresenham lines. The framebuffer
//! itself belongs to a host `GraphicsContext`; drawing only happens between
//! `begin_render` and `finish_render`.

pub mod context;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod shapes;

// Re-export commonly used types
pub use context::{render_pass, GraphicsContext, MemoryDisplay, Renderer};
pub use error::RenderError;
pub use framebuffer::{BitmapLayout, ClipStats, DisplayConfig, PixelWrite, RenderTarget};
pub use geometry::{Color, RectCorners, ScreenPoint, Size, Vec3};
pub use projection::{Projector, ProjectorConfig};
pub use shapes::FillMode;
