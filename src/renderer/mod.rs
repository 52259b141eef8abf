//! Rendering module
//!
//! The scene is drawn against the small `DrawSurface` trait (rects, circles,
//! text). `DrawList` records those calls; the WebGPU backend tessellates a
//! recorded list and draws it in one pass.

pub mod draw_list;
pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList};
pub use pipeline::{RenderError, RenderState};
pub use scene::{draw_game_over, draw_scene};
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

/// A fixed-size 2D drawing target in field coordinates (origin top-left,
/// y down)
pub trait DrawSurface {
    /// Width and height in field units
    fn size(&self) -> (f32, f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw `text` with its baseline at `y`, like a 2D canvas `fillText`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, size: f32);
}
