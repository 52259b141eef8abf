//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw_list::DrawCommand;
use super::font;
use super::vertex::{Color, Vertex};

/// Segments used for circles
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Append two triangles covering an axis-aligned rectangle
pub fn push_rect(vertices: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: Color) {
    vertices.push(Vertex::new(x, y, color));
    vertices.push(Vertex::new(x, y + h, color));
    vertices.push(Vertex::new(x + w, y, color));

    vertices.push(Vertex::new(x + w, y, color));
    vertices.push(Vertex::new(x, y + h, color));
    vertices.push(Vertex::new(x + w, y + h, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for bitmap text with its baseline at `y`
pub fn text(text: &str, x: f32, y: f32, size: f32, color: Color) -> Vec<Vertex> {
    let runs = font::layout(text, x, y, size);
    let mut vertices = Vec::with_capacity(runs.len() * 6);
    for run in runs {
        push_rect(&mut vertices, run.x, run.y, run.width, run.height, color);
    }
    vertices
}

/// Turn recorded draw commands into a triangle list, in painter's order
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => push_rect(&mut vertices, *x, *y, *width, *height, *color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Text {
                text: s,
                x,
                y,
                color,
                size,
            } => vertices.extend(text(s, *x, *y, *size, *color)),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawList, DrawSurface, colors};

    #[test]
    fn test_rect_corners() {
        let mut vertices = Vec::new();
        push_rect(&mut vertices, 10.0, 20.0, 15.0, 100.0, colors::BALL);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 25.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 120.0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(400.0, 300.0);
        let vertices = circle(center, 10.0, colors::BALL, 16);
        assert_eq!(vertices.len(), 48);
        for v in &vertices {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_tessellate_keeps_order_and_color() {
        let mut list = DrawList::new(800.0, 600.0);
        list.fill_rect(0.0, 0.0, 800.0, 600.0, colors::BACKGROUND);
        list.fill_circle(Vec2::new(400.0, 300.0), 10.0, colors::BALL);
        list.draw_text("1", 200.0, 50.0, colors::SCORE, 40.0);

        let vertices = tessellate(list.commands());
        assert_eq!(vertices[0].color, colors::BACKGROUND);
        assert_eq!(vertices[6].color, colors::BALL);
        let circle_len = (CIRCLE_SEGMENTS * 3) as usize;
        // '1' is one run per row
        assert_eq!(vertices.len(), 6 + circle_len + 7 * 6);
        assert!(vertices[6 + circle_len..]
            .iter()
            .all(|v| v.color == colors::SCORE));
    }
}
