//! Triangle lists for the wheel
//!
//! All shapes are in wheel-local coordinates (origin at the center, y down,
//! angle 0 up, clockwise). The renderer applies the live rotation.

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::ONE_TURN;
use crate::geometry::{Segment, WheelGeometry};
use crate::options::Color;
use crate::polar_to_screen;

/// Tessellation density for curved edges
pub const STEPS_PER_DEGREE: f64 = 0.5;

/// Generate vertices for an annular band between two angles (degrees)
pub fn band(
    inner_radius: f32,
    outer_radius: f32,
    start: f64,
    end: f64,
    color: [f32; 4],
) -> Vec<Vertex> {
    let span = end - start;
    if span <= 0.0 {
        return Vec::new();
    }
    let steps = ((span * STEPS_PER_DEGREE) as u32).max(4);
    let mut vertices = Vec::with_capacity((steps * 6) as usize);

    for i in 0..steps {
        let theta1 = start + span * i as f64 / steps as f64;
        let theta2 = start + span * (i + 1) as f64 / steps as f64;

        let inner1 = polar_to_screen(inner_radius, theta1);
        let outer1 = polar_to_screen(outer_radius, theta1);
        let inner2 = polar_to_screen(inner_radius, theta2);
        let outer2 = polar_to_screen(outer_radius, theta2);

        // Two triangles per step
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Wedge for one segment, shrunk by the pad angle when enabled
pub fn wedge(segment: &Segment, pad_degrees: f64) -> Vec<Vertex> {
    let (start, end) = segment.padded_range(pad_degrees);
    band(
        segment.inner_radius,
        segment.outer_radius,
        start,
        end,
        segment.color.to_rgba_f32(),
    )
}

/// Full ring, e.g. the border
pub fn ring(inner_radius: f32, outer_radius: f32, color: Color) -> Vec<Vertex> {
    band(inner_radius, outer_radius, 0.0, ONE_TURN, color.to_rgba_f32())
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let color = color.to_rgba_f32();
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = ONE_TURN * i as f64 / segments as f64;
        let theta2 = ONE_TURN * (i + 1) as f64 / segments as f64;
        let p1 = center + polar_to_screen(radius, theta1);
        let p2 = center + polar_to_screen(radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Mesh for the whole wheel: background disc, wedges, then the border
pub fn wheel_mesh(
    geometry: &WheelGeometry,
    background: Color,
    border: Color,
    border_width: f32,
) -> Vec<Vertex> {
    let outer = geometry.outer_radius();
    let mut vertices = circle(Vec2::ZERO, outer, background, 64);

    for segment in geometry.segments() {
        vertices.extend(wedge(segment, geometry.pad_angle()));
    }

    if border_width > 0.0 {
        vertices.extend(ring(outer, outer + border_width, border));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WheelGeometryBuilder;
    use crate::options::WheelOptions;

    fn angle_of(v: &Vertex) -> f64 {
        crate::screen_to_polar(Vec2::from(v.position)).1
    }

    #[test]
    fn test_band_triangle_count() {
        let vertices = band(10.0, 20.0, 0.0, 90.0, [1.0; 4]);
        assert_eq!(vertices.len() % 3, 0);
        assert_eq!(vertices.len(), 45 * 6);
        assert!(band(10.0, 20.0, 90.0, 90.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_wedge_respects_pad() {
        let options = WheelOptions {
            use_pad_angle: true,
            ..Default::default()
        };
        let geometry = WheelGeometryBuilder::build(&["A", "B", "C", "D"], &options).unwrap();
        let segment = &geometry.segments()[1];
        let vertices = wedge(segment, geometry.pad_angle());

        let half_pad = geometry.pad_angle() / 2.0;
        for v in &vertices {
            let angle = angle_of(v);
            assert!(angle >= 90.0 + half_pad - 1e-3, "{angle}");
            assert!(angle <= 180.0 - half_pad + 1e-3, "{angle}");
        }
    }

    #[test]
    fn test_wheel_mesh_colors() {
        let geometry = WheelGeometryBuilder::build(&["A", "B"], &WheelOptions::default()).unwrap();
        let with_border = wheel_mesh(&geometry, Color::WHITE, Color::WHITE, 2.0);
        let without = wheel_mesh(&geometry, Color::WHITE, Color::WHITE, 0.0);
        assert!(with_border.len() > without.len());

        let first_wedge = &without[64 * 3];
        assert_eq!(first_wedge.color, geometry.segments()[0].color.to_rgba_f32());
    }
}
