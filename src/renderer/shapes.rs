//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in logical pixel space
//! (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

fn push_quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    // a-b-c-d in winding order, split along a-c
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    );
    vertices
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a stroked elliptical arc from `start` to `end` (radians)
///
/// Angles follow screen space: 0 points right, PI/2 points down.
pub fn arc_stroke(
    center: Vec2,
    radii: Vec2,
    start: f32,
    end: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let half = width / 2.0;
    let inner = (radii - Vec2::splat(half)).max(Vec2::ZERO);
    let outer = radii + Vec2::splat(half);

    for i in 0..segments {
        let theta1 = start + (end - start) * (i as f32 / segments as f32);
        let theta2 = start + (end - start) * ((i + 1) as f32 / segments as f32);
        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        push_quad(
            &mut vertices,
            center + dir1 * inner,
            center + dir1 * outer,
            center + dir2 * outer,
            center + dir2 * inner,
            color,
        );
    }

    vertices
}

/// Generate vertices for a stroked ellipse outline
pub fn ellipse_ring(
    center: Vec2,
    radii: Vec2,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    arc_stroke(center, radii, 0.0, TAU, width, color, segments)
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, from + perp, to + perp, to - perp, from - perp, color);
    vertices
}

/// Generate vertices for a dashed vertical line at `x` from `y0` to `y1`
pub fn dashed_vline(
    x: f32,
    y0: f32,
    y1: f32,
    dash: f32,
    gap: f32,
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let step = dash + gap;
    if step <= 0.0 {
        return vertices;
    }

    let mut y = y0;
    while y < y1 {
        let end = (y + dash).min(y1);
        vertices.extend(rect(
            Vec2::new(x - width / 2.0, y),
            Vec2::new(width, end - y),
            color,
        ));
        y += step;
    }

    vertices
}
