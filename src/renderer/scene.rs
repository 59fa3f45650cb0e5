//! Scene assembly: game state to vertex list
//!
//! Draw order is background, lane separators, player, then obstacles in
//! spawn order.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GameState, Obstacle, Player, lane_separators};

const ROUND_SEGMENTS: u32 = 24;

/// Build the full frame for a game state
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = background();
    vertices.extend(player(&state.player));
    for obstacle in &state.obstacles {
        vertices.extend(obstacle_barrel(obstacle));
    }
    vertices
}

/// Background fill plus dashed lane separators
pub fn background() -> Vec<Vertex> {
    let mut vertices = shapes::rect(
        Vec2::ZERO,
        Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        colors::BACKGROUND,
    );
    for x in lane_separators() {
        vertices.extend(shapes::dashed_vline(
            x,
            0.0,
            CANVAS_HEIGHT,
            10.0,
            10.0,
            2.0,
            colors::LANE_LINE,
        ));
    }
    vertices
}

/// Player character: body, head with face, arms, hat
pub fn player(player: &Player) -> Vec<Vertex> {
    let origin = Vec2::new(player.x(), player.y);
    let (w, h) = (player.width, player.height);
    let head = origin + Vec2::new(w / 2.0, 15.0);
    let mut v = Vec::new();

    v.extend(shapes::rect(origin, Vec2::new(w, h), colors::PLAYER_BODY));
    v.extend(shapes::circle(head, 15.0, colors::SKIN, ROUND_SEGMENTS));

    // Eyes and smile
    v.extend(shapes::circle(head - Vec2::new(5.0, 0.0), 2.0, colors::FACE, 8));
    v.extend(shapes::circle(head + Vec2::new(5.0, 0.0), 2.0, colors::FACE, 8));
    v.extend(shapes::arc_stroke(
        head + Vec2::new(0.0, 5.0),
        Vec2::splat(5.0),
        0.0,
        std::f32::consts::PI,
        1.0,
        colors::FACE,
        8,
    ));

    // Arms
    v.extend(shapes::line(
        origin + Vec2::new(0.0, 30.0),
        origin + Vec2::new(-10.0, 50.0),
        5.0,
        colors::SKIN,
    ));
    v.extend(shapes::line(
        origin + Vec2::new(w, 30.0),
        origin + Vec2::new(w + 10.0, 50.0),
        5.0,
        colors::SKIN,
    ));

    // Hat: brim then crown
    v.extend(shapes::rect(
        origin + Vec2::new(2.0, 2.0),
        Vec2::new(w - 4.0, 8.0),
        colors::HAT,
    ));
    v.extend(shapes::rect(
        origin + Vec2::new(10.0, -8.0),
        Vec2::new(w - 20.0, 10.0),
        colors::HAT,
    ));

    v
}

/// Obstacle drawn as a barrel with a white band
pub fn obstacle_barrel(obstacle: &Obstacle) -> Vec<Vertex> {
    let center = obstacle.rect().center();
    let (w, h) = (obstacle.width, obstacle.height);
    let mut v = shapes::ellipse(
        center,
        Vec2::new(w / 2.0, h / 2.0),
        colors::BARREL,
        ROUND_SEGMENTS,
    );
    v.extend(shapes::ellipse_ring(
        center,
        Vec2::new(w / 2.2, h / 2.5),
        3.0,
        colors::BARREL_BAND,
        ROUND_SEGMENTS,
    ));
    v
}
