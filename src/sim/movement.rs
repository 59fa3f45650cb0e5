//! Obstacle movement and cleanup

use super::state::Obstacle;

/// Move every obstacle down by `distance`, then drop the ones off screen
///
/// Survivors keep their relative order.
pub fn advance_and_prune(obstacles: &mut Vec<Obstacle>, distance: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.y += distance;
    }
    obstacles.retain(|o| !o.is_off_screen());
}
