//! Collision detection between the player and oncoming cars
//!
//! Every shape in this game is an axis-aligned box, so a collision is a
//! plain rectangle overlap. The scan stops at the first hit; only the
//! game-over outcome is observable, not which enemy was found first.

use super::entity::{Enemy, Player};

/// Result of a collision scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Index into the enemy list
    pub index: usize,
    /// Id of the enemy that was hit
    pub enemy_id: u32,
}

/// Test the player against every enemy in list order and return the first hit
pub fn check_collisions(player: &Player, enemies: &[Enemy]) -> Option<CollisionResult> {
    let player_rect = player.rect();
    enemies
        .iter()
        .position(|enemy| player_rect.intersects(&enemy.rect()))
        .map(|index| CollisionResult {
            index,
            enemy_id: enemies[index].id,
        })
}
