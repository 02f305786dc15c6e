//! Player and enemy cars

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// The player's car. Moves horizontally only.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0).floor(),
                SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Shift by `direction * speed`, keeping the car fully on screen
    pub fn move_by(&mut self, direction: i8) {
        let direction = direction.signum() as f32;
        let max_x = SCREEN_WIDTH - self.size.x;
        self.pos.x = (self.pos.x + direction * self.speed).clamp(0.0, max_x);
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// An oncoming car
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per reference tick
    pub speed: f32,
}

impl Enemy {
    /// Create an enemy just above the visible area at column `x`
    pub fn new(id: u32, x: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, -ENEMY_HEIGHT),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed,
        }
    }

    /// Advance downward by `speed * dt` (dt normalized to the reference tick)
    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }

    /// Top edge has passed the bottom of the screen
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered() {
        let player = Player::default();
        assert_eq!(player.pos.x, 210.0);
        assert_eq!(player.pos.y, 530.0);
    }

    #[test]
    fn test_player_idle_stays_put() {
        let mut player = Player::default();
        player.move_by(0);
        assert_eq!(player.pos.x, 210.0);
    }

    #[test]
    fn test_player_moves_left_ten_frames() {
        let mut player = Player::default();
        for _ in 0..10 {
            player.move_by(-1);
        }
        assert_eq!(player.pos.x, 160.0);
    }

    #[test]
    fn test_player_clamped_at_edges() {
        let mut player = Player::default();
        for _ in 0..200 {
            player.move_by(-1);
        }
        assert_eq!(player.pos.x, 0.0);

        for _ in 0..200 {
            player.move_by(1);
        }
        assert_eq!(player.pos.x, SCREEN_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_enemy_spawns_above_screen() {
        let enemy = Enemy::new(1, 100.0, 4.0);
        assert_eq!(enemy.pos.y, -ENEMY_HEIGHT);
        assert!(enemy.rect().bottom() <= 0.0);
    }

    #[test]
    fn test_enemy_update_scales_with_dt() {
        let mut enemy = Enemy::new(1, 0.0, 4.0);
        enemy.update(1.0);
        assert_eq!(enemy.pos.y, -ENEMY_HEIGHT + 4.0);
        enemy.update(2.0);
        assert_eq!(enemy.pos.y, -ENEMY_HEIGHT + 12.0);
    }

    #[test]
    fn test_enemy_off_screen_is_strict() {
        let mut enemy = Enemy::new(1, 0.0, 1.0);
        enemy.pos.y = SCREEN_HEIGHT;
        assert!(!enemy.is_off_screen());
        enemy.pos.y = SCREEN_HEIGHT + 0.5;
        assert!(enemy.is_off_screen());
    }
}
