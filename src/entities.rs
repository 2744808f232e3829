/// All game entity types — pure data, no game rules.

use crate::consts::{BULLET_SIZE, ENEMY_SIZE, PLAYER_SIZE, PLAYER_SPAWN_X, PLAYER_SPAWN_Y};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// Top-left corner of an entity in game space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Axis-aligned box, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Position,
    pub max: Position,
}

impl Aabb {
    pub fn square(at: Position, size: f64) -> Self {
        Aabb {
            min: at,
            max: Position::new(at.x + size, at.y + size),
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

// ── Player, enemy & bullet ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Position,
}

impl Player {
    pub const SIZE: f64 = PLAYER_SIZE;

    pub fn spawn() -> Self {
        Player {
            pos: Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, Self::SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Position,
}

impl Enemy {
    pub const SIZE: f64 = ENEMY_SIZE;

    pub fn at(x: f64, y: f64) -> Self {
        Enemy { pos: Position::new(x, y) }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, Self::SIZE)
    }

    /// y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.pos.y + Self::SIZE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub pos: Position,
}

impl Bullet {
    pub const SIZE: f64 = BULLET_SIZE;

    pub fn at(x: f64, y: f64) -> Self {
        Bullet { pos: Position::new(x, y) }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, Self::SIZE)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    /// Ticks simulated since the session started.
    pub frame: u64,
    /// Completed waves; bumps every time the grid is respawned.
    pub wave: u32,
}

impl Default for GameState {
    /// The title-screen state, before any game has been started.
    fn default() -> Self {
        GameState {
            phase: Phase::NotStarted,
            score: 0,
            player: Player::spawn(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            frame: 0,
            wave: 0,
        }
    }
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
