/// Gameplay tuning values.  Geometry is in game-space pixels.

use std::time::Duration;

// ── Play field ────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f64 = 300.0;
pub const FIELD_HEIGHT: f64 = 400.0;

// ── Entity sizes (square bounding boxes) ─────────────────────────────────────

pub const PLAYER_SIZE: f64 = 30.0;
pub const ENEMY_SIZE: f64 = 20.0;
pub const BULLET_SIZE: f64 = 5.0;

// ── Enemy grid ────────────────────────────────────────────────────────────────

pub const ENEMY_ROWS: usize = 4;
pub const ENEMY_COLS: usize = 8;
/// Gap between neighbouring enemies, both axes.
pub const ENEMY_SPACING: f64 = 10.0;
/// Top-left offset of the first enemy in a fresh wave.
pub const ENEMY_ORIGIN: f64 = 20.0;

// ── Speeds (units per tick) ──────────────────────────────────────────────────

pub const PLAYER_STEP: f64 = 10.0;
pub const BULLET_SPEED: f64 = 5.0;
pub const ENEMY_DESCENT: f64 = 0.2;

// ── Scoring & timing ─────────────────────────────────────────────────────────

pub const SCORE_PER_ENEMY: u32 = 10;
pub const TICK_RATE_HZ: u32 = 60;
pub const TICK_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE_HZ as u64);

// ── Player spawn ─────────────────────────────────────────────────────────────

pub const PLAYER_SPAWN_X: f64 = FIELD_WIDTH / 2.0 - PLAYER_SIZE / 2.0;
/// Player sits 10 px above the bottom edge.
pub const PLAYER_SPAWN_Y: f64 = FIELD_HEIGHT - PLAYER_SIZE - 10.0;
/// Rightmost legal `player.x`.
pub const PLAYER_MAX_X: f64 = FIELD_WIDTH - PLAYER_SIZE;
