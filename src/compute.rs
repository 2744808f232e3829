/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (or one of its collections) and returns a brand-new value.
/// Nothing here touches a clock, a terminal or any other shared resource.

use crate::consts::{
    BULLET_SPEED, ENEMY_COLS, ENEMY_DESCENT, ENEMY_ORIGIN, ENEMY_ROWS, ENEMY_SPACING,
    PLAYER_MAX_X, PLAYER_STEP, SCORE_PER_ENEMY,
};
use crate::entities::{Bullet, Enemy, GameState, Phase, Player};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Canonical wave layout: `ENEMY_ROWS` × `ENEMY_COLS`, row by row.
pub fn spawn_wave() -> Vec<Enemy> {
    let pitch = Enemy::SIZE + ENEMY_SPACING;
    (0..ENEMY_ROWS)
        .flat_map(|row| {
            (0..ENEMY_COLS).map(move |col| {
                Enemy::at(
                    col as f64 * pitch + ENEMY_ORIGIN,
                    row as f64 * pitch + ENEMY_ORIGIN,
                )
            })
        })
        .collect()
}

/// Fresh running session: everything reset, first wave on the field.
pub fn start_game() -> GameState {
    log::info!("game started");
    GameState {
        phase: Phase::Running,
        enemies: spawn_wave(),
        ..GameState::default()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let mut player = state.player;
    player.pos.x = (player.pos.x - PLAYER_STEP).max(0.0);
    GameState {
        player,
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let mut player = state.player;
    player.pos.x = (player.pos.x + PLAYER_STEP).min(PLAYER_MAX_X);
    GameState {
        player,
        ..state.clone()
    }
}

/// Fire a bullet from the centre of the player's top edge.  No cap and no
/// cooldown: every call while running adds one bullet.
pub fn player_shoot(state: &GameState) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let p = state.player.pos;
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::at(
        p.x + Player::SIZE / 2.0 - Bullet::SIZE / 2.0,
        p.y,
    ));
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Tick stages ──────────────────────────────────────────────────────────────

/// Move every bullet up; drop the ones that reach or cross the top edge.
pub fn advance_bullets(bullets: &[Bullet]) -> Vec<Bullet> {
    bullets
        .iter()
        .filter_map(|b| {
            let y = b.pos.y - BULLET_SPEED;
            if y <= 0.0 {
                None
            } else {
                Some(Bullet::at(b.pos.x, y))
            }
        })
        .collect()
}

pub fn advance_enemies(enemies: &[Enemy]) -> Vec<Enemy> {
    enemies
        .iter()
        .map(|e| Enemy::at(e.pos.x, e.pos.y + ENEMY_DESCENT))
        .collect()
}

/// True once any enemy's bottom edge is below the player's top edge.
/// Horizontal position is irrelevant: reaching the row anywhere ends the game.
pub fn reached_player_row(enemies: &[Enemy], player: &Player) -> bool {
    enemies.iter().any(|e| e.bottom() > player.pos.y)
}

/// What is left after bullets and enemies have been matched up.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionOutcome {
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub kills: u32,
}

/// Enemies outer, bullets inner, first overlapping bullet wins.  A matched
/// bullet is consumed, so it can never destroy a second enemy.
pub fn resolve_collisions(enemies: &[Enemy], bullets: &[Bullet]) -> CollisionOutcome {
    let mut live_bullets = bullets.to_vec();
    let mut survivors = Vec::with_capacity(enemies.len());
    let mut kills = 0;

    for enemy in enemies {
        let hit = live_bullets
            .iter()
            .position(|b| b.bounds().intersects(&enemy.bounds()));
        match hit {
            Some(bi) => {
                live_bullets.remove(bi);
                kills += 1;
            }
            None => survivors.push(*enemy),
        }
    }

    CollisionOutcome {
        enemies: survivors,
        bullets: live_bullets,
        kills,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  A no-op unless the game is running.
pub fn tick(state: &GameState) -> GameState {
    if !state.is_running() {
        return state.clone();
    }
    let frame = state.frame + 1;

    // ── 1. Move bullets ──────────────────────────────────────────────────────
    let bullets = advance_bullets(&state.bullets);

    // ── 2. Move enemies down ─────────────────────────────────────────────────
    let enemies = advance_enemies(&state.enemies);

    // ── 3. Enemy reached the player's row ────────────────────────────────────
    if reached_player_row(&enemies, &state.player) {
        log::info!(
            "game over after {} ticks (wave {}, score {})",
            frame,
            state.wave + 1,
            state.score
        );
        return GameState {
            phase: Phase::GameOver,
            enemies,
            bullets,
            frame,
            ..state.clone()
        };
    }

    // ── 4. Collision: bullets ↔ enemies ──────────────────────────────────────
    let CollisionOutcome {
        enemies,
        bullets,
        kills,
    } = resolve_collisions(&enemies, &bullets);
    if kills > 0 {
        log::debug!("{} enemies destroyed on tick {}", kills, frame);
    }

    // ── 5. Respawn an exhausted wave ─────────────────────────────────────────
    let (enemies, wave) = if enemies.is_empty() {
        log::debug!("wave {} cleared, respawning", state.wave + 1);
        (spawn_wave(), state.wave + 1)
    } else {
        (enemies, state.wave)
    };

    GameState {
        enemies,
        bullets,
        score: state.score + kills * SCORE_PER_ENEMY,
        frame,
        wave,
        ..state.clone()
    }
}
