/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// game-space rectangles into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use space_invaders::entities::{Bullet, Enemy, GameState, Phase, Position};

// ── Scaling ───────────────────────────────────────────────────────────────────

/// Game-space pixels per terminal column / row.
const PX_PER_COL: f64 = 10.0;
const PX_PER_ROW: f64 = 20.0;

const FIELD_COLS: u16 = (FIELD_WIDTH / PX_PER_COL) as u16;
const FIELD_ROWS: u16 = (FIELD_HEIGHT / PX_PER_ROW) as u16;

/// First terminal column / row inside the border.
const LEFT: u16 = 1;
const TOP: u16 = 2;

/// Smallest terminal that fits HUD, border, field and hint line.
pub const MIN_COLS: u16 = FIELD_COLS + 2;
pub const MIN_ROWS: u16 = FIELD_ROWS + 4;

/// Terminal cell holding the game-space point, or `None` outside the field.
fn cell(p: Position) -> Option<(u16, u16)> {
    let col = (p.x / PX_PER_COL).floor();
    let row = (p.y / PX_PER_ROW).floor();
    if col < 0.0 || row < 0.0 || col >= FIELD_COLS as f64 || row >= FIELD_ROWS as f64 {
        return None;
    }
    Some((LEFT + col as u16, TOP + row as u16))
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;
    draw_hud(out, state)?;

    if state.phase != Phase::NotStarted {
        for enemy in &state.enemies {
            draw_enemy(out, enemy)?;
        }
        for bullet in &state.bullets {
            draw_bullet(out, bullet)?;
        }
        draw_player(out, state)?;
    }
    draw_controls_hint(out)?;

    match state.phase {
        Phase::NotStarted => draw_title(out)?,
        Phase::GameOver => draw_game_over(out, state)?,
        Phase::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, MIN_ROWS - 1))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = FIELD_COLS as usize;
    let bottom = TOP + FIELD_ROWS;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in TOP..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(LEFT + FIELD_COLS, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    if state.phase != Phase::NotStarted {
        let wave = format!("Wave {}", state.wave + 1);
        let wx = MIN_COLS.saturating_sub(wave.len() as u16 + 1);
        out.queue(cursor::MoveTo(wx, 0))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(&wave))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // 30 px wide → three cells: /▲\
    if let Some((col, row)) = cell(state.player.pos) {
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("/▲\\"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy) -> std::io::Result<()> {
    // 20 px wide → two cells
    if let Some((col, row)) = cell(enemy.pos) {
        out.queue(style::SetForegroundColor(C_ENEMY))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("<>"))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet) -> std::io::Result<()> {
    if let Some((col, row)) = cell(bullet.pos) {
        out.queue(style::SetForegroundColor(C_BULLET))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, MIN_ROWS - 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←→/AD move  SPACE fire  Q quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(out: &mut W, lines: &[(&str, Color)]) -> std::io::Result<()> {
    let cx = LEFT + FIELD_COLS / 2;
    let start_row = (TOP + FIELD_ROWS / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_title<W: Write>(out: &mut W) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("SPACE INVADERS", Color::Cyan),
            ("", Color::White),
            ("ENTER - Start", Color::White),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    draw_centered(
        out,
        &[
            ("╔════════════╗", Color::Red),
            ("║ GAME  OVER ║", Color::Red),
            ("╚════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            ("ENTER - Restart", Color::White),
        ],
    )
}
