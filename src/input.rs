/// Key-press → command translation.

use crossterm::event::KeyCode;

use crate::compute::{move_player_left, move_player_right, player_shoot};
use crate::entities::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Arrow keys or A/D to move, Space to fire.  Anything else is not a
/// gameplay key.
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Char(' ') => Some(Command::Fire),
        _ => None,
    }
}

/// Apply one command.  Ignored unless the game is running.
pub fn apply_command(state: &GameState, command: Command) -> GameState {
    match command {
        Command::MoveLeft => move_player_left(state),
        Command::MoveRight => move_player_right(state),
        Command::Fire => player_shoot(state),
    }
}
