use proptest::prelude::*;

use space_invaders::compute::*;
use space_invaders::consts::*;
use space_invaders::entities::*;
use space_invaders::input::{apply_command, Command};

/// One step of play: either a key command or a simulation tick.
#[derive(Clone, Debug)]
enum Step {
    Key(Command),
    Tick,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::Fire),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => command().prop_map(Step::Key),
        2 => Just(Step::Tick),
    ]
}

fn apply(state: &GameState, step: &Step) -> GameState {
    match step {
        Step::Key(cmd) => apply_command(state, *cmd),
        Step::Tick => tick(state),
    }
}

proptest! {
    #[test]
    fn player_stays_inside_field(
        start_x in 0.0..=PLAYER_MAX_X,
        moves in prop::collection::vec(command(), 0..80),
    ) {
        let mut s = start_game();
        s.player.pos.x = start_x;
        for cmd in moves {
            s = apply_command(&s, cmd);
            prop_assert!(s.player.pos.x >= 0.0);
            prop_assert!(s.player.pos.x <= PLAYER_MAX_X);
            prop_assert_eq!(s.player.pos.y, PLAYER_SPAWN_Y);
        }
    }

    #[test]
    fn score_only_grows_by_consumed_bullets(
        steps in prop::collection::vec(step(), 0..400),
    ) {
        let mut s = start_game();
        for st in &steps {
            let next = apply(&s, st);
            prop_assert!(next.score >= s.score);
            if matches!(st, Step::Tick) && next.phase == Phase::Running {
                // Each kill consumes exactly one bullet that survived the advance
                let advanced = advance_bullets(&s.bullets).len() as u32;
                let consumed = advanced - next.bullets.len() as u32;
                prop_assert_eq!(next.score - s.score, consumed * SCORE_PER_ENEMY);
                prop_assert!(!next.enemies.is_empty());
                prop_assert!(next.enemies.len() <= ENEMY_ROWS * ENEMY_COLS);
            }
            prop_assert!(next.bullets.iter().all(|b| b.pos.y > 0.0));
            s = next;
        }
    }

    #[test]
    fn game_over_ignores_everything(
        steps in prop::collection::vec(step(), 0..60),
    ) {
        let mut over = player_shoot(&start_game());
        over.phase = Phase::GameOver;
        let mut s = over.clone();
        for st in &steps {
            s = apply(&s, st);
        }
        prop_assert_eq!(s, over);
    }
}
