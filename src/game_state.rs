use crate::engine::GuessGame;
use crate::error::GameError;
use crate::scoreboard::Scoreboard;
use crate::vocabulary::Vocabulary;
use log::warn;

/// What a player asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit { player: String, guess: String },
    ShowScores,
    Exit,
}

/// Totals for one run of [`game_loop`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub submissions: usize,
    pub rejections: usize,
    pub completed: bool,
}

/// Trait for abstracting UI interactions
/// This allows the game loop to work with different frontends
pub trait GameInterface {
    fn display_board(&mut self, board: &[String]);

    /// `None` means the input could not be understood; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_round_score(&mut self, player: &str, guess: &str, score: u32);

    fn display_rejection(&mut self, player: &str, guess: &str, error: &GameError);

    fn display_scores(&mut self, scores: &Scoreboard);

    fn display_game_complete(&mut self);

    fn display_exit_message(&mut self);
}

enum Turn {
    Continue,
    Complete,
    Exit,
}

/// Plays until every word is solved or the interface asks to stop, then
/// shows the final scores.
pub fn game_loop<V, I>(game: &mut GuessGame<V>, interface: &mut I) -> GameSummary
where
    V: Vocabulary,
    I: GameInterface + ?Sized,
{
    let mut summary = GameSummary::default();
    interface.display_board(&game.game_strings());

    if game.is_game_complete() {
        interface.display_game_complete();
        summary.completed = true;
    }

    while !summary.completed {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match play_turn(game, interface, action, &mut summary) {
            Turn::Continue => {}
            Turn::Complete => {
                interface.display_game_complete();
                summary.completed = true;
            }
            Turn::Exit => {
                interface.display_exit_message();
                break;
            }
        }
    }

    interface.display_scores(game.player_scores());
    summary
}

fn play_turn<V, I>(
    game: &mut GuessGame<V>,
    interface: &mut I,
    action: UserAction,
    summary: &mut GameSummary,
) -> Turn
where
    V: Vocabulary,
    I: GameInterface + ?Sized,
{
    let (player, guess) = match action {
        UserAction::Exit => return Turn::Exit,
        UserAction::ShowScores => {
            interface.display_scores(game.player_scores());
            return Turn::Continue;
        }
        UserAction::Submit { player, guess } => (player, guess),
    };

    summary.submissions += 1;
    match game.submit_guess(&player, &guess) {
        Ok(score) => {
            interface.display_round_score(&player, &guess, score);
            interface.display_board(&game.game_strings());
            if game.is_game_complete() {
                Turn::Complete
            } else {
                Turn::Continue
            }
        }
        Err(e) => {
            warn!("{player} submitted '{guess}': {e}");
            summary.rejections += 1;
            interface.display_rejection(&player, &guess, &e);
            Turn::Continue
        }
    }
}
