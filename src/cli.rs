use crate::engine::GuessGame;
use crate::error::{GameError, StartupError};
use crate::game_state::{GameInterface, UserAction};
use crate::picker::RandomPicker;
use crate::scoreboard::Scoreboard;
use crate::vocabulary::{WordList, load_wordlist};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

pub const DEFAULT_WORDS: [&str; 3] = ["apple", "grape", "melon"];

/// Turns played by `--demo`, one `<player> <guess>` per line.
pub const DEMO_SCRIPT: &str = "Player1 ample\nPlayer2 grape\nPlayer3 wrong\n";

/// Multiplayer word-reveal guessing game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Secret words for this round, all the same length
    #[arg(
        short = 'w',
        long = "words",
        value_delimiter = ',',
        value_parser = parse_secret_word,
        default_values_t = DEFAULT_WORDS.map(String::from)
    )]
    pub words: Vec<String>,

    /// Path to a newline-delimited vocabulary file
    #[arg(short = 'i', long = "vocabulary")]
    pub vocabulary_path: Option<PathBuf>,

    /// Seed for choosing the starting letters
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Play the built-in demo script against the default words
    #[arg(long = "demo")]
    pub demo: bool,

    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Secret words are compared against lowercased guesses, so store them lowercased too.
fn parse_secret_word(word: &str) -> Result<String, String> {
    Ok(word.trim().to_lowercase())
}

impl Cli {
    /// The words this run plays against. `--demo` always uses [`DEFAULT_WORDS`].
    pub fn secret_words(&self) -> Vec<String> {
        if self.demo {
            DEFAULT_WORDS.map(String::from).to_vec()
        } else {
            self.words.clone()
        }
    }
}

/// Loads the vocabulary and sets up the board described by `cli`.
pub fn build_game(cli: &Cli) -> Result<GuessGame<WordList>, StartupError> {
    let vocabulary = load_wordlist(cli.vocabulary_path.as_deref())?;
    log::info!("Loaded {} vocabulary words", vocabulary.len());

    let mut picker = match cli.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };
    Ok(GuessGame::with_picker(cli.secret_words(), vocabulary, &mut picker)?)
}

// UI Input/Output functions

/// Parses one line of player input.
///
/// `exit` and `scores` are commands; anything else must be a player name
/// followed by a guess. Guesses are lowercased to match the word list.
pub fn parse_action(line: &str) -> Option<UserAction> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "exit" | "quit" => return Some(UserAction::Exit),
        "scores" => return Some(UserAction::ShowScores),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let player = parts.next()?;
    let guess = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(UserAction::Submit {
        player: player.to_string(),
        guess: guess.to_lowercase(),
    })
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter '<player> <guess>', 'scores' or 'exit':");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return Some(UserAction::Exit),
        Ok(_) => {}
    }

    let action = parse_action(&input);
    if action.is_none() {
        println!("Invalid input. Expected a player name and one guess, e.g. 'Player1 apple'.");
    }
    action
}

pub fn display_board(board: &[String]) {
    println!("Game strings:");
    for (i, word) in board.iter().enumerate() {
        println!("  {}. {}", i + 1, word);
    }
}

pub fn display_round_score(player: &str, guess: &str, score: u32) {
    println!("{player} submits '{guess}': scored {score}");
}

pub fn display_rejection(player: &str, guess: &str, error: &GameError) {
    println!("{player} submits '{guess}': rejected ({error})");
}

pub fn display_scores(scores: &Scoreboard) {
    println!("Player scores:");
    if scores.is_empty() {
        println!("  (no submissions yet)");
    }
    for (player, score) in scores {
        println!("  {player}: {score}");
    }
}

pub fn display_game_complete() {
    println!("\nThe game is complete!");
}

pub fn display_exit_message() {
    println!("\nThe game is not yet complete. Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_board(&mut self, board: &[String]) {
        display_board(board);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_round_score(&mut self, player: &str, guess: &str, score: u32) {
        display_round_score(player, guess, score);
    }

    fn display_rejection(&mut self, player: &str, guess: &str, error: &GameError) {
        display_rejection(player, guess, error);
    }

    fn display_scores(&mut self, scores: &Scoreboard) {
        display_scores(scores);
    }

    fn display_game_complete(&mut self) {
        display_game_complete();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn submit(player: &str, guess: &str) -> Option<UserAction> {
        Some(UserAction::Submit {
            player: player.to_string(),
            guess: guess.to_string(),
        })
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["word-guess-game"]);
        assert_eq!(cli.words, vec!["apple", "grape", "melon"]);
        assert_eq!(cli.vocabulary_path, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.demo);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::parse_from([
            "word-guess-game",
            "-w",
            "crane,slate",
            "-i",
            "words.txt",
            "--seed",
            "42",
            "--demo",
            "-vv",
        ]);
        assert_eq!(cli.words, vec!["crane", "slate"]);
        assert_eq!(cli.vocabulary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.demo);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_cli_lowercases_secret_words() {
        let cli = Cli::parse_from(["word-guess-game", "-w", "APPLE,Grape, melon"]);
        assert_eq!(cli.words, vec!["apple", "grape", "melon"]);
    }

    #[test]
    fn test_uppercase_words_are_still_winnable() {
        let cli = Cli::parse_from(["word-guess-game", "-w", "APPLE,GRAPE,MELON", "-s", "5"]);
        let mut game = build_game(&cli).unwrap();
        let mut interface = CliInterface::new(Cursor::new("P1 APPLE\nP1 GRAPE\nP1 MELON\n"));

        let summary = crate::game_state::game_loop(&mut game, &mut interface);

        assert!(summary.completed);
        assert_eq!(game.game_strings(), vec!["apple", "grape", "melon"]);
        assert_eq!(game.score_of("P1"), Some(30));
    }

    #[test]
    fn test_demo_ignores_custom_words() {
        let cli = Cli::parse_from(["word-guess-game", "--demo", "-w", "crane,slate"]);
        assert_eq!(cli.secret_words(), vec!["apple", "grape", "melon"]);

        let game = build_game(&cli).unwrap();
        assert_eq!(game.word_count(), 3);
    }

    #[test]
    fn test_secret_words_without_demo() {
        let cli = Cli::parse_from(["word-guess-game", "-w", "crane,slate"]);
        assert_eq!(cli.secret_words(), vec!["crane", "slate"]);
    }

    #[test]
    fn test_build_game_reports_missing_vocabulary() {
        let path = std::env::temp_dir().join("word_guess_game_cli_missing_vocab.txt");
        let _ = std::fs::remove_file(&path);
        let cli = Cli::parse_from([
            "word-guess-game".to_string(),
            "-i".to_string(),
            path.to_string_lossy().into_owned(),
        ]);
        let err = build_game(&cli).unwrap_err();
        assert!(matches!(err, StartupError::Vocabulary(_)));
        assert!(err.to_string().starts_with("failed to load vocabulary"));
    }

    #[test]
    fn test_build_game_reports_bad_words() {
        let cli = Cli::parse_from(["word-guess-game", "-w", "apple,kiwi"]);
        let err = build_game(&cli).unwrap_err();
        assert!(matches!(err, StartupError::Game(GameError::InvalidInput(_))));
        assert!(err.to_string().starts_with("cannot start game"));
    }

    #[test]
    fn test_parse_action_submission() {
        assert_eq!(parse_action("Player1 apple"), submit("Player1", "apple"));
        assert_eq!(parse_action("  Player1   APPLE  \n"), submit("Player1", "apple"));
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("exit"), Some(UserAction::Exit));
        assert_eq!(parse_action("QUIT\n"), Some(UserAction::Exit));
        assert_eq!(parse_action(" scores "), Some(UserAction::ShowScores));
    }

    #[test]
    fn test_parse_action_invalid() {
        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("apple"), None);
        assert_eq!(parse_action("Player1 apple grape"), None);
    }

    #[test]
    fn test_read_action_valid_line() {
        let mut reader = Cursor::new("Player2 grape\n");
        assert_eq!(read_action(&mut reader), submit("Player2", "grape"));
    }

    #[test]
    fn test_read_action_eof_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_action(&mut reader), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_invalid_line() {
        let mut reader = Cursor::new("just-one-word\n");
        assert_eq!(read_action(&mut reader), None);
    }

    #[test]
    fn test_demo_script_parses() {
        let actions: Vec<Option<UserAction>> = DEMO_SCRIPT.lines().map(parse_action).collect();
        assert_eq!(
            actions,
            vec![
                submit("Player1", "ample"),
                submit("Player2", "grape"),
                submit("Player3", "wrong"),
            ]
        );
    }

    #[test]
    fn test_cli_interface_reads_in_order() {
        let mut interface = CliInterface::new(Cursor::new("Player1 apple\nscores\nexit\n"));
        assert_eq!(interface.read_action(), submit("Player1", "apple"));
        assert_eq!(interface.read_action(), Some(UserAction::ShowScores));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
