//! The guessing game itself.
//!
//! A game holds a handful of secret words of the same length. Each word
//! starts with a single visible letter. Players submit guesses from the
//! vocabulary; every guess is checked against each unsolved word in turn:
//!
//! - a guess equal to the word solves it outright for [`EXACT_MATCH_BONUS`]
//!   points and ends the scan, replacing anything earned earlier in the
//!   same call;
//! - a guess that agrees with every letter already showing uncovers each
//!   further position where it matches, one point per letter;
//! - any other guess leaves the word alone.
//!
//! Solved words are skipped and never change again.

use crate::error::{GameError, InputError, SubmissionError};
use crate::picker::{RandomPicker, RevealPicker};
use crate::scoreboard::Scoreboard;
use crate::vocabulary::Vocabulary;
use crate::{debug_log, info_log};

pub const EXACT_MATCH_BONUS: u32 = 10;

/// Shown in place of letters nobody has uncovered yet.
pub const PLACEHOLDER: char = '*';

/// Progress of a single secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    /// Only the starting letter is known.
    Masked,
    PartiallyRevealed,
    /// Terminal.
    FullyRevealed,
}

#[derive(Debug, Clone)]
struct SecretWord {
    word: String,
    letters: Vec<char>,
    revealed: Vec<Option<char>>,
}

impl SecretWord {
    fn new(word: String, start: usize) -> Self {
        let letters: Vec<char> = word.chars().collect();
        let mut revealed = vec![None; letters.len()];
        revealed[start] = Some(letters[start]);
        Self {
            word,
            letters,
            revealed,
        }
    }

    fn is_solved(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    fn known_letters(&self) -> usize {
        self.revealed.iter().filter(|c| c.is_some()).count()
    }

    fn state(&self) -> WordState {
        match self.known_letters() {
            n if n == self.letters.len() => WordState::FullyRevealed,
            0 | 1 => WordState::Masked,
            _ => WordState::PartiallyRevealed,
        }
    }

    /// A guess is only useful if it agrees with everything already on show.
    fn agrees_with(&self, guess: &[char]) -> bool {
        self.revealed
            .iter()
            .zip(guess)
            .all(|(shown, g)| shown.is_none_or(|c| c == *g))
    }

    fn reveal_matches(&mut self, guess: &[char]) -> u32 {
        let mut uncovered = 0;
        for ((slot, &secret), &g) in self.revealed.iter_mut().zip(&self.letters).zip(guess) {
            if slot.is_none() && secret == g {
                *slot = Some(secret);
                uncovered += 1;
            }
        }
        uncovered
    }

    fn reveal_all(&mut self) {
        for (slot, &secret) in self.revealed.iter_mut().zip(&self.letters) {
            *slot = Some(secret);
        }
    }

    fn render(&self) -> String {
        self.revealed
            .iter()
            .map(|c| c.unwrap_or(PLACEHOLDER))
            .collect()
    }
}

/// One round of the game: secret words, what has been uncovered so far,
/// and who earned what.
///
/// `submit_guess` takes `&mut self`; callers sharing a game between
/// threads must wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct GuessGame<V> {
    words: Vec<SecretWord>,
    word_length: usize,
    vocabulary: V,
    scores: Scoreboard,
}

impl<V: Vocabulary> GuessGame<V> {
    /// Starts a game whose opening letters are chosen at random.
    pub fn new<I, S>(words: I, vocabulary: V) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_picker(words, vocabulary, &mut RandomPicker::from_entropy())
    }

    /// Starts a game, asking `picker` which letter of each word to show.
    ///
    /// Picks past the end of a word are clamped to its last letter.
    pub fn with_picker<I, S, P>(words: I, vocabulary: V, picker: &mut P) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        P: RevealPicker + ?Sized,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let word_length = validate_words(&words)?;

        let words: Vec<SecretWord> = words
            .into_iter()
            .map(|word| {
                let start = picker.pick(word_length).min(word_length - 1);
                SecretWord::new(word, start)
            })
            .collect();

        info_log!(
            "New game with {} words of length {}",
            words.len(),
            word_length
        );

        Ok(Self {
            words,
            word_length,
            vocabulary,
            scores: Scoreboard::new(),
        })
    }

    /// Scores `submission` for `player` and uncovers whatever it earns.
    ///
    /// The vocabulary is consulted before the length; a rejected guess
    /// leaves the board and the scores exactly as they were.
    pub fn submit_guess(&mut self, player: &str, submission: &str) -> Result<u32, GameError> {
        if !self.vocabulary.exists(submission) {
            return Err(SubmissionError::UnknownWord(submission.to_string()).into());
        }

        let guess: Vec<char> = submission.chars().collect();
        if guess.len() != self.word_length {
            return Err(SubmissionError::LengthMismatch {
                expected: self.word_length,
                found: guess.len(),
            }
            .into());
        }

        let mut round_score = 0;
        for secret in &mut self.words {
            if secret.is_solved() {
                continue;
            }

            if secret.word == submission {
                secret.reveal_all();
                info_log!("{} solved '{}'", player, submission);
                round_score = EXACT_MATCH_BONUS;
                break;
            }

            if secret.agrees_with(&guess) {
                let uncovered = secret.reveal_matches(&guess);
                debug_log!(
                    "'{}' uncovered {} letters: {}",
                    submission,
                    uncovered,
                    secret.render()
                );
                round_score += uncovered;
            }
        }

        self.scores.award(player, round_score);
        Ok(round_score)
    }

    /// Current board, one string per secret word, in the original order.
    pub fn game_strings(&self) -> Vec<String> {
        self.words.iter().map(SecretWord::render).collect()
    }

    pub fn is_game_complete(&self) -> bool {
        self.words.iter().all(SecretWord::is_solved)
    }

    pub fn player_scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn score_of(&self, player: &str) -> Option<u32> {
        self.scores.get(player)
    }

    pub fn word_states(&self) -> Vec<WordState> {
        self.words.iter().map(SecretWord::state).collect()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Returns the shared length of `words`.
fn validate_words(words: &[String]) -> Result<usize, InputError> {
    let first = words.first().ok_or(InputError::NoWords)?;
    let expected = first.chars().count();
    if expected == 0 {
        return Err(InputError::EmptyWord);
    }

    for word in words {
        let found = word.chars().count();
        if found != expected {
            return Err(InputError::LengthMismatch {
                expected,
                word: word.clone(),
                found,
            });
        }
    }
    Ok(expected)
}
