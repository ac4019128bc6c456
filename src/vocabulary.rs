use crate::error::VocabularyError;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

const APP_DIR: &str = "word-guess-game";
const WORDLIST_FILE: &str = "wordlist.txt";

/// Answers whether a guess is a real word.
///
/// The game only needs membership, so any closure `Fn(&str) -> bool`
/// works as a stand-in for a full word list.
pub trait Vocabulary {
    fn exists(&self, word: &str) -> bool;
}

impl<F> Vocabulary for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, word: &str) -> bool {
        self(word)
    }
}

impl Vocabulary for HashSet<String> {
    fn exists(&self, word: &str) -> bool {
        self.contains(word)
    }
}

// Borrowed and boxed forms are listed one by one: a generic `&V` impl would
// overlap the closure impl above, since `&F` is itself `Fn`.

impl Vocabulary for &HashSet<String> {
    fn exists(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Vocabulary for &WordList {
    fn exists(&self, word: &str) -> bool {
        (**self).exists(word)
    }
}

impl Vocabulary for Box<dyn Vocabulary + '_> {
    fn exists(&self, word: &str) -> bool {
        (**self).exists(word)
    }
}

/// A word list loaded once and queried by exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().filter_map(|w| normalize(w.as_ref())).collect(),
        }
    }

    /// One word per line. Lines are trimmed and lowercased, blanks dropped.
    pub fn from_str_list(data: &str) -> Self {
        Self::from_words(data.lines())
    }

    pub fn embedded() -> Self {
        Self::from_str_list(EMBEDDED_WORDLIST)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let io_err = |source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(file);
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line.map_err(io_err)?) {
                words.insert(word);
            }
        }

        if words.is_empty() {
            return Err(VocabularyError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Vocabulary for WordList {
    fn exists(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl FromStr for WordList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_list(s))
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// Location of a user-supplied word list, e.g. `~/.config/word-guess-game/wordlist.txt`.
pub fn default_wordlist_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(WORDLIST_FILE))
}

/// Explicit path first, then the user's config dir, then the built-in list.
pub fn load_wordlist(path: Option<&Path>) -> Result<WordList, VocabularyError> {
    if let Some(path) = path {
        return WordList::from_file(path);
    }
    match default_wordlist_path() {
        Some(path) if path.is_file() => WordList::from_file(path),
        _ => Ok(WordList::embedded()),
    }
}
