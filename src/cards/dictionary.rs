use rand::seq::SliceRandom;

/// Draws on every 5th word of the shuffled list. The source list groups
/// related words together, so a stride keeps near-duplicates off one board.
pub const SKIP: usize = 5;
/// Size of the bundled word list.
pub const LEXICON: usize = 400;

/// Word source for one game. The cursor only ever moves forward, so no two
/// draws within a game return the same word.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    cursor: usize,
}

impl From<Vec<String>> for Dictionary {
    fn from(words: Vec<String>) -> Self {
        Self { words, cursor: 0 }
    }
}

impl Dictionary {
    /// Read the word list from disk, one word per line. A missing or
    /// unreadable file is logged and leaves the dictionary empty.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from(
                text.lines()
                    .map(|line| line.trim_end().to_string())
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<String>>(),
            ),
            Err(e) => {
                log::warn!("word list unavailable at {} ({})", path, e);
                Self::default()
            }
        }
    }

    pub fn shuffle(&mut self) {
        self.words.shuffle(&mut rand::rng());
    }

    /// The word under the cursor, advancing the cursor by the stride.
    /// Returns "" once the list is empty or exhausted.
    pub fn next_word(&mut self) -> String {
        match self.words.get(self.cursor) {
            Some(word) => {
                self.cursor += SKIP;
                word.clone()
            }
            None => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
