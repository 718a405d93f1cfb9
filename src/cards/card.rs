use super::identity::Identity;

/// A single word card. Its true identity is fixed at deal time; what the
/// operatives can see starts hidden and is revealed at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    word: String,
    identity: Identity,
    revealed: Option<Identity>,
    index: usize,
}

impl Card {
    pub fn new(word: String, identity: Identity) -> Self {
        Self {
            word,
            identity,
            revealed: None,
            index: 0,
        }
    }
    /// reconstruct a card verbatim from a saved game
    pub fn restore(word: String, identity: Identity, revealed: Option<Identity>, index: usize) -> Self {
        Self {
            word,
            identity,
            revealed,
            index,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }
    pub fn identity(&self) -> Identity {
        self.identity
    }
    pub fn revealed(&self) -> Option<Identity> {
        self.revealed
    }
    pub fn is_revealed(&self) -> bool {
        self.revealed.is_some()
    }
    /// 1-based position on the board, 0 until the board assigns it
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// turn the card face up. irreversible: the visible identity always
    /// equals the true identity once set.
    pub fn reveal(&mut self) -> Identity {
        self.revealed = Some(self.identity);
        self.identity
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.revealed {
            Some(identity) => write!(f, "{} ({})", self.word, identity),
            None => write!(f, "{} (?)", self.word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let card = Card::new("OCEAN".into(), Identity::Red);
        assert!(card.revealed() == None);
        assert!(!card.is_revealed());
        assert!(card.index() == 0);
    }

    #[test]
    fn reveal_matches_identity() {
        let mut card = Card::new("OCEAN".into(), Identity::Assassin);
        assert!(card.reveal() == Identity::Assassin);
        assert!(card.revealed() == Some(Identity::Assassin));
        card.reveal();
        assert!(card.revealed() == Some(Identity::Assassin));
    }
}
