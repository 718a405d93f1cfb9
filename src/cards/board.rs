use super::card::Card;
use super::dictionary::Dictionary;
use super::identity::Identity;
use super::team::Team;
use crate::play::role::Role;
use rand::seq::SliceRandom;

/// The 5x5 grid of word cards plus the turn bookkeeping that lives with it:
/// which team started, whose turn it is, and which role is acting.
///
/// The starting team is dealt 9 agents, the other team 8; with 7 neutral
/// cards and the single assassin that makes 25.
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    starting: Team,
    current: Team,
    role: Role,
    n_red: usize,
    n_blue: usize,
}

impl Board {
    pub fn new(starting: Team) -> Self {
        Self {
            cards: Vec::with_capacity(super::N_CARDS),
            starting,
            current: starting,
            role: Role::Spymaster,
            n_red: match starting {
                Team::Red => super::N_AGENTS_FIRST,
                Team::Blue => super::N_AGENTS_SECOND,
            },
            n_blue: match starting {
                Team::Blue => super::N_AGENTS_FIRST,
                Team::Red => super::N_AGENTS_SECOND,
            },
        }
    }

    /// rebuild the bookkeeping verbatim from a saved game; cards are pushed
    /// back afterwards via ::restore()
    pub fn reload(starting: Team, current: Team, role: Role, n_red: usize, n_blue: usize) -> Self {
        Self {
            cards: Vec::with_capacity(super::N_CARDS),
            starting,
            current,
            role,
            n_red,
            n_blue,
        }
    }
    pub fn restore(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// draw the full quota of one identity from the dictionary and append
    /// the cards face down
    pub fn deal(&mut self, identity: Identity, dictionary: &mut Dictionary) {
        let quota = match identity {
            Identity::Red => self.n_red,
            Identity::Blue => self.n_blue,
            Identity::Neutral => super::N_NEUTRAL,
            Identity::Assassin => super::N_ASSASSIN,
        };
        for _ in 0..quota {
            let card = Card::new(dictionary.next_word(), identity);
            log::debug!("dealt a {:?} card ({})", identity, card.word());
            self.cards.push(card);
        }
    }

    /// randomly permute the grid in place
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// assign 1-based positions in current order. called once, after the
    /// shuffle, and never again.
    pub fn index(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.set_index(i + 1);
        }
    }

    /// face-down cards of this identity. drives both the score complement
    /// and the win check.
    pub fn remaining(&self, identity: Identity) -> usize {
        self.cards
            .iter()
            .filter(|c| c.identity() == identity)
            .filter(|c| !c.is_revealed())
            .count()
    }

    /// 1-based lookup
    pub fn card(&self, position: usize) -> Option<&Card> {
        position.checked_sub(1).and_then(|i| self.cards.get(i))
    }
    pub fn card_mut(&mut self, position: usize) -> Option<&mut Card> {
        position.checked_sub(1).and_then(|i| self.cards.get_mut(i))
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn starting(&self) -> Team {
        self.starting
    }
    pub fn current(&self) -> Team {
        self.current
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn n_red(&self) -> usize {
        self.n_red
    }
    pub fn n_blue(&self) -> usize {
        self.n_blue
    }

    pub fn set_current(&mut self, team: Team) {
        self.current = team;
    }
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}
