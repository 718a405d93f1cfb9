use super::hint::Hint;
use crate::cards::team::Team;

/// Per-team spymaster state: the standing hint and the guess budget it
/// bought. The budget stored is the count the spymaster declared; the
/// effective allowance is one more (the bonus guess), so ::remaining()
/// is the only number ever displayed or compared to zero.
#[derive(Debug, Clone)]
pub struct Spymaster {
    team: Team,
    hint: String,
    guesses: i32,
}

impl Spymaster {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            hint: String::new(),
            guesses: 0,
        }
    }
    pub fn restore(team: Team, hint: String, guesses: i32) -> Self {
        Self { team, hint, guesses }
    }

    pub fn team(&self) -> Team {
        self.team
    }
    pub fn hint(&self) -> &str {
        &self.hint
    }
    pub fn guesses(&self) -> i32 {
        self.guesses
    }
    /// stated count plus the bonus guess
    pub fn remaining(&self) -> i32 {
        self.guesses + 1
    }

    pub fn set_hint(&mut self, hint: &Hint) {
        self.hint = hint.clue.clone();
        self.guesses = hint.count;
    }

    /// spend one guess. callers must not decrement once ::remaining()
    /// reaches zero; this is not checked here.
    pub fn decrement(&mut self) {
        self.guesses -= 1;
    }
}
