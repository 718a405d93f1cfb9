use super::role::Role;
use crate::cards::team::Team;

/// Whose input the game is waiting on, or the winner once play has ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Ply {
    Choice(Team, Role),
    Terminal(Team),
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(team, role) => write!(f, "{} {}", team, role),
            Self::Terminal(team) => write!(f, "{} WINS", team),
        }
    }
}
