pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod dictionary;
pub use dictionary::*;

pub mod identity;
pub use identity::*;

pub mod team;
pub use team::*;

/// Number of cards on the board.
pub const N_CARDS: usize = 25;
/// Agents dealt to the team that moves first.
pub const N_AGENTS_FIRST: usize = 9;
/// Agents dealt to the team that moves second.
pub const N_AGENTS_SECOND: usize = 8;
/// Neutral bystander cards.
pub const N_NEUTRAL: usize = 7;
/// There is exactly one assassin.
pub const N_ASSASSIN: usize = 1;
