pub mod engine;
pub use engine::*;

pub mod game;
pub use game::*;

pub mod hint;
pub use hint::*;

pub mod operative;
pub use operative::*;

pub mod ply;
pub use ply::*;

pub mod role;
pub use role::*;

pub mod spymaster;
pub use spymaster::*;
