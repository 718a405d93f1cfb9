use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::identity::Identity;
use crate::cards::team::Team;
use crate::play::game::Game;
use crate::play::operative::Operative;
use crate::play::role::Role;
use crate::play::spymaster::Spymaster;
use serde::Deserialize;
use serde::Serialize;

/// hidden cards carry this in place of a visible identity
const HIDDEN: &str = "?";

/// The flat save-file record: board bookkeeping, the 25 cards, and both
/// teams' spymaster and operative state merged into one JSON object. Every
/// field is required on read; a snapshot missing any of them fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub starting_team: Team,
    pub current_team: Team,
    pub current_player: Role,
    pub num_red_cards: usize,
    pub num_blue_cards: usize,
    pub cards: Vec<CardRecord>,
    pub red_spymaster_team_name: Team,
    pub red_spymaster_hint: String,
    pub red_spymaster_guesses: i32,
    pub blue_spymaster_team_name: Team,
    pub blue_spymaster_hint: String,
    pub blue_spymaster_guesses: i32,
    pub red_operative_team_name: Team,
    pub red_operative_score: i32,
    pub blue_operative_team_name: Team,
    pub blue_operative_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub word: String,
    pub team: Identity,
    pub visible_team: String,
    pub index: usize,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            word: card.word().to_string(),
            team: card.identity(),
            visible_team: match card.revealed() {
                Some(identity) => identity.name().to_string(),
                None => HIDDEN.to_string(),
            },
            index: card.index(),
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = anyhow::Error;
    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let revealed = match record.visible_team.as_str() {
            HIDDEN => None,
            name => Some(Identity::try_from(name).map_err(|e| anyhow::anyhow!(e))?),
        };
        Ok(Card::restore(record.word, record.team, revealed, record.index))
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        let board = game.board();
        Self {
            starting_team: board.starting(),
            current_team: board.current(),
            current_player: board.role(),
            num_red_cards: board.n_red(),
            num_blue_cards: board.n_blue(),
            cards: board.cards().iter().map(CardRecord::from).collect(),
            red_spymaster_team_name: Team::Red,
            red_spymaster_hint: game.spymaster(Team::Red).hint().to_string(),
            red_spymaster_guesses: game.spymaster(Team::Red).guesses(),
            blue_spymaster_team_name: Team::Blue,
            blue_spymaster_hint: game.spymaster(Team::Blue).hint().to_string(),
            blue_spymaster_guesses: game.spymaster(Team::Blue).guesses(),
            red_operative_team_name: Team::Red,
            red_operative_score: game.score(Team::Red),
            blue_operative_team_name: Team::Blue,
            blue_operative_score: game.score(Team::Blue),
        }
    }
}

impl TryFrom<Snapshot> for Game {
    type Error = anyhow::Error;
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let mut board = Board::reload(
            snapshot.starting_team,
            snapshot.current_team,
            snapshot.current_player,
            snapshot.num_red_cards,
            snapshot.num_blue_cards,
        );
        for record in snapshot.cards {
            board.restore(Card::try_from(record)?);
        }
        Ok(Game::assemble(
            board,
            Spymaster::restore(
                snapshot.red_spymaster_team_name,
                snapshot.red_spymaster_hint,
                snapshot.red_spymaster_guesses,
            ),
            Spymaster::restore(
                snapshot.blue_spymaster_team_name,
                snapshot.blue_spymaster_hint,
                snapshot.blue_spymaster_guesses,
            ),
            Operative::restore(snapshot.red_operative_team_name, snapshot.red_operative_score),
            Operative::restore(snapshot.blue_operative_team_name, snapshot.blue_operative_score),
        ))
    }
}

impl Snapshot {
    /// Write the snapshot to disk. Failure leaves the in-memory game
    /// untouched; the caller reports the error and plays on.
    pub fn write(&self, path: &str) -> anyhow::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("saved game state to {}", path);
        Ok(())
    }

    /// Read a snapshot from disk. Failure loads nothing.
    pub fn read(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str::<Self>(&text)?;
        log::info!("loaded game state from {}", path);
        Ok(snapshot)
    }
}
