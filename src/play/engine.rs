use super::game::Game;
use super::ply::Ply;
use super::role::Role;
use crate::cards::card::Card;
use crate::cards::identity::Identity;
use crate::cards::team::Team;
use crate::save::snapshot::Snapshot;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

const COLS: usize = 5;
const CELL: usize = 15;

/// Runs one game at the terminal: the opening new-vs-load prompt, then the
/// per-role menus, until somebody wins or the user quits.
pub struct Engine {
    game: Game,
    save: String,
}

impl Engine {
    /// boot from the opening menu (or straight from the save file)
    pub fn new(save: String, load: bool) -> Self {
        let game = if load { Self::loaded(&save).unwrap_or_else(Self::fresh) } else { Self::menu(&save) };
        Self { game, save }
    }

    pub fn play(&mut self) {
        loop {
            match self.game.turn() {
                Ply::Choice(team, Role::Spymaster) => {
                    if !self.spymaster_turn(team) {
                        break;
                    }
                }
                Ply::Choice(team, Role::Operative) => {
                    if !self.operative_turn(team) {
                        break;
                    }
                }
                Ply::Terminal(team) => {
                    self.conclude(team);
                    break;
                }
            }
        }
        println!("\nThanks for playing!");
    }

    //
    fn menu(save: &str) -> Game {
        loop {
            let choice = Select::new()
                .with_prompt("Select a team to start first")
                .items(&[
                    "Red team starts",
                    "Blue team starts",
                    "Coin flip",
                    "Load from save",
                    "Quit",
                ])
                .default(2)
                .interact()
                .unwrap();
            match choice {
                0 => return Game::new(Team::Red),
                1 => return Game::new(Team::Blue),
                2 => return Game::new(Team::random()),
                3 => match Self::loaded(save) {
                    Some(game) => return game,
                    None => continue,
                },
                _ => std::process::exit(0),
            }
        }
    }
    fn fresh() -> Game {
        Game::new(Team::random())
    }
    fn loaded(save: &str) -> Option<Game> {
        Snapshot::read(save)
            .and_then(Game::try_from)
            .inspect_err(|e| println!("Unable to read from {}: {}", save, e))
            .ok()
    }

    //
    fn spymaster_turn(&mut self, team: Team) -> bool {
        println!("\n[{}] {} to act", team, Role::Spymaster);
        let choice = Select::new()
            .with_prompt("Spymasters can")
            .items(&["Look at key", "Give a hint", "Save game", "Quit"])
            .default(1)
            .interact()
            .unwrap();
        match choice {
            0 => self.render(true),
            1 => self.give_hint(),
            2 => self.save(),
            _ => return self.quit(),
        }
        true
    }

    fn operative_turn(&mut self, team: Team) -> bool {
        println!("\n[{}] {} to act", team, Role::Operative);
        let choice = Select::new()
            .with_prompt("Operatives can")
            .items(&["Look at the board", "Guess a card", "Review the hint", "End turn", "Quit"])
            .default(1)
            .interact()
            .unwrap();
        match choice {
            0 => self.render(false),
            1 => self.guess(),
            2 => self.review_hint(team),
            3 => {
                self.game.pass();
                println!("Switching to the {} team's turn!", self.game.board().current());
            }
            _ => return self.quit(),
        }
        true
    }

    fn give_hint(&mut self) {
        println!("Specify your one-word clue and # of guesses with a single / between, e.g. Clue / 3");
        loop {
            let raw = Input::<String>::new()
                .with_prompt("Hint")
                .interact_text()
                .unwrap();
            match self.game.hint(&raw) {
                Ok(hint) => {
                    println!(
                        "Your hint is: {}. You have {} guesses remaining!",
                        hint.clue,
                        self.game.guesses_remaining()
                    );
                    break;
                }
                Err(e) => println!("Invalid clue ({})...", e),
            }
        }
    }

    fn guess(&mut self) {
        self.render(false);
        let position = Input::<usize>::new()
            .with_prompt("Select a card [1-25]")
            .validate_with(|i: &usize| -> Result<(), &str> {
                match (1..=crate::cards::N_CARDS).contains(i) {
                    true => Ok(()),
                    false => Err("Invalid card index"),
                }
            })
            .interact_text()
            .unwrap();
        match self.game.guess(position) {
            Ok(identity) => {
                println!("You've selected a {} card!", identity);
                if self.game.winner().is_none() {
                    match self.game.turn() {
                        Ply::Choice(_, Role::Operative) => {
                            println!("You have {} guesses remaining!", self.game.guesses_remaining())
                        }
                        _ => println!("Switching to the {} team's turn!", self.game.board().current()),
                    }
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    fn review_hint(&self, team: Team) {
        println!(
            "Your clue is: {}. You have {} guesses remaining!",
            self.game.spymaster(team).hint(),
            self.game.guesses_remaining()
        );
    }

    fn save(&self) {
        match Snapshot::from(&self.game).write(&self.save) {
            Ok(()) => println!("Saved game state to {}", self.save),
            Err(e) => println!("Unable to write to {}: {}", self.save, e),
        }
    }

    fn quit(&self) -> bool {
        let choice = Select::new()
            .with_prompt("Do you want to save before quitting?")
            .items(&["Save game state", "Quit without saving"])
            .default(0)
            .interact()
            .unwrap();
        if choice == 0 {
            self.save();
        }
        false
    }

    fn conclude(&self, winner: Team) {
        self.render(true);
        match self.game.board().remaining(Identity::Assassin) {
            0 => println!("\nThe {} team wins: their rivals found the assassin!", winner),
            _ => println!("\nThe {} team has WON by revealing all their agents!", winner),
        }
    }

    /// the 5x5 grid plus the score banner. the spymaster view (key) colors
    /// every card by its true identity; the operative view only colors what
    /// has been revealed.
    fn render(&self, key: bool) {
        println!(
            "\n~~~~~~~ SCORE ~~~~~~~\n {} - {} // {} - {}\n~~~~~~~~~~~~~~~~~~~~~",
            Team::Red,
            self.game.score(Team::Red),
            Team::Blue,
            self.game.score(Team::Blue),
        );
        for row in self.game.board().cards().chunks(COLS) {
            let words = row.iter().map(|c| self.cell(c, key)).collect::<Vec<_>>();
            let index = row
                .iter()
                .map(|c| format!("{:^width$}", c.index(), width = CELL))
                .collect::<Vec<_>>();
            println!("{}", "-".repeat((CELL + 3) * COLS));
            println!("{}", words.join(" | "));
            println!("{}", index.join(" | "));
        }
        println!("{}", "-".repeat((CELL + 3) * COLS));
    }

    fn cell(&self, card: &Card, key: bool) -> String {
        let word = format!("{:^width$}", card.word(), width = CELL);
        match (card.revealed(), key) {
            (Some(identity), _) => Self::tint(word, identity).to_string(),
            (None, true) => Self::tint(word, card.identity()).underline().to_string(),
            (None, false) => word,
        }
    }

    fn tint(word: String, identity: Identity) -> colored::ColoredString {
        match identity {
            Identity::Red => word.red(),
            Identity::Blue => word.blue(),
            Identity::Neutral => word.dimmed(),
            Identity::Assassin => word.black().on_white(),
        }
    }
}
