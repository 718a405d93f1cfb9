use super::hint::Hint;
use super::operative::Operative;
use super::ply::Ply;
use super::role::Role;
use super::spymaster::Spymaster;
use crate::cards::board::Board;
use crate::cards::dictionary::Dictionary;
use crate::cards::identity::Identity;
use crate::cards::team::Team;

/// The full state of one game and the rules for advancing it.
///
/// Play alternates through (team, role) pairs starting from the starting
/// team's spymaster: a valid hint hands the turn to that team's operatives,
/// and each guess either keeps them guessing or hands the board to the other
/// team's spymaster. The game is terminal once ::winner() is set; callers
/// stop feeding it input at that point.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    red_spymaster: Spymaster,
    blue_spymaster: Spymaster,
    red_operative: Operative,
    blue_operative: Operative,
    winner: Option<Team>,
}

impl Game {
    /// deal a fresh game from the bundled word list
    pub fn new(starting: Team) -> Self {
        let mut dictionary = Dictionary::load(crate::DICT_PATH);
        dictionary.shuffle();
        Self::with(starting, dictionary)
    }

    /// deal a fresh game from an already-shuffled dictionary
    pub fn with(starting: Team, mut dictionary: Dictionary) -> Self {
        let mut board = Board::new(starting);
        board.deal(Identity::Red, &mut dictionary);
        board.deal(Identity::Blue, &mut dictionary);
        board.deal(Identity::Neutral, &mut dictionary);
        board.deal(Identity::Assassin, &mut dictionary);
        board.shuffle();
        board.index();
        Self::assemble(
            board,
            Spymaster::new(Team::Red),
            Spymaster::new(Team::Blue),
            Operative::new(Team::Red),
            Operative::new(Team::Blue),
        )
    }

    /// stitch restored pieces back into a game (used on load)
    pub fn assemble(
        board: Board,
        red_spymaster: Spymaster,
        blue_spymaster: Spymaster,
        red_operative: Operative,
        blue_operative: Operative,
    ) -> Self {
        Self {
            board,
            red_spymaster,
            blue_spymaster,
            red_operative,
            blue_operative,
            winner: None,
        }
    }

    //
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }
    pub fn turn(&self) -> Ply {
        match self.winner {
            Some(team) => Ply::Terminal(team),
            None => Ply::Choice(self.board.current(), self.board.role()),
        }
    }
    pub fn spymaster(&self, team: Team) -> &Spymaster {
        match team {
            Team::Red => &self.red_spymaster,
            Team::Blue => &self.blue_spymaster,
        }
    }
    pub fn operative(&self, team: Team) -> &Operative {
        match team {
            Team::Red => &self.red_operative,
            Team::Blue => &self.blue_operative,
        }
    }
    pub fn score(&self, team: Team) -> i32 {
        self.operative(team).score()
    }
    /// guesses left for the team at the table, bonus guess included
    pub fn guesses_remaining(&self) -> i32 {
        self.spymaster(self.board.current()).remaining()
    }

    /// Hint submission. A well-formed hint is stored on the current team's
    /// spymaster and hands the turn to their operatives; a malformed one
    /// changes nothing and comes back as the Err.
    pub fn hint(&mut self, raw: &str) -> Result<Hint, &'static str> {
        let hint = Hint::try_from(raw)?;
        let team = self.board.current();
        self.spymaster_mut(team).set_hint(&hint);
        self.board.set_role(Role::Operative);
        log::info!("the {:?} spymaster hinted {}", team, hint);
        Ok(hint)
    }

    /// Guess resolution. Validates the selection, turns the card face up,
    /// and advances the turn state by what it turned out to be. Returns the
    /// revealed identity; the table state afterwards is read via ::turn().
    pub fn guess(&mut self, position: usize) -> Result<Identity, &'static str> {
        let card = self
            .board
            .card(position)
            .ok_or("invalid card index")?;
        if card.is_revealed() {
            return Err("this card is already revealed");
        }
        let team = self.board.current();
        let card = self.board.card_mut(position).expect("validated above");
        let identity = card.reveal();
        log::info!("the {:?} team selected a {:?} card ({})", team, identity, card.word());
        match identity {
            Identity::Assassin => self.resolve_assassin(),
            Identity::Neutral => self.next_team(),
            _ if identity.team() == Some(team) => self.resolve_own_agent(team),
            _ => self.resolve_opposing_agent(),
        }
        Ok(identity)
    }

    /// End turn without guessing, forfeiting the rest of the budget.
    pub fn pass(&mut self) {
        self.next_team();
    }

    /// the guessing team loses on the spot; the opponent takes the game
    fn resolve_assassin(&mut self) {
        self.next_team();
        self.crown(self.board.current());
    }

    /// an agent of the guessing team: score it, then either win, keep
    /// guessing on the same hint, or run out of budget
    fn resolve_own_agent(&mut self, team: Team) {
        self.operative_mut(team).score_point();
        if self.board.remaining(Identity::from(team)) == 0 {
            self.crown(team);
            return;
        }
        self.spymaster_mut(team).decrement();
        if self.guesses_remaining() <= 0 {
            self.next_team();
        }
    }

    /// an agent of the other team: they benefit from the mistake, scoring
    /// the reveal and possibly winning outright; the turn passes regardless
    fn resolve_opposing_agent(&mut self) {
        self.next_team();
        let team = self.board.current();
        self.operative_mut(team).score_point();
        if self.board.remaining(Identity::from(team)) == 0 {
            self.crown(team);
        }
    }

    fn next_team(&mut self) {
        self.board.set_current(self.board.current().opponent());
        self.board.set_role(Role::Spymaster);
    }
    fn crown(&mut self, team: Team) {
        log::info!("the {:?} team has won", team);
        self.winner = Some(team);
    }
    fn spymaster_mut(&mut self, team: Team) -> &mut Spymaster {
        match team {
            Team::Red => &mut self.red_spymaster,
            Team::Blue => &mut self.blue_spymaster,
        }
    }
    fn operative_mut(&mut self, team: Team) -> &mut Operative {
        match team {
            Team::Red => &mut self.red_operative,
            Team::Blue => &mut self.blue_operative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::dictionary::LEXICON;

    fn game(starting: Team) -> Game {
        let dictionary =
            Dictionary::from((0..LEXICON).map(|i| format!("WORD{:03}", i)).collect::<Vec<_>>());
        Game::with(starting, dictionary)
    }

    /// 1-based position of some face-down card with this identity
    fn position_of(game: &Game, identity: Identity) -> usize {
        game.board()
            .cards()
            .iter()
            .filter(|c| !c.is_revealed())
            .find(|c| c.identity() == identity)
            .map(|c| c.index())
            .expect("identity still on the board")
    }

    #[test]
    fn opens_with_starting_spymaster() {
        let game = game(Team::Blue);
        assert!(game.turn() == Ply::Choice(Team::Blue, Role::Spymaster));
        assert!(game.winner() == None);
    }

    #[test]
    fn hint_hands_turn_to_operatives() {
        let mut game = game(Team::Red);
        let hint = game.hint("ocean / 3").unwrap();
        assert!(hint.clue == "ocean");
        assert!(game.turn() == Ply::Choice(Team::Red, Role::Operative));
        assert!(game.spymaster(Team::Red).hint() == "ocean");
        assert!(game.guesses_remaining() == 4);
    }

    #[test]
    fn bad_hint_changes_nothing() {
        let mut game = game(Team::Red);
        assert!(game.hint("two words / 3").is_err());
        assert!(game.turn() == Ply::Choice(Team::Red, Role::Spymaster));
        assert!(game.spymaster(Team::Red).hint() == "");
    }

    #[test]
    fn out_of_range_guess_rejected() {
        let mut game = game(Team::Red);
        game.hint("ocean / 3").unwrap();
        assert!(game.guess(0).is_err());
        assert!(game.guess(26).is_err());
        assert!(game.turn() == Ply::Choice(Team::Red, Role::Operative));
    }

    #[test]
    fn revealed_card_rejected() {
        let mut game = game(Team::Red);
        game.hint("ocean / 3").unwrap();
        let position = position_of(&game, Identity::Red);
        game.guess(position).unwrap();
        assert!(game.guess(position).is_err());
    }

    #[test]
    fn correct_guess_scores_and_continues() {
        let mut game = game(Team::Red);
        game.hint("ocean / 2").unwrap();
        let position = position_of(&game, Identity::Red);
        assert!(game.guess(position) == Ok(Identity::Red));
        assert!(game.score(Team::Red) == 1);
        assert!(game.guesses_remaining() == 2);
        assert!(game.turn() == Ply::Choice(Team::Red, Role::Operative));
    }

    #[test]
    fn budget_buys_count_plus_one_guesses() {
        let mut game = game(Team::Red);
        game.hint("ocean / 1").unwrap();
        let first = position_of(&game, Identity::Red);
        game.guess(first).unwrap();
        assert!(game.turn() == Ply::Choice(Team::Red, Role::Operative));
        let second = position_of(&game, Identity::Red);
        game.guess(second).unwrap();
        // stated 1 plus the bonus guess, both spent
        assert!(game.score(Team::Red) == 2);
        assert!(game.turn() == Ply::Choice(Team::Blue, Role::Spymaster));
    }

    #[test]
    fn zero_budget_allows_the_bonus_guess_only() {
        let mut game = game(Team::Red);
        game.hint("stall / 0").unwrap();
        let position = position_of(&game, Identity::Red);
        game.guess(position).unwrap();
        assert!(game.score(Team::Red) == 1);
        assert!(game.turn() == Ply::Choice(Team::Blue, Role::Spymaster));
    }

    #[test]
    fn neutral_passes_the_turn() {
        let mut game = game(Team::Red);
        game.hint("ocean / 3").unwrap();
        let position = position_of(&game, Identity::Neutral);
        assert!(game.guess(position) == Ok(Identity::Neutral));
        assert!(game.score(Team::Red) == 0);
        assert!(game.score(Team::Blue) == 0);
        assert!(game.winner() == None);
        assert!(game.turn() == Ply::Choice(Team::Blue, Role::Spymaster));
    }

    #[test]
    fn wrong_guess_scores_the_opponent() {
        let mut game = game(Team::Red);
        game.hint("ocean / 3").unwrap();
        let position = position_of(&game, Identity::Blue);
        assert!(game.guess(position) == Ok(Identity::Blue));
        assert!(game.score(Team::Blue) == 1);
        assert!(game.score(Team::Red) == 0);
        assert!(game.turn() == Ply::Choice(Team::Blue, Role::Spymaster));
    }

    #[test]
    fn wrong_guess_can_win_for_the_opponent() {
        let mut game = game(Team::Red);
        // burn blue down to one agent across alternating turns
        for _ in 0..7 {
            game.hint("ocean / 0").unwrap();
            let red = position_of(&game, Identity::Red);
            game.guess(red).unwrap(); // red spends its turn
            game.hint("river / 0").unwrap();
            let blue = position_of(&game, Identity::Blue);
            game.guess(blue).unwrap(); // blue reveals one of its own
        }
        assert!(game.board().remaining(Identity::Blue) == 1);
        game.hint("ocean / 0").unwrap();
        let blue = position_of(&game, Identity::Blue);
        game.guess(blue).unwrap(); // red hands blue the last agent
        assert!(game.winner() == Some(Team::Blue));
        assert!(game.turn() == Ply::Terminal(Team::Blue));
    }

    #[test]
    fn assassin_loses_on_the_spot() {
        let mut game = game(Team::Red);
        game.hint("ocean / 3").unwrap();
        let position = position_of(&game, Identity::Assassin);
        assert!(game.guess(position) == Ok(Identity::Assassin));
        assert!(game.winner() == Some(Team::Blue));
        assert!(game.turn() == Ply::Terminal(Team::Blue));
        assert!(game.score(Team::Red) == 0);
        assert!(game.score(Team::Blue) == 0);
    }

    #[test]
    fn nine_agents_win_the_game() {
        let mut game = game(Team::Red);
        for nth in 1..=9 {
            if game.turn() == Ply::Choice(Team::Red, Role::Spymaster) {
                game.hint("ocean / 9").unwrap();
            }
            let position = position_of(&game, Identity::Red);
            game.guess(position).unwrap();
            assert!(game.score(Team::Red) == nth);
        }
        assert!(game.board().remaining(Identity::Red) == 0);
        assert!(game.winner() == Some(Team::Red));
    }

    #[test]
    fn pass_forfeits_the_budget() {
        let mut game = game(Team::Red);
        game.hint("ocean / 5").unwrap();
        game.pass();
        assert!(game.turn() == Ply::Choice(Team::Blue, Role::Spymaster));
        assert!(game.winner() == None);
    }
}
