use crate::cards::team::Team;

/// Per-team operative state. The score counts agents revealed for this team,
/// however they came to be revealed.
#[derive(Debug, Clone, Copy)]
pub struct Operative {
    team: Team,
    score: i32,
}

impl Operative {
    pub fn new(team: Team) -> Self {
        Self { team, score: 0 }
    }
    pub fn restore(team: Team, score: i32) -> Self {
        Self { team, score }
    }

    pub fn team(&self) -> Team {
        self.team
    }
    pub fn score(&self) -> i32 {
        self.score
    }
    pub fn score_point(&mut self) {
        self.score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_accumulate() {
        let mut operative = Operative::new(Team::Red);
        assert!(operative.score() == 0);
        operative.score_point();
        operative.score_point();
        assert!(operative.score() == 2);
        assert!(operative.team() == Team::Red);
    }
}
