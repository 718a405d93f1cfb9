use super::team::Team;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// The true allegiance of a card. Agents belong to a team; the neutral
/// bystanders and the assassin belong to neither.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Identity {
    Red,
    Blue,
    Neutral,
    Assassin,
}

impl Identity {
    /// uncolored name, as written in save files
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Blue => "BLUE",
            Self::Neutral => "NEUTRAL",
            Self::Assassin => "ASSASSIN",
        }
    }
    pub const fn team(&self) -> Option<Team> {
        match self {
            Self::Red => Some(Team::Red),
            Self::Blue => Some(Team::Blue),
            Self::Neutral => None,
            Self::Assassin => None,
        }
    }
}

impl From<Team> for Identity {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => Self::Red,
            Team::Blue => Self::Blue,
        }
    }
}

impl TryFrom<&str> for Identity {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "RED" => Ok(Self::Red),
            "BLUE" => Ok(Self::Blue),
            "NEUTRAL" => Ok(Self::Neutral),
            "ASSASSIN" => Ok(Self::Assassin),
            _ => Err("invalid card identity"),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "{}", "RED".red()),
            Self::Blue => write!(f, "{}", "BLUE".blue()),
            Self::Neutral => write!(f, "{}", "NEUTRAL".dimmed()),
            Self::Assassin => write!(f, "{}", "ASSASSIN".black().on_white()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agents_have_teams() {
        assert!(Identity::Red.team() == Some(Team::Red));
        assert!(Identity::Blue.team() == Some(Team::Blue));
        assert!(Identity::Neutral.team() == None);
        assert!(Identity::Assassin.team() == None);
    }
}
