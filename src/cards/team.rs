use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
    /// coin flip for which team moves first
    pub fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..2) {
            0 => Self::Red,
            _ => Self::Blue,
        }
    }
}

impl TryFrom<&str> for Team {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "RED" => Ok(Self::Red),
            "BLUE" => Ok(Self::Blue),
            _ => Err("invalid team name"),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "{}", "RED".red()),
            Self::Blue => write!(f, "{}", "BLUE".blue()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponents() {
        assert!(Team::Red.opponent() == Team::Blue);
        assert!(Team::Blue.opponent() == Team::Red);
    }

    #[test]
    fn names() {
        assert!(Team::try_from("RED") == Ok(Team::Red));
        assert!(Team::try_from("blue") == Ok(Team::Blue));
        assert!(Team::try_from("GREEN").is_err());
    }
}
