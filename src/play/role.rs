use serde::Deserialize;
use serde::Serialize;

/// The two seats on each team. The spymaster sees the key and gives hints;
/// the operatives guess cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Spymaster,
    Operative,
}

impl Role {
    pub const fn flip(&self) -> Self {
        match self {
            Self::Spymaster => Self::Operative,
            Self::Operative => Self::Spymaster,
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "SPYMASTER" => Ok(Self::Spymaster),
            "OPERATIVE" => Ok(Self::Operative),
            _ => Err("invalid role name"),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spymaster => write!(f, "SPYMASTER"),
            Self::Operative => write!(f, "OPERATIVE"),
        }
    }
}
