/// A spymaster's clue: one word and a guess count, entered as
/// `<clue> / <count>`. The count is the number stated to the operatives;
/// the table rule grants them one bonus guess on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub clue: String,
    pub count: i32,
}

impl TryFrom<&str> for Hint {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (clue, count) = s.split_once('/').ok_or("missing / delimiter")?;
        let clue = clue.strip_suffix(' ').unwrap_or(clue);
        if clue.is_empty() {
            return Err("empty clue");
        }
        if clue.contains(' ') {
            return Err("clue must be a single word");
        }
        let digits = count
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>();
        let count = digits.parse::<i32>().map_err(|_| "guess count must be a non-negative number")?;
        Ok(Self {
            clue: clue.to_string(),
            count,
        })
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.clue, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_form() {
        let hint = Hint::try_from("ocean / 3").unwrap();
        assert!(hint.clue == "ocean");
        assert!(hint.count == 3);
    }

    #[test]
    fn compact_form() {
        let hint = Hint::try_from("ocean/3").unwrap();
        assert!(hint.clue == "ocean");
        assert!(hint.count == 3);
    }

    #[test]
    fn zero_is_legal() {
        assert!(Hint::try_from("stall/0").unwrap().count == 0);
    }

    #[test]
    fn multi_word_clue_rejected() {
        assert!(Hint::try_from("two words / 3").is_err());
    }

    #[test]
    fn negative_count_rejected() {
        assert!(Hint::try_from("ocean / -1").is_err());
    }

    #[test]
    fn missing_delimiter_rejected() {
        assert!(Hint::try_from("ocean").is_err());
    }

    #[test]
    fn missing_count_rejected() {
        assert!(Hint::try_from("ocean /").is_err());
        assert!(Hint::try_from("/3").is_err());
    }
}
