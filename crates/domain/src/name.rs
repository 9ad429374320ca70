use derive_more::{AsRef, Display};

/// An exercise name.
///
/// Names entered by the user are trimmed and validated by [`Name::new`]. Names
/// read back from storage are taken as they were written.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 100;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > Self::MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn from_stored(name: String) -> Self {
        Name(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact comparison.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.0.to_lowercase() == name.to_lowercase()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 100 characters or fewer ({0} > 100)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bench Press", Ok(Name("Bench Press".to_string())))]
    #[case("  Squat  ", Ok(Name("Squat".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(&"A".repeat(101), Err(NameError::TooLong(101)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("")]
    #[case("  Squat  ")]
    #[case(&"A".repeat(120))]
    fn test_name_from_stored(#[case] name: &str) {
        assert_eq!(Name::from_stored(name.to_string()).as_str(), name);
    }

    #[rstest]
    #[case("bench press", true)]
    #[case("BENCH PRESS", true)]
    #[case("Bench Press", true)]
    #[case("bench", false)]
    #[case("bench press ", false)]
    fn test_name_matches(#[case] other: &str, #[case] expected: bool) {
        assert_eq!(Name::new("Bench Press").unwrap().matches(other), expected);
    }
}
