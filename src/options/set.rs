//! Display options
//!
//! Defines the optional response fields a user can choose to display and the
//! set of flags recording that choice.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One optional field of the API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayOption {
    Alphabets,
    Numbers,
    HighestAlphabet,
}

impl DisplayOption {
    /// Every option in presentation order.
    pub const ALL: [DisplayOption; 3] = [
        DisplayOption::Alphabets,
        DisplayOption::Numbers,
        DisplayOption::HighestAlphabet,
    ];

    /// Name of the flag as the form reports it.
    pub fn name(&self) -> &'static str {
        match self {
            DisplayOption::Alphabets => "alphabets",
            DisplayOption::Numbers => "numbers",
            DisplayOption::HighestAlphabet => "highestAlphabet",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayOption::Alphabets => "Alphabets",
            DisplayOption::Numbers => "Numbers",
            DisplayOption::HighestAlphabet => "Highest Alphabet",
        }
    }
}

impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when an option name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown option: {}", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for DisplayOption {
    type Err = UnknownOption;

    /// Accepts the flag name (`highestAlphabet`) and its snake case form
    /// (`highest_alphabet`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "");
        match normalized.as_str() {
            "alphabets" => Ok(DisplayOption::Alphabets),
            "numbers" => Ok(DisplayOption::Numbers),
            "highestalphabet" => Ok(DisplayOption::HighestAlphabet),
            _ => Err(UnknownOption(s.trim().to_string())),
        }
    }
}

/// Boolean display flags chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    alphabets: bool,
    numbers: bool,
    highest_alphabet: bool,
}

impl OptionSet {
    pub fn new(alphabets: bool, numbers: bool, highest_alphabet: bool) -> Self {
        Self {
            alphabets,
            numbers,
            highest_alphabet,
        }
    }

    /// Builds a set with exactly the given options enabled.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DisplayOption>,
    {
        options
            .into_iter()
            .fold(Self::default(), |set, option| set.with(option, true))
    }

    pub fn alphabets(&self) -> bool {
        self.alphabets
    }

    pub fn numbers(&self) -> bool {
        self.numbers
    }

    pub fn highest_alphabet(&self) -> bool {
        self.highest_alphabet
    }

    pub fn is_selected(&self, option: DisplayOption) -> bool {
        match option {
            DisplayOption::Alphabets => self.alphabets,
            DisplayOption::Numbers => self.numbers,
            DisplayOption::HighestAlphabet => self.highest_alphabet,
        }
    }

    /// Returns a copy with one flag set to `checked`.
    pub fn with(mut self, option: DisplayOption, checked: bool) -> Self {
        match option {
            DisplayOption::Alphabets => self.alphabets = checked,
            DisplayOption::Numbers => self.numbers = checked,
            DisplayOption::HighestAlphabet => self.highest_alphabet = checked,
        }
        self
    }

    /// Whether at least one flag is set.
    pub fn any_selected(&self) -> bool {
        self.alphabets || self.numbers || self.highest_alphabet
    }

    /// The enabled options, in presentation order.
    pub fn selected(&self) -> Vec<DisplayOption> {
        DisplayOption::ALL
            .into_iter()
            .filter(|option| self.is_selected(*option))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flag_and_snake_case_names() {
        assert_eq!("numbers".parse(), Ok(DisplayOption::Numbers));
        assert_eq!("Alphabets".parse(), Ok(DisplayOption::Alphabets));
        assert_eq!("highestAlphabet".parse(), Ok(DisplayOption::HighestAlphabet));
        assert_eq!(" highest_alphabet ".parse(), Ok(DisplayOption::HighestAlphabet));
        assert_eq!(
            "vowels".parse::<DisplayOption>(),
            Err(UnknownOption("vowels".into()))
        );
    }

    #[test]
    fn empty_set_has_no_selection() {
        let set = OptionSet::default();
        assert!(!set.any_selected());
        assert!(set.selected().is_empty());
    }

    #[test]
    fn with_toggles_a_single_flag() {
        let set = OptionSet::default().with(DisplayOption::HighestAlphabet, true);
        assert!(set.highest_alphabet());
        assert!(!set.numbers());
        assert!(set.any_selected());

        let set = set.with(DisplayOption::HighestAlphabet, false);
        assert!(!set.any_selected());
    }

    #[test]
    fn from_options_ignores_duplicates() {
        let set = OptionSet::from_options([
            DisplayOption::Numbers,
            DisplayOption::Numbers,
            DisplayOption::Alphabets,
        ]);
        assert_eq!(set, OptionSet::new(true, true, false));
        assert_eq!(
            set.selected(),
            vec![DisplayOption::Alphabets, DisplayOption::Numbers]
        );
    }

    #[test]
    fn serializes_with_form_flag_names() {
        let set = OptionSet::new(false, true, true);
        let json = serde_json::to_value(set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"alphabets": false, "numbers": true, "highestAlphabet": true})
        );
    }
}
