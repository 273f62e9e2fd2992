//! Cell contents.

use serde::{Deserialize, Serialize};

/// Contents of a single cell on the board.
///
/// `Empty` is a legal cell value but never a legal move.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum FieldState {
    /// Cross mark, always moves first.
    #[strum(serialize = "X", serialize = "cross")]
    Cross,
    /// Nought mark.
    #[strum(serialize = "O", serialize = "nought")]
    Nought,
    /// No mark.
    #[default]
    #[strum(serialize = "empty", serialize = "_")]
    Empty,
}

impl FieldState {
    /// Symbol used for this value in the stored 9-symbol board record.
    pub fn symbol(self) -> char {
        match self {
            FieldState::Cross => 'X',
            FieldState::Nought => 'O',
            FieldState::Empty => ' ',
        }
    }

    /// Inverse of [`FieldState::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(FieldState::Cross),
            'O' => Some(FieldState::Nought),
            ' ' => Some(FieldState::Empty),
            _ => None,
        }
    }

    /// True for `Cross` and `Nought`.
    pub fn is_mark(self) -> bool {
        !matches!(self, FieldState::Empty)
    }
}

impl std::fmt::Display for FieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldState::Cross => write!(f, "X"),
            FieldState::Nought => write!(f, "O"),
            FieldState::Empty => write!(f, "empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_are_distinct_and_reversible() {
        for value in FieldState::iter() {
            assert_eq!(FieldState::from_symbol(value.symbol()), Some(value));
        }
        assert_eq!(FieldState::from_symbol('x'), None);
        assert_eq!(FieldState::from_symbol('.'), None);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(FieldState::default(), FieldState::Empty);
        assert!(!FieldState::Empty.is_mark());
        assert!(FieldState::Cross.is_mark());
    }

    #[test]
    fn test_parse_from_text() {
        assert_eq!("x".parse::<FieldState>().ok(), Some(FieldState::Cross));
        assert_eq!("Nought".parse::<FieldState>().ok(), Some(FieldState::Nought));
        assert_eq!("_".parse::<FieldState>().ok(), Some(FieldState::Empty));
        assert!("triangle".parse::<FieldState>().is_err());
    }
}
