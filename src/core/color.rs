//! The two sides of the game.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Cell;
use crate::error::ParseColorError;

/// A piece color. Every piece on the board is one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Both colors, Red first.
    pub const BOTH: [Color; 2] = [Color::Red, Color::Yellow];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Cell value occupied by a piece of this color.
    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Color::Red => Cell::Red,
            Color::Yellow => Cell::Yellow,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `red`/`r` and `yellow`/`y`, ignoring case.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "y" | "yellow" => Ok(Color::Yellow),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}
