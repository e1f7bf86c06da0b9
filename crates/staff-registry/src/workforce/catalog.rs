use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of roles an employee can hold, ordered from most to least senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Prezes,
    Wiceprezes,
    Manager,
    Programista,
    Stazysta,
}

/// Immutable catalog attributes attached to a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionProfile {
    pub position: Position,
    pub identifier: &'static str,
    pub label: &'static str,
    pub base_compensation: f64,
    pub hierarchy_rank: u8,
}

static CATALOG: [PositionProfile; 5] = [
    PositionProfile {
        position: Position::Prezes,
        identifier: "PREZES",
        label: "President",
        base_compensation: 25_000.0,
        hierarchy_rank: 1,
    },
    PositionProfile {
        position: Position::Wiceprezes,
        identifier: "WICEPREZES",
        label: "Vice President",
        base_compensation: 18_000.0,
        hierarchy_rank: 2,
    },
    PositionProfile {
        position: Position::Manager,
        identifier: "MANAGER",
        label: "Manager",
        base_compensation: 12_000.0,
        hierarchy_rank: 3,
    },
    PositionProfile {
        position: Position::Programista,
        identifier: "PROGRAMISTA",
        label: "Programmer",
        base_compensation: 8_000.0,
        hierarchy_rank: 4,
    },
    PositionProfile {
        position: Position::Stazysta,
        identifier: "STAZYSTA",
        label: "Intern",
        base_compensation: 3_000.0,
        hierarchy_rank: 5,
    },
];

impl Position {
    /// Position assigned to records synced from the remote directory.
    pub const fn directory_default() -> Self {
        Self::Programista
    }

    pub fn profile(self) -> &'static PositionProfile {
        &CATALOG[self as usize]
    }

    pub fn identifier(self) -> &'static str {
        self.profile().identifier
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    pub fn base_compensation(self) -> f64 {
        self.profile().base_compensation
    }

    pub fn hierarchy_rank(self) -> u8 {
        self.profile().hierarchy_rank
    }

    /// Case-insensitive lookup against the catalog identifiers.
    pub fn from_identifier(value: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|profile| profile.identifier.eq_ignore_ascii_case(value))
            .map(|profile| profile.position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(value).ok_or_else(|| UnknownPosition(value.to_string()))
    }
}
