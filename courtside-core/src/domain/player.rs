use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::Record;

/// Palette the roster screen draws avatar colors from.
const AVATAR_COLORS: [&str; 6] = [
    "#2563eb", "#16a34a", "#d97706", "#dc2626", "#7c3aed", "#0d9488",
];

/// Membership status shown on the roster screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MembershipStatus {
    Active,
    Inactive,
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipStatus::Active => write!(f, "Active"),
            MembershipStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Contact string, classified by shape when the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Contact {
    Email(String),
    Phone(String),
}

impl Contact {
    /// Anything containing `@` is an email; everything else is a phone number.
    pub fn parse(raw: &str) -> Self {
        if raw.contains('@') {
            Contact::Email(raw.to_string())
        } else {
            Contact::Phone(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Contact::Email(raw) | Contact::Phone(raw) => raw,
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(self, Contact::Email(_))
    }
}

/// Errors that can occur when building a player record
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PlayerError {
    #[error("Membership code cannot be empty")]
    EmptyCode,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must be at most 80 characters")]
    NameTooLong,
}

/// Player entity as listed on the roster screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerRecord {
    /// Membership code, unique within the roster (e.g. `SC-001`)
    id: String,
    /// Display name
    name: String,
    /// Email or phone, classified at construction
    contact: Contact,
    /// Calendar date the member joined
    joined: NaiveDate,
    /// Membership status
    status: MembershipStatus,
}

impl PlayerRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: &str,
        joined: NaiveDate,
        status: MembershipStatus,
    ) -> Result<Self, PlayerError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(PlayerError::EmptyCode);
        }
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if name.len() > 80 {
            return Err(PlayerError::NameTooLong);
        }

        Ok(PlayerRecord {
            id,
            name,
            contact: Contact::parse(contact),
            joined,
            status,
        })
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn joined(&self) -> NaiveDate {
        self.joined
    }

    pub fn status(&self) -> MembershipStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, MembershipStatus::Active)
    }

    // Derived display attributes

    /// Avatar initials: first letters of up to the first two name words,
    /// uppercased.
    pub fn avatar_initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Avatar color, chosen deterministically from a fixed palette by
    /// hashing the membership code.
    pub fn avatar_color(&self) -> &'static str {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        AVATAR_COLORS[(hasher.finish() as usize) % AVATAR_COLORS.len()]
    }
}

impl Record for PlayerRecord {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
