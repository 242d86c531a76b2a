use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::Record;

/// Errors that can occur when building a role record
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RoleError {
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Role entity as listed on the role management screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleRecord {
    /// Unique role identifier
    id: u32,
    /// Role name
    name: String,
    /// Number of users currently assigned this role
    user_count: u32,
    /// Free-text description
    description: String,
    /// Icon name, passed through untouched to display collaborators
    icon: String,
    /// Display color, passed through untouched to display collaborators
    color: String,
}

impl RoleRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        user_count: u32,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, RoleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RoleError::EmptyName);
        }

        Ok(RoleRecord {
            id,
            name,
            user_count,
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_count(&self) -> u32 {
        self.user_count
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Record for RoleRecord {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
