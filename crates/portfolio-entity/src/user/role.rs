//! Caller role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a token may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The portfolio owner; may do anything.
    Owner,
    /// May create and edit content, but not wipe it.
    #[serde(alias = "maintain")]
    Maintainer,
    /// Anonymous or low-trust reader.
    User,
}

impl Role {
    /// All roles, most privileged first.
    pub const ALL: [Role; 3] = [Role::Owner, Role::Maintainer, Role::User];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Maintainer => "maintainer",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = portfolio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "maintainer" | "maintain" => Ok(Self::Maintainer),
            "user" => Ok(Self::User),
            _ => Err(portfolio_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: owner, maintainer, user"
            ))),
        }
    }
}
