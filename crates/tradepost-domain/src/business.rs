//! Business-side enumerations: categories, membership roles, access levels.

use serde::{Deserialize, Serialize};

/// Fixed business category enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    Restaurant,
    Mechanic,
    Retail,
    Nightclub,
    Security,
    Transport,
    Other,
}

impl BusinessCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Mechanic => "mechanic",
            Self::Retail => "retail",
            Self::Nightclub => "nightclub",
            Self::Security => "security",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "restaurant" => Some(Self::Restaurant),
            "mechanic" => Some(Self::Mechanic),
            "retail" => Some(Self::Retail),
            "nightclub" => Some(Self::Nightclub),
            "security" => Some(Self::Security),
            "transport" => Some(Self::Transport),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Role tag on a business membership. Decorative beyond the UI — it grants
/// no extra capability at the authorization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    Manager,
    Employee,
}

impl EmployeeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "manager" => Some(Self::Manager),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

impl Default for EmployeeRole {
    fn default() -> Self {
        Self::Employee
    }
}

/// Informational role tag on a user profile. Not a capability system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Employee,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Self::Owner),
            "employee" => Some(Self::Employee),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Employee
    }
}

/// Capability level required for a business-scoped operation.
///
/// `Member` is satisfied by the owner or any employee of the business;
/// `Owner` only by the owner. Every route handler goes through the same
/// policy check with one of these two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Member,
    Owner,
}
