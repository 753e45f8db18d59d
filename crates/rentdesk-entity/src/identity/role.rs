//! Session role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role tag carried by a session.
///
/// This is a closed set: every authorization decision matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionRole {
    /// A renter using the platform to apply for units and pay rent.
    Tenant,
    /// A landlord who owns one or more subdomains.
    LandlordOwner,
    /// A landlord's team member with administrative rights.
    TeamAdmin,
    /// A landlord's team member without administrative rights.
    TeamMember,
    /// Platform operator.
    SuperAdmin,
    /// No session was presented.
    Anonymous,
}

impl SessionRole {
    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::LandlordOwner => "landlord-owner",
            Self::TeamAdmin => "team-admin",
            Self::TeamMember => "team-member",
            Self::SuperAdmin => "super-admin",
            Self::Anonymous => "anonymous",
        }
    }
}

impl fmt::Display for SessionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionRole {
    type Err = rentdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "tenant" => Ok(Self::Tenant),
            "landlord-owner" => Ok(Self::LandlordOwner),
            "team-admin" => Ok(Self::TeamAdmin),
            "team-member" => Ok(Self::TeamMember),
            "super-admin" => Ok(Self::SuperAdmin),
            "anonymous" => Ok(Self::Anonymous),
            _ => Err(rentdesk_core::AppError::validation(format!(
                "Invalid session role: '{s}'. Expected one of: tenant, landlord-owner, \
                 team-admin, team-member, super-admin, anonymous"
            ))),
        }
    }
}
