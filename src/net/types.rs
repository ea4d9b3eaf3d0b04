//! Request/response DTOs for the auth service.
//!
//! DESIGN
//! ======
//! Field names match the auth service JSON one to one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account kind chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
}

impl Role {
    /// Wire value, also used as the persisted `userRole`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
        }
    }

    /// Human label, used as the greeting fallback when no name is stored.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Faculty => "Faculty",
        }
    }

    /// Parse a role string case-insensitively (`"FACULTY"` from the server).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "faculty" => Some(Self::Faculty),
            _ => None,
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Department code, one of [`DEPARTMENTS`].
    pub department: String,
    pub role: Role,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful register/login reply.
///
/// Only the HTTP status decides success, so absent or `null` fields decode
/// to empty strings instead of failing the call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    /// Opaque bearer token.
    #[serde(deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-form role string; the server sends `STUDENT` or `FACULTY`.
    #[serde(deserialize_with = "null_as_empty")]
    pub role: String,
    /// Human-readable status, e.g. `"Login successful"`.
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A selectable department: wire code and display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Department {
    pub code: &'static str,
    pub name: &'static str,
}

/// Departments offered by the registration form.
pub const DEPARTMENTS: &[Department] = &[
    Department { code: "cs", name: "Computer Science" },
    Department { code: "ee", name: "Electrical Engineering" },
    Department { code: "me", name: "Mechanical Engineering" },
    Department { code: "ce", name: "Civil Engineering" },
    Department { code: "math", name: "Mathematics" },
];
