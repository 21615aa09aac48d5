use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Role;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, password_hash: &str, email: Option<&str>, role: Role) -> Self {
        User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            email: email.map(str::to_string),
            roles: BTreeSet::from([role]),
            created_at: Some(Utc::now()),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(username: &str, role: Role) -> Self {
        User::new(
            username,
            "$2b$04$notarealhashnotarealhashnotarealhashnotarealhash",
            Some(&format!("{}@example.com", username)),
            role,
        )
    }
}
