use std::collections::BTreeSet;

use crate::models::domain::{Role, User};

/// Authenticated identity attached to a request by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    pub fn new(username: &str, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            username: username.to_string(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Authority names in `ROLE_<NAME>` form.
    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(Role::authority).collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            roles: user.roles.clone(),
        }
    }
}
