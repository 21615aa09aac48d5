//! Path-based access rules, evaluated in order for every request.

use crate::{auth::Principal, models::domain::Role};

/// Paths that skip token processing entirely.
pub const PUBLIC_PATHS: [&str; 4] = ["/auth/register", "/auth/login", "/error", "/health"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    AnyRole(&'static [Role]),
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matcher {
    Exact(&'static str),
    /// Matches the prefix itself and anything below it (`/admin/**`).
    Prefix(&'static str),
    Any,
}

impl Matcher {
    fn matches(&self, path: &str) -> bool {
        match self {
            Matcher::Exact(expected) => path == *expected,
            Matcher::Prefix(prefix) => {
                path == *prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            Matcher::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    matcher: Matcher,
    access: Access,
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const USER_OR_ADMIN: &[Role] = &[Role::User, Role::Admin];

const RULES: [Rule; 8] = [
    Rule { matcher: Matcher::Exact(PUBLIC_PATHS[0]), access: Access::Public },
    Rule { matcher: Matcher::Exact(PUBLIC_PATHS[1]), access: Access::Public },
    Rule { matcher: Matcher::Exact(PUBLIC_PATHS[2]), access: Access::Public },
    Rule { matcher: Matcher::Exact(PUBLIC_PATHS[3]), access: Access::Public },
    Rule { matcher: Matcher::Prefix("/auth/admin"), access: Access::AnyRole(ADMIN_ONLY) },
    Rule { matcher: Matcher::Prefix("/admin"), access: Access::AnyRole(ADMIN_ONLY) },
    Rule { matcher: Matcher::Prefix("/user"), access: Access::AnyRole(USER_OR_ADMIN) },
    Rule { matcher: Matcher::Any, access: Access::Authenticated },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No principal, but the path needs one.
    Unauthenticated,
    /// A principal without any of the required roles.
    Forbidden,
}

/// The first rule whose matcher accepts `path`.
pub fn access_for(path: &str) -> Access {
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(path))
        .map(|rule| rule.access)
        .unwrap_or(Access::Authenticated)
}

pub fn is_public(path: &str) -> bool {
    access_for(path) == Access::Public
}

pub fn authorize(path: &str, principal: Option<&Principal>) -> Decision {
    match (access_for(path), principal) {
        (Access::Public, _) => Decision::Allow,
        (_, None) => Decision::Unauthenticated,
        (Access::Authenticated, Some(_)) => Decision::Allow,
        (Access::AnyRole(roles), Some(principal)) => {
            if principal.has_any_role(roles) {
                Decision::Allow
            } else {
                Decision::Forbidden
            }
        }
    }
}
