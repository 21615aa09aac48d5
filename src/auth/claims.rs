use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::Principal;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Username
    pub roles: Vec<String>, // Authorities, e.g. ROLE_USER
    pub exp: i64,           // Expiration time (UTC timestamp, seconds)
    pub iat: i64,           // Issued at (UTC timestamp, seconds)
}

impl Claims {
    pub fn new(principal: &Principal, expiration: Duration) -> Self {
        let now = Utc::now();
        let exp = now + expiration;

        Self {
            sub: principal.username.clone(),
            roles: principal.authorities(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Role;

    #[test]
    fn test_claims_creation() {
        let principal = Principal::new("johndoe", [Role::User]);
        let claims = Claims::new(&principal, Duration::hours(1));

        assert_eq!(claims.sub, "johndoe");
        assert_eq!(claims.roles, vec!["ROLE_USER"]);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_in_the_past_are_expired() {
        let principal = Principal::new("johndoe", [Role::User]);
        let claims = Claims::new(&principal, Duration::seconds(-5));

        assert!(claims.is_expired());
    }
}
