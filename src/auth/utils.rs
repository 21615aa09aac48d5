use crate::{
    auth::Principal,
    errors::{AppError, AppResult},
    models::domain::Role,
};

pub fn require_admin(principal: &Principal) -> AppResult<()> {
    require_any_role(principal, &[Role::Admin])
}

pub fn require_any_role(principal: &Principal, roles: &[Role]) -> AppResult<()> {
    if !principal.has_any_role(roles) {
        return Err(AppError::Forbidden(
            "Access is denied for this role".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_admin_success() {
        let principal = Principal::new("admin", [Role::Admin]);
        assert!(require_admin(&principal).is_ok());
    }

    #[test]
    fn test_require_admin_failure() {
        let principal = Principal::new("user", [Role::User]);
        assert!(matches!(
            require_admin(&principal),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_any_role() {
        let principal = Principal::new("user", [Role::User]);
        assert!(require_any_role(&principal, &[Role::User, Role::Admin]).is_ok());
        assert!(require_any_role(&principal, &[Role::Admin]).is_err());
    }
}
