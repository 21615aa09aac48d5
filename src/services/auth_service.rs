use std::{collections::BTreeSet, sync::Arc};

use secrecy::{ExposeSecret, SecretString};
use validator::Validate;

use crate::{
    auth::{
        password::{hash_password, verify_password},
        JwtService, Principal,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{Role, RoleRecord, User},
        dto::{
            request::{AdminRegisterRequest, AssignRolesRequest, LoginRequest, RegisterRequest},
            response::{AuthResponse, MessageResponse, UserDto},
        },
    },
    repositories::{RoleRepository, UserRepository},
};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    jwt_service: Arc<JwtService>,
    bcrypt_cost: u32,
}

fn bad_credentials() -> AppError {
    AppError::Unauthorized("Bad credentials".to_string())
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        jwt_service: Arc<JwtService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            roles,
            jwt_service,
            bcrypt_cost,
        }
    }

    /// Self-service registration; always grants the USER role.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        request.validate()?;

        let user = self
            .create_user(
                &request.username,
                request.password,
                request.email.as_deref(),
                Role::User,
            )
            .await?;

        log::info!("Registered user '{}'", user.username);
        Ok(MessageResponse::new(
            "User registered successfully with USER role",
        ))
    }

    pub async fn register_with_role(
        &self,
        request: AdminRegisterRequest,
    ) -> AppResult<MessageResponse> {
        request.validate()?;
        let role: Role = request.role.parse()?;

        let user = self
            .create_user(
                &request.username,
                request.password,
                request.email.as_deref(),
                role,
            )
            .await?;

        log::info!("Registered user '{}' with role {}", user.username, role);
        Ok(MessageResponse::new(format!(
            "User registered successfully with {} role",
            role
        )))
    }

    /// Replaces the user's role set.
    pub async fn assign_roles(
        &self,
        username: &str,
        request: AssignRolesRequest,
    ) -> AppResult<UserDto> {
        request.validate()?;

        let roles = request
            .roles
            .iter()
            .map(|name| name.parse::<Role>())
            .collect::<AppResult<BTreeSet<Role>>>()?;

        let mut user = self.load_user(username).await?;
        for role in &roles {
            self.ensure_role(*role).await?;
        }

        user.roles = roles;
        let updated = self.users.update(user).await?;

        log::info!("Updated roles for '{}': {:?}", updated.username, updated.roles);
        Ok(updated.into())
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(bad_credentials)?;

        if !verify_password(request.password, user.password_hash.clone()).await? {
            log::debug!("Failed login for '{}'", user.username);
            return Err(bad_credentials());
        }

        let token = self.jwt_service.issue(&Principal::from(&user))?;
        Ok(AuthResponse { token })
    }

    pub async fn load_user(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    /// Returns the role record, creating it on first reference.
    pub async fn ensure_role(&self, role: Role) -> AppResult<RoleRecord> {
        match self.roles.find_by_name(role).await? {
            Some(existing) => Ok(existing),
            None => {
                log::info!("Creating role {}", role);
                self.roles.save(RoleRecord::new(role)).await
            }
        }
    }

    pub async fn ensure_default_roles(&self) -> AppResult<()> {
        for role in Role::ALL {
            self.ensure_role(role).await?;
        }
        log::info!("Roles initialization complete");
        Ok(())
    }

    /// Creates the configured admin account if it does not exist yet.
    /// Returns whether an account was created.
    pub async fn bootstrap_admin(&self, username: &str, password: &SecretString) -> AppResult<bool> {
        if self.users.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        self.create_user(username, password.expose_secret().to_string(), None, Role::Admin)
            .await?;
        log::info!("Created bootstrap admin '{}'", username);
        Ok(true)
    }

    async fn create_user(
        &self,
        username: &str,
        password: String,
        email: Option<&str>,
        role: Role,
    ) -> AppResult<User> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "username '{}' exists",
                username
            )));
        }

        self.ensure_role(role).await?;

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let user = User::new(username, &password_hash, email, role);
        self.users.create(user).await
    }
}
