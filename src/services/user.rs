use sqlx::SqlitePool;

use crate::config::Config;
use crate::database::models::{CreateUserInput, LoginInput, UpdateUserInput, UserRole};
use crate::database::repositories::UserRepository;
use crate::database::transaction::DatabaseTransaction;
use crate::dto::{AuthResponse, UserDto};
use crate::error::AppError;
use crate::services::{auth, validation};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
    users: UserRepository,
    config: Config,
}

impl UserService {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
            config,
        }
    }

    pub async fn register(&self, mut input: CreateUserInput) -> Result<UserDto, AppError> {
        validation::user_name(&input.name)?;
        validation::email(&input.email)?;
        validation::password(&input.password)?;

        input.name = input.name.trim().to_string();
        input.email = validation::email_key(&input.email);

        if self.users.email_exists(&input.email).await? {
            log::warn!("Registration rejected, email {} is taken", input.email);
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = auth::hash_password(&input.password, self.config.password_hash_cost)?;

        let users = self.users.clone();
        let user = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                let user = users.create(tx, &input, &password_hash).await?;
                Ok(user)
            })
        })
        .await?;

        log::info!("Registered user {} ({})", user.id, user.email);
        Ok(user.into())
    }

    pub async fn login(&self, input: LoginInput) -> Result<AuthResponse, AppError> {
        let email = validation::email_key(&input.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .filter(|user| auth::verify_password(&input.password, &user.password_hash))
            .ok_or_else(|| {
                log::warn!("Failed login attempt for {}", email);
                AppError::Unauthorized
            })?;

        let token = auth::generate_token(&self.config, &user)?;
        log::info!("User {} logged in", user.id);

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn update_profile(
        &self,
        id: i64,
        mut input: UpdateUserInput,
    ) -> Result<UserDto, AppError> {
        validation::user_name(&input.name)?;
        validation::email(&input.email)?;

        input.name = input.name.trim().to_string();
        input.email = validation::email_key(&input.email);

        let existing = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        if existing.email != input.email && self.users.email_exists(&input.email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let users = self.users.clone();
        let user = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                users
                    .update(tx, id, &input)
                    .await?
                    .ok_or_else(|| AppError::not_found("User", id))
            })
        })
        .await?;

        log::info!("Updated profile of user {}", id);
        Ok(user.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let users = self.users.clone();
        let deleted =
            DatabaseTransaction::run(&self.pool, move |tx| {
                Box::pin(async move { Ok(users.delete(tx, id).await?) })
            })
            .await?;

        if !deleted {
            return Err(AppError::not_found("User", id));
        }

        log::info!("Deleted user {}", id);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<UserDto, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AppError::not_found("User", id))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<UserDto, AppError> {
        self.users
            .find_by_email(&validation::email_key(email))
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User not found with email: {}", email)))
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, AppError> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn list_by_role(&self, role: UserRole) -> Result<Vec<UserDto>, AppError> {
        let users = self.users.find_by_role(role).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<UserDto>, AppError> {
        let users = self.users.search(term.trim()).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn list_by_skill(&self, skill_name: &str) -> Result<Vec<UserDto>, AppError> {
        let users = self.users.find_by_skill_name(skill_name.trim()).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn list_by_team(&self, team_id: i64) -> Result<Vec<UserDto>, AppError> {
        let users = self.users.find_by_team(team_id).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.users.email_exists(&validation::email_key(email)).await?)
    }
}
