use chrono::{NaiveDate, Utc};

use filmorate_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserDraft};
use crate::domain::validation::{ValidationErrors, validate_user};
use crate::error::FilmorateError;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, FilmorateError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: UserId) -> Result<User, FilmorateError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(FilmorateError::UserNotFound(id))
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, mut draft: UserDraft) -> Result<User, FilmorateError> {
        draft.id = None;
        validate_user(&draft, today())?;
        let user = self.repo.save(&draft).await?;
        tracing::info!(user_id = %user.id, login = %user.login, "user created");
        Ok(user)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, draft: UserDraft) -> Result<User, FilmorateError> {
        let Some(id) = draft.id else {
            return Err(ValidationErrors::single("id", "must be present").into());
        };
        validate_user(&draft, today())?;
        if !self.repo.exists(id).await? {
            return Err(FilmorateError::UserNotFound(id));
        }
        let user = self.repo.save(&draft).await?;
        tracing::info!(user_id = %user.id, "user updated");
        Ok(user)
    }
}
