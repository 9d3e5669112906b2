use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filmorate_domain::id::UserId;

use crate::domain::types::{User, UserDraft};
use crate::error::FilmorateError;
use crate::handlers::{JsonBody, PathParam};
use crate::state::AppState;
use crate::usecase::friend::{
    AddFriendUseCase, GetCommonFriendsUseCase, GetFriendsUseCase, RemoveFriendUseCase,
};
use crate::usecase::user::{
    CreateUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub id: Option<UserId>,
    pub email: String,
    pub login: String,
    /// Blank or missing falls back to `login`.
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl From<UserRequest> for UserDraft {
    fn from(body: UserRequest) -> Self {
        UserDraft {
            id: body.id,
            email: body.email,
            login: body.login,
            name: body.name,
            birthday: body.birthday,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            login: user.login,
            name: user.name,
            birthday: user.birthday,
        }
    }
}

fn user_responses(users: Vec<User>) -> Json<Vec<UserResponse>> {
    Json(users.into_iter().map(UserResponse::from).collect())
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, FilmorateError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    Ok(user_responses(usecase.execute().await?))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> Result<Json<UserResponse>, FilmorateError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), FilmorateError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── PUT /users ───────────────────────────────────────────────────────────────

pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UserRequest>,
) -> Result<Json<UserResponse>, FilmorateError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(body.into()).await?.into()))
}

// ── PUT /users/{id}/friends/{friendId} ───────────────────────────────────────

pub async fn add_friend(
    State(state): State<AppState>,
    PathParam((user_id, friend_id)): PathParam<(UserId, UserId)>,
) -> Result<StatusCode, FilmorateError> {
    let usecase = AddFriendUseCase {
        users: state.user_repo(),
        friends: state.friend_repo(),
    };
    usecase.execute(user_id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/{id}/friends/{friendId} ────────────────────────────────────

pub async fn remove_friend(
    State(state): State<AppState>,
    PathParam((user_id, friend_id)): PathParam<(UserId, UserId)>,
) -> Result<StatusCode, FilmorateError> {
    let usecase = RemoveFriendUseCase {
        users: state.user_repo(),
        friends: state.friend_repo(),
    };
    usecase.execute(user_id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/{id}/friends ──────────────────────────────────────────────────

pub async fn get_friends(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<UserId>,
) -> Result<Json<Vec<UserResponse>>, FilmorateError> {
    let usecase = GetFriendsUseCase {
        users: state.user_repo(),
        friends: state.friend_repo(),
    };
    Ok(user_responses(usecase.execute(user_id).await?))
}

// ── GET /users/{id}/friends/common/{otherId} ─────────────────────────────────

pub async fn get_common_friends(
    State(state): State<AppState>,
    PathParam((user_id, other_id)): PathParam<(UserId, UserId)>,
) -> Result<Json<Vec<UserResponse>>, FilmorateError> {
    let usecase = GetCommonFriendsUseCase {
        users: state.user_repo(),
        friends: state.friend_repo(),
    };
    Ok(user_responses(usecase.execute(user_id, other_id).await?))
}
