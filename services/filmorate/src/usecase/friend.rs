use filmorate_domain::id::UserId;

use crate::domain::repository::{FriendRepository, UserRepository};
use crate::domain::types::User;
use crate::domain::validation::ValidationErrors;
use crate::error::FilmorateError;

async fn ensure_users<U: UserRepository>(users: &U, ids: [UserId; 2]) -> Result<(), FilmorateError> {
    for id in ids {
        if !users.exists(id).await? {
            return Err(FilmorateError::UserNotFound(id));
        }
    }
    Ok(())
}

// ── AddFriend ────────────────────────────────────────────────────────────────

pub struct AddFriendUseCase<U: UserRepository, R: FriendRepository> {
    pub users: U,
    pub friends: R,
}

impl<U: UserRepository, R: FriendRepository> AddFriendUseCase<U, R> {
    /// Adds the edge `user_id -> friend_id` only.
    pub async fn execute(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        if user_id == friend_id {
            return Err(ValidationErrors::single("friendId", "must differ from id").into());
        }
        ensure_users(&self.users, [user_id, friend_id]).await?;
        self.friends.add(user_id, friend_id).await?;
        tracing::info!(user_id = %user_id, friend_id = %friend_id, "friend added");
        Ok(())
    }
}

// ── RemoveFriend ─────────────────────────────────────────────────────────────

pub struct RemoveFriendUseCase<U: UserRepository, R: FriendRepository> {
    pub users: U,
    pub friends: R,
}

impl<U: UserRepository, R: FriendRepository> RemoveFriendUseCase<U, R> {
    /// Leaves the reverse edge untouched. Removing an absent edge succeeds.
    pub async fn execute(&self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        ensure_users(&self.users, [user_id, friend_id]).await?;
        self.friends.remove(user_id, friend_id).await?;
        tracing::info!(user_id = %user_id, friend_id = %friend_id, "friend removed");
        Ok(())
    }
}

// ── GetFriends ───────────────────────────────────────────────────────────────

pub struct GetFriendsUseCase<U: UserRepository, R: FriendRepository> {
    pub users: U,
    pub friends: R,
}

impl<U: UserRepository, R: FriendRepository> GetFriendsUseCase<U, R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<User>, FilmorateError> {
        if !self.users.exists(user_id).await? {
            return Err(FilmorateError::UserNotFound(user_id));
        }
        self.friends.list_friends(user_id).await
    }
}

// ── GetCommonFriends ─────────────────────────────────────────────────────────

pub struct GetCommonFriendsUseCase<U: UserRepository, R: FriendRepository> {
    pub users: U,
    pub friends: R,
}

impl<U: UserRepository, R: FriendRepository> GetCommonFriendsUseCase<U, R> {
    pub async fn execute(&self, user_id: UserId, other_id: UserId) -> Result<Vec<User>, FilmorateError> {
        ensure_users(&self.users, [user_id, other_id]).await?;
        self.friends.list_common(user_id, other_id).await
    }
}
