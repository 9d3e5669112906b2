use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::catalog::Catalog;
use crate::infra::db::{DbFilmRepository, DbFriendRepository, DbLikeRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn film_repo(&self) -> DbFilmRepository {
        DbFilmRepository {
            db: self.db.clone(),
            catalog: self.catalog.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn like_repo(&self) -> DbLikeRepository {
        DbLikeRepository {
            db: self.db.clone(),
            catalog: self.catalog.clone(),
        }
    }

    pub fn friend_repo(&self) -> DbFriendRepository {
        DbFriendRepository {
            db: self.db.clone(),
        }
    }
}
