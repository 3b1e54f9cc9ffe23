//! User entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub favorite_genres: Vec<String>,
    pub top_movies: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub favorite_genres: Vec<String>,
    pub top_movies: Vec<DbId>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            profile_picture: user.profile_picture,
            favorite_genres: user.favorite_genres,
            top_movies: user.top_movies,
            created_at: user.created_at,
        }
    }
}

/// Public profile of another user -- omits the email address as well.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub id: DbId,
    pub username: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub favorite_genres: Vec<String>,
    pub top_movies: Vec<DbId>,
    pub created_at: Timestamp,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            bio: user.bio,
            profile_picture: user.profile_picture,
            favorite_genres: user.favorite_genres,
            top_movies: user.top_movies,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The hash is produced by the API layer.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for updating a profile. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateProfile {
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub favorite_genres: Option<Vec<String>>,
    pub top_movies: Option<Vec<DbId>>,
}
