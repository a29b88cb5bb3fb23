use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::services::token::user_id_from_token;

/// The logged-in user. `id` is always present once a session exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub token: String,
}

/// What `POST /api/login` returns and what older builds persisted: the same
/// shape as [`User`] but with `id` possibly missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl SessionRecord {
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Completes the record into a [`User`], reading the id from the token
    /// payload when the record has none.
    pub fn into_user(self) -> Result<User, SessionError> {
        let id = match self.id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => user_id_from_token(&self.token)?,
        };
        Ok(User {
            id,
            name: self.name,
            username: self.username,
            token: self.token,
        })
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of `POST /api/users`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// A user as returned by `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
}
