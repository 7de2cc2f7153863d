// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;

/// The signed-in user. Rebuilt from session claims on every request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub picture: String,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        picture: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            picture: picture.into(),
        }
    }
}
