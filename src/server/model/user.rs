//! User domain model.
//!
//! Users are created by the external login flow. The core only reads them to resolve
//! the caller of a request and derive their role set.

use crate::{
    model::user::{CurrentUserDto, UserDto},
    server::middleware::auth::Role,
};

/// Application user with admin flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    /// Whether the user holds the admin role.
    pub admin: bool,
}

impl User {
    /// Roles held by the user. Every user holds `Role::User`.
    pub fn roles(&self) -> Vec<Role> {
        if self.admin {
            vec![Role::User, Role::Admin]
        } else {
            vec![Role::User]
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            admin: self.admin,
        }
    }

    /// Converts the user into the current-user response including authority strings.
    pub fn into_current_user_dto(self) -> CurrentUserDto {
        let roles = self
            .roles()
            .iter()
            .map(|role| role.authority().to_string())
            .collect();

        CurrentUserDto {
            user: self.into_dto(),
            roles,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            admin: entity.admin,
        }
    }
}
