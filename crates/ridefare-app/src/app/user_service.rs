//! User Service - registration and admin lookup

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use ridefare_domain::repository::UserRepository;
use ridefare_types::{AdminGrant, Error, User};

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<Error> for UserServiceError {
    fn from(err: Error) -> Self {
        UserServiceError::StoreError(err.to_string())
    }
}

type Result<T> = std::result::Result<T, UserServiceError>;

/// Sign-up form contents
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub state: String,
    pub city: String,
}

pub struct UserService<'a> {
    users: &'a dyn UserRepository,
}

impl<'a> UserService<'a> {
    pub fn new(users: &'a dyn UserRepository) -> Self {
        Self { users }
    }

    /// Register a user. The first user, decided by the persisted admin
    /// count, becomes the super admin.
    pub fn register(&self, new_user: NewUser) -> Result<User> {
        let name = new_user.name.trim();
        let email = new_user.email.trim().to_lowercase();
        if name.is_empty() {
            return Err(UserServiceError::InvalidInput("name is required".to_string()));
        }
        if !is_plausible_email(&email) {
            return Err(UserServiceError::InvalidInput(format!(
                "invalid email: {}",
                new_user.email
            )));
        }
        if self.users.find_by_email(&email)?.is_some() {
            return Err(UserServiceError::DuplicateEmail(email));
        }

        let is_admin = self.users.admin_count()? == 0;
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email,
            phone: new_user
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            state: new_user.state.trim().to_string(),
            city: new_user.city.trim().to_string(),
            is_admin,
            created_at: now,
        };
        self.users.save(&user)?;

        if is_admin {
            self.users.save_admin(&AdminGrant {
                user_id: user.id.clone(),
                email: user.email.clone(),
                name: user.name.clone(),
                granted_at: now,
                is_super_admin: true,
            })?;
            tracing::info!(user_id = %user.id, "first user registered as super admin");
        } else {
            tracing::info!(user_id = %user.id, "user registered");
        }
        Ok(user)
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.users.find_by_id(user_id)?)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.find_by_email(email.trim())?)
    }

    pub fn is_admin(&self, user_id: &str) -> Result<bool> {
        Ok(self
            .users
            .find_admins()?
            .iter()
            .any(|a| a.user_id == user_id))
    }

    /// City the user registered with, used as the default booking city
    pub fn user_city(&self, user_id: &str) -> Result<String> {
        self.users
            .find_by_id(user_id)?
            .map(|u| u.city)
            .ok_or_else(|| UserServiceError::NotFound(user_id.to_string()))
    }

    pub fn admins(&self) -> Result<Vec<AdminGrant>> {
        Ok(self.users.find_admins()?)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_plausible_email("a@b.in"));
        assert!(!is_plausible_email("a.b.in"));
        assert!(!is_plausible_email("@b.in"));
        assert!(!is_plausible_email("a@localhost"));
    }
}
