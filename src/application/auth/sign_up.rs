use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::{Email, Password, UserRole};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct SignUpCommand {
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  /// Plain text, hashed before anything is stored
  pub password: String,
  pub role: String,
}

/// Response after successful registration
#[derive(Debug, Clone)]
pub struct SignUpResponse {
  pub user_id: Uuid,
  pub email: String,
  pub role: UserRole,
}

/// Use case for registering a new user
pub struct SignUpUseCase {
  account_service: Arc<AccountService>,
}

impl SignUpUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Parses and validates the raw command fields into value objects, then
  /// registers the user.
  ///
  /// # Errors
  /// Returns `AuthError` on invalid input or when the email is taken.
  pub async fn execute(&self, command: SignUpCommand) -> Result<SignUpResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;
    let role = UserRole::from_str(&command.role)?;

    let user = self
      .account_service
      .sign_up(email, command.first_name, command.last_name, password, role)
      .await?;

    Ok(SignUpResponse {
      user_id: user.id,
      email: user.email,
      role: user.role,
    })
  }
}
