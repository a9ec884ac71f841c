use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;
use crate::domain::auth::value_objects::{Email, Password, UserRole};

/// Command for authenticating a user
#[derive(Debug, Clone)]
pub struct LoginCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful authentication. Deliberately carries no
/// password material: this is the only user shape that leaves the service.
#[derive(Debug, Clone)]
pub struct LoginResponse {
  pub user_id: Uuid,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  pub role: UserRole,
}

/// Use case for logging a user in
pub struct LoginUseCase {
  account_service: Arc<AccountService>,
}

impl LoginUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email and for a
  /// wrong password alike; other variants indicate invalid input or
  /// infrastructure failure.
  pub async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let user = self.account_service.login(email, password).await?;

    Ok(LoginResponse {
      user_id: user.id,
      email: user.email,
      first_name: user.first_name,
      last_name: user.last_name,
      role: user.role,
    })
  }
}
