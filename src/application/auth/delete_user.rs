use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;

/// Command for deleting a user account
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
  pub user_id: Uuid,
}

/// Use case for deleting a user
pub struct DeleteUserUseCase {
  account_service: Arc<AccountService>,
}

impl DeleteUserUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// # Errors
  /// Returns `AuthError::UserNotFound` when no active user has the given id,
  /// including on a repeated delete of the same id.
  pub async fn execute(&self, command: DeleteUserCommand) -> Result<(), AuthError> {
    self.account_service.delete_user(command.user_id).await
  }
}
