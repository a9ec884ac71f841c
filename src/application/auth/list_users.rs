use std::sync::Arc;

use crate::domain::auth::entities::UserSummary;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;

/// Response containing all active users, ordered by id
#[derive(Debug, Clone)]
pub struct ListUsersResponse {
  pub users: Vec<UserSummary>,
}

/// Use case for listing user accounts
pub struct ListUsersUseCase {
  account_service: Arc<AccountService>,
}

impl ListUsersUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self) -> Result<ListUsersResponse, AuthError> {
    let users = self.account_service.list_users().await?;

    Ok(ListUsersResponse { users })
  }
}
