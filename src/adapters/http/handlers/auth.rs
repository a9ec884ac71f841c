use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    LoginRequest, LoginResponse, SignUpRequest, SignUpResponse, SuccessResponse, UserListResponse,
    UserSummaryDto,
  },
  errors::ApiError,
};
use crate::application::auth::{
  DeleteUserCommand, DeleteUserUseCase, ListUsersUseCase, LoginCommand, LoginUseCase,
  SignUpCommand, SignUpUseCase,
};

/// Handler for user registration
///
/// POST /api/v1/auth/signup
/// Body: SignUpRequest (JSON)
/// Response: SignUpResponse (JSON) with status 201
pub async fn sign_up_handler(
  request: web::Json<SignUpRequest>,
  use_case: web::Data<Arc<SignUpUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = SignUpCommand {
    email: request.email.clone(),
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
    password: request.password.clone(),
    role: request.role.clone(),
  };

  let response = use_case.execute(command).await?;

  let api_response = SignUpResponse {
    user_id: response.user_id,
    email: response.email,
    role: response.role,
  };

  Ok(HttpResponse::Created().json(api_response))
}

/// Handler for user login
///
/// POST /api/v1/auth/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = LoginCommand {
    email: request.email.clone(),
    password: request.password.clone(),
  };

  let response = use_case.execute(command).await?;

  let api_response = LoginResponse {
    user_id: response.user_id,
    email: response.email,
    first_name: response.first_name,
    last_name: response.last_name,
    role: response.role,
  };

  Ok(HttpResponse::Ok().json(api_response))
}

/// Handler for the user listing
///
/// GET /api/v1/users
/// Response: UserListResponse (JSON) with status 200
pub async fn list_users_handler(
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  let api_response = UserListResponse {
    users: response.users.into_iter().map(UserSummaryDto::from).collect(),
  };

  Ok(HttpResponse::Ok().json(api_response))
}

/// Handler for deleting a user
///
/// DELETE /api/v1/users/{id}
/// Response: SuccessResponse (JSON) with status 200; 404 when the id does not
/// exist (including a repeated delete)
pub async fn delete_user_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = DeleteUserCommand {
    user_id: path.into_inner(),
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "User deleted".to_string(),
  }))
}
