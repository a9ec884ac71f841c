use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{DeleteUserUseCase, ListUsersUseCase, LoginUseCase, SignUpUseCase};
use crate::application::course::CreateCourseUseCase;

use super::handlers::auth::{
  delete_user_handler, list_users_handler, login_handler, sign_up_handler,
};
use super::handlers::courses::create_course_handler;

/// Configure authentication routes
///
/// Mounts the credential-lifecycle endpoints under the provided scope
/// (e.g. /api/v1/auth).
///
/// # Routes
///
/// - POST /signup - Register a new user account
/// - POST /login - Authenticate and return the user record
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  sign_up_use_case: Arc<SignUpUseCase>,
  login_use_case: Arc<LoginUseCase>,
) {
  cfg
    .app_data(web::Data::new(sign_up_use_case))
    .app_data(web::Data::new(login_use_case))
    .route("/signup", web::post().to(sign_up_handler))
    .route("/login", web::post().to(login_handler));
}

/// Configure user administration routes
///
/// # Routes
///
/// - GET / - List all users (no password material)
/// - DELETE /{id} - Delete a user by id
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  list_users_use_case: Arc<ListUsersUseCase>,
  delete_user_use_case: Arc<DeleteUserUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_users_use_case))
    .app_data(web::Data::new(delete_user_use_case))
    .route("", web::get().to(list_users_handler))
    .route("/{id}", web::delete().to(delete_user_handler));
}

/// Configure course routes
///
/// # Routes
///
/// - POST / - Create a course with its lessons, resources and assignments
pub fn configure_course_routes(
  cfg: &mut web::ServiceConfig,
  create_course_use_case: Arc<CreateCourseUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_course_use_case))
    .route("", web::post().to(create_course_handler));
}
