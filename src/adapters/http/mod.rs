pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  CreateCourseRequest, CreateCourseResponse, ErrorResponse, LoginRequest, LoginResponse,
  SignUpRequest, SignUpResponse, SuccessResponse, UserListResponse,
};
pub use errors::{ApiError, AuthErrorKind};
pub use routes::{configure_auth_routes, configure_course_routes, configure_user_routes};
