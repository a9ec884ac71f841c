use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::auth::entities::UserSummary;
use crate::domain::auth::value_objects::UserRole;

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,

  #[validate(length(
    min = 1,
    max = 100,
    message = "First name must be between 1 and 100 characters"
  ))]
  pub first_name: String,

  #[validate(length(
    min = 1,
    max = 100,
    message = "Last name must be between 1 and 100 characters"
  ))]
  pub last_name: String,

  /// One of: student, instructor, admin
  #[validate(length(min = 1, message = "Role is required"))]
  pub role: String,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Response after successful registration
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
  pub user_id: Uuid,
  pub email: String,
  pub role: UserRole,
}

/// Response after successful login. Never contains password material.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub user_id: Uuid,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  pub role: UserRole,
}

/// One entry of the user listing
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryDto {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub role: UserRole,
}

impl From<UserSummary> for UserSummaryDto {
  fn from(summary: UserSummary) -> Self {
    Self {
      id: summary.id,
      first_name: summary.first_name,
      last_name: summary.last_name,
      email: summary.email,
      role: summary.role,
    }
  }
}

/// Response for the user listing
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
  pub users: Vec<UserSummaryDto>,
}

/// One lesson in a course-creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LessonRequest {
  #[validate(length(min = 1, max = 200, message = "Lesson title is required"))]
  pub title: String,

  #[serde(default)]
  pub description: String,
}

/// One resource in a course-creation request; index i pairs with lesson i
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResourceRequest {
  #[validate(length(min = 1, message = "Resource content is required"))]
  pub content: String,

  /// One of: video, document, link
  #[validate(length(min = 1, message = "Resource type is required"))]
  pub resource_type: String,
}

/// One assignment in a course-creation request. Score and submission fields
/// are accepted but ignored; new assignments always start empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignmentRequest {
  #[validate(length(min = 1, max = 200, message = "Assignment title is required"))]
  pub title: String,

  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub overall_score: Option<i32>,

  #[serde(default)]
  pub submitted_file: Option<String>,
}

/// Request for course creation: a course plus three ordered lists. The
/// resource list must be exactly as long as the lesson list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseRequest {
  pub owner_id: Uuid,

  #[validate(length(min = 1, max = 200, message = "Course title is required"))]
  pub title: String,

  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub image_url: Option<String>,

  #[serde(default)]
  #[validate(nested)]
  pub lessons: Vec<LessonRequest>,

  #[serde(default)]
  #[validate(nested)]
  pub resources: Vec<ResourceRequest>,

  #[serde(default)]
  #[validate(nested)]
  pub assignments: Vec<AssignmentRequest>,
}

/// Response after successful course creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateCourseResponse {
  pub course_id: Uuid,
  pub lesson_ids: Vec<Uuid>,
  pub created_at: DateTime<Utc>,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  pub error: String,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
