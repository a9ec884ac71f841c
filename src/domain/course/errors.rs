use thiserror::Error;
use uuid::Uuid;

use super::value_objects::ValueObjectError;

#[derive(Debug, Error)]
pub enum CourseError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Course owner not found: {0}")]
  OwnerNotFound(Uuid),

  #[error("Course not found: {0}")]
  CourseNotFound(Uuid),

  /// Malformed input: the resource list cannot be paired with the lesson
  /// list. Raised before anything is written.
  #[error("{resources} resources cannot be paired with {lessons} lessons")]
  ResourceLessonMismatch { lessons: usize, resources: usize },

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Internal error: {0}")]
  Internal(String),
}
