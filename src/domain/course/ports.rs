use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Course, CourseAssignment, CourseGraph, CourseResource, Lesson};
use super::errors::CourseError;

#[async_trait]
pub trait CourseRepository: Send + Sync {
  /// Persists a complete course graph atomically. Either every row in the
  /// graph becomes visible or none do; a partially created course is never
  /// observable, including after a mid-sequence failure or a dropped call.
  async fn create(&self, graph: CourseGraph) -> Result<CourseGraph, CourseError>;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, CourseError>;

  /// Lessons of a course in their creation order
  async fn lessons_for_course(&self, course_id: Uuid) -> Result<Vec<Lesson>, CourseError>;

  async fn resources_for_course(&self, course_id: Uuid)
    -> Result<Vec<CourseResource>, CourseError>;

  async fn assignments_for_course(
    &self,
    course_id: Uuid,
  ) -> Result<Vec<CourseAssignment>, CourseError>;
}
