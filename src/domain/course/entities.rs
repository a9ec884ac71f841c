use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{CourseTitle, LessonTitle, ResourceType};

// Course - immutable after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
  pub id: Uuid,
  /// The authoring user
  pub owner_id: Uuid,
  pub title: CourseTitle,
  pub description: String,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
}

impl Course {
  pub fn new(
    owner_id: Uuid,
    title: CourseTitle,
    description: String,
    image_url: Option<String>,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      owner_id,
      title,
      description,
      image_url,
      created_at: Utc::now(),
    }
  }
}

// Lesson - belongs to exactly one course; position preserves input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
  pub id: Uuid,
  pub course_id: Uuid,
  pub title: LessonTitle,
  pub description: String,
  /// 1-based order within the course
  pub position: i32,
}

impl Lesson {
  pub fn new(course_id: Uuid, title: LessonTitle, description: String, position: i32) -> Self {
    Self {
      id: Uuid::new_v4(),
      course_id,
      title,
      description,
      position,
    }
  }
}

// Course resource - content attached to one lesson of the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseResource {
  pub id: Uuid,
  pub course_id: Uuid,
  pub lesson_id: Uuid,
  pub content: String,
  pub resource_type: ResourceType,
}

impl CourseResource {
  pub fn new(course_id: Uuid, lesson_id: Uuid, content: String, resource_type: ResourceType) -> Self {
    Self {
      id: Uuid::new_v4(),
      course_id,
      lesson_id,
      content,
      resource_type,
    }
  }
}

// Course assignment - score and submission always start empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAssignment {
  pub id: Uuid,
  pub course_id: Uuid,
  pub title: String,
  pub description: String,
  pub overall_score: i32,
  pub submitted_file: Option<String>,
}

impl CourseAssignment {
  /// A new assignment never carries a score or a submission; there is
  /// deliberately no way to construct one with either set.
  pub fn new(course_id: Uuid, title: String, description: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      course_id,
      title,
      description,
      overall_score: 0,
      submitted_file: None,
    }
  }
}

// Course enrollment - student/course junction with a grade.
// Part of the schema; no core flow mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEnrollment {
  pub id: Uuid,
  pub course_id: Uuid,
  pub student_id: Uuid,
  pub grade: f32,
  pub enrolled_at: DateTime<Utc>,
}

impl CourseEnrollment {
  pub fn new(course_id: Uuid, student_id: Uuid) -> Self {
    Self {
      id: Uuid::new_v4(),
      course_id,
      student_id,
      grade: 0.0,
      enrolled_at: Utc::now(),
    }
  }

  pub fn record_grade(&mut self, grade: f32) {
    self.grade = grade;
  }
}

/// The complete output of one course creation: a course with every child row
/// built in the same invocation. Persisted as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGraph {
  pub course: Course,
  pub lessons: Vec<Lesson>,
  pub resources: Vec<CourseResource>,
  pub assignments: Vec<CourseAssignment>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lesson_belongs_to_course() {
    let course = Course::new(
      Uuid::new_v4(),
      CourseTitle::new("Intro to Rust".to_string()).unwrap(),
      "Ownership and borrowing".to_string(),
      None,
    );
    let lesson = Lesson::new(
      course.id,
      LessonTitle::new("Hello, world".to_string()).unwrap(),
      "First steps".to_string(),
      1,
    );

    assert_eq!(lesson.course_id, course.id);
    assert_eq!(lesson.position, 1);
  }

  #[test]
  fn test_assignment_starts_unscored_and_unsubmitted() {
    let assignment = CourseAssignment::new(
      Uuid::new_v4(),
      "Project 1".to_string(),
      "Build a CLI".to_string(),
    );

    assert_eq!(assignment.overall_score, 0);
    assert!(assignment.submitted_file.is_none());
  }

  #[test]
  fn test_enrollment_grade() {
    let mut enrollment = CourseEnrollment::new(Uuid::new_v4(), Uuid::new_v4());
    assert_eq!(enrollment.grade, 0.0);

    enrollment.record_grade(87.5);
    assert_eq!(enrollment.grade, 87.5);
  }
}
