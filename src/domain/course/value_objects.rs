use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid course title: {0}")]
  InvalidCourseTitle(String),
  #[error("Invalid lesson title: {0}")]
  InvalidLessonTitle(String),
  #[error("Invalid resource type: {0}")]
  InvalidResourceType(String),
}

// Course Title - required, bounded text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTitle(String);

impl CourseTitle {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidCourseTitle(
        "Course title cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 200 {
      return Err(ValueObjectError::InvalidCourseTitle(
        "Course title cannot exceed 200 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for CourseTitle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Lesson Title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTitle(String);

impl LessonTitle {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidLessonTitle(
        "Lesson title cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 200 {
      return Err(ValueObjectError::InvalidLessonTitle(
        "Lesson title cannot exceed 200 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for LessonTitle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Resource type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
  Video,
  Document,
  Link,
}

impl ResourceType {
  pub fn as_str(&self) -> &'static str {
    match self {
      ResourceType::Video => "video",
      ResourceType::Document => "document",
      ResourceType::Link => "link",
    }
  }
}

impl FromStr for ResourceType {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "video" => Ok(ResourceType::Video),
      "document" => Ok(ResourceType::Document),
      "link" => Ok(ResourceType::Link),
      _ => Err(ValueObjectError::InvalidResourceType(s.to_string())),
    }
  }
}

impl fmt::Display for ResourceType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_course_title_validation() {
    assert!(CourseTitle::new("Rust for Beginners".to_string()).is_ok());
    assert!(CourseTitle::new("   ".to_string()).is_err());
    assert!(CourseTitle::new("x".repeat(201)).is_err());
  }

  #[test]
  fn test_course_title_trims() {
    let title = CourseTitle::new("  Databases 101  ".to_string()).unwrap();
    assert_eq!(title.value(), "Databases 101");
  }

  #[test]
  fn test_lesson_title_validation() {
    assert!(LessonTitle::new("Week 1: Ownership".to_string()).is_ok());
    assert!(LessonTitle::new("".to_string()).is_err());
  }

  #[test]
  fn test_resource_type_round_trip() {
    for rt in [ResourceType::Video, ResourceType::Document, ResourceType::Link] {
      assert_eq!(ResourceType::from_str(rt.as_str()).unwrap(), rt);
    }
    assert!(ResourceType::from_str("hologram").is_err());
  }
}
