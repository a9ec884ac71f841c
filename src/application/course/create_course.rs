use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::course::{
  CourseComposer, CourseError, CourseTitle, LessonTitle, NewAssignment, NewCourse, NewLesson,
  NewResource, ResourceType,
};

#[derive(Debug, Deserialize)]
pub struct CreateLessonDto {
  pub title: String,
  pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateResourceDto {
  pub content: String,
  pub resource_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentDto {
  pub title: String,
  pub description: String,
  // Accepted from callers for boundary compatibility but never honored: a
  // new assignment always starts unscored and unsubmitted.
  #[serde(default)]
  pub overall_score: Option<i32>,
  #[serde(default)]
  pub submitted_file: Option<String>,
}

/// The external boundary keeps the original three-ordered-lists contract:
/// `resources[i]` belongs to `lessons[i]`. The lists must have equal length;
/// mismatches fail before anything is written.
#[derive(Debug, Deserialize)]
pub struct CreateCourseCommand {
  pub owner_id: Uuid,
  pub title: String,
  pub description: String,
  pub image_url: Option<String>,
  pub lessons: Vec<CreateLessonDto>,
  pub resources: Vec<CreateResourceDto>,
  pub assignments: Vec<CreateAssignmentDto>,
}

#[derive(Debug, Serialize)]
pub struct CreateCourseResponse {
  pub course_id: Uuid,
  pub lesson_ids: Vec<Uuid>,
  pub created_at: DateTime<Utc>,
}

pub struct CreateCourseUseCase {
  course_composer: Arc<CourseComposer>,
}

impl CreateCourseUseCase {
  pub fn new(course_composer: Arc<CourseComposer>) -> Self {
    Self { course_composer }
  }

  pub async fn execute(
    &self,
    command: CreateCourseCommand,
  ) -> Result<CreateCourseResponse, CourseError> {
    // Fail fast on unpairable lists, before any validation or write
    if command.resources.len() != command.lessons.len() {
      return Err(CourseError::ResourceLessonMismatch {
        lessons: command.lessons.len(),
        resources: command.resources.len(),
      });
    }

    let title = CourseTitle::new(command.title)?;

    // Zip the positional lists into the paired domain shape: from here on a
    // resource cannot be detached from its lesson
    let lessons: Vec<NewLesson> = command
      .lessons
      .into_iter()
      .zip(command.resources)
      .map(|(lesson, resource)| {
        let lesson_title = LessonTitle::new(lesson.title)?;
        let resource_type = ResourceType::from_str(&resource.resource_type)?;
        Ok(NewLesson {
          title: lesson_title,
          description: lesson.description,
          resources: vec![NewResource {
            content: resource.content,
            resource_type,
          }],
        })
      })
      .collect::<Result<Vec<_>, CourseError>>()?;

    let assignments: Vec<NewAssignment> = command
      .assignments
      .into_iter()
      .map(|a| NewAssignment {
        title: a.title,
        description: a.description,
      })
      .collect();

    let course = NewCourse {
      owner_id: command.owner_id,
      title,
      description: command.description,
      image_url: command.image_url,
    };

    let graph = self
      .course_composer
      .create_course(course, lessons, assignments)
      .await?;

    Ok(CreateCourseResponse {
      course_id: graph.course.id,
      lesson_ids: graph.lessons.iter().map(|l| l.id).collect(),
      created_at: graph.course.created_at,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::User;
  use crate::domain::auth::ports::UserRepository;
  use crate::domain::auth::testing::InMemoryUserRepository;
  use crate::domain::auth::value_objects::UserRole;
  use crate::domain::course::ports::CourseRepository;
  use crate::domain::course::testing::InMemoryCourseRepository;

  struct Fixture {
    use_case: CreateCourseUseCase,
    course_repo: Arc<InMemoryCourseRepository>,
    owner_id: Uuid,
  }

  async fn fixture() -> Fixture {
    let course_repo = Arc::new(InMemoryCourseRepository::new());
    let user_repo = Arc::new(InMemoryUserRepository::new());

    let owner = user_repo
      .create(User::new(
        "author@example.com".to_string(),
        "Course".to_string(),
        "Author".to_string(),
        "$stub$pw".to_string(),
        UserRole::Instructor,
      ))
      .await
      .unwrap();

    let composer = Arc::new(CourseComposer::new(course_repo.clone(), user_repo));

    Fixture {
      use_case: CreateCourseUseCase::new(composer),
      course_repo,
      owner_id: owner.id,
    }
  }

  fn command(owner_id: Uuid, lessons: usize, resources: usize) -> CreateCourseCommand {
    CreateCourseCommand {
      owner_id,
      title: "Operating Systems".to_string(),
      description: "Processes, memory, filesystems".to_string(),
      image_url: None,
      lessons: (0..lessons)
        .map(|i| CreateLessonDto {
          title: format!("Lesson {}", i + 1),
          description: format!("Covers topic {}", i + 1),
        })
        .collect(),
      resources: (0..resources)
        .map(|i| CreateResourceDto {
          content: format!("https://videos.example.com/{}.mp4", i + 1),
          resource_type: "video".to_string(),
        })
        .collect(),
      assignments: vec![CreateAssignmentDto {
        title: "Lab 1".to_string(),
        description: "Write a shell".to_string(),
        overall_score: Some(100),
        submitted_file: Some("prefilled.tar.gz".to_string()),
      }],
    }
  }

  #[tokio::test]
  async fn test_positional_lists_are_paired_by_index() {
    let f = fixture().await;

    let response = f.use_case.execute(command(f.owner_id, 2, 2)).await.unwrap();

    let lessons = f
      .course_repo
      .lessons_for_course(response.course_id)
      .await
      .unwrap();
    let resources = f
      .course_repo
      .resources_for_course(response.course_id)
      .await
      .unwrap();

    assert_eq!(lessons.len(), 2);
    assert_eq!(resources.len(), 2);

    // resource i landed on lesson i
    let first = resources
      .iter()
      .find(|r| r.content.ends_with("/1.mp4"))
      .unwrap();
    let second = resources
      .iter()
      .find(|r| r.content.ends_with("/2.mp4"))
      .unwrap();
    assert_eq!(first.lesson_id, lessons[0].id);
    assert_eq!(second.lesson_id, lessons[1].id);
  }

  #[tokio::test]
  async fn test_supplied_score_and_submission_are_ignored() {
    let f = fixture().await;

    let response = f.use_case.execute(command(f.owner_id, 1, 1)).await.unwrap();

    let assignments = f
      .course_repo
      .assignments_for_course(response.course_id)
      .await
      .unwrap();

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].overall_score, 0);
    assert!(assignments[0].submitted_file.is_none());
  }

  #[tokio::test]
  async fn test_more_resources_than_lessons_fails_before_writing() {
    let f = fixture().await;

    let err = f.use_case.execute(command(f.owner_id, 2, 3)).await.unwrap_err();

    assert!(matches!(
      err,
      CourseError::ResourceLessonMismatch {
        lessons: 2,
        resources: 3
      }
    ));
    assert_eq!(f.course_repo.course_count(), 0);
  }

  #[tokio::test]
  async fn test_fewer_resources_than_lessons_also_fails() {
    let f = fixture().await;

    let err = f.use_case.execute(command(f.owner_id, 3, 1)).await.unwrap_err();

    assert!(matches!(err, CourseError::ResourceLessonMismatch { .. }));
    assert_eq!(f.course_repo.course_count(), 0);
  }

  #[tokio::test]
  async fn test_unknown_resource_type_is_rejected() {
    let f = fixture().await;

    let mut cmd = command(f.owner_id, 1, 1);
    cmd.resources[0].resource_type = "hologram".to_string();

    let err = f.use_case.execute(cmd).await.unwrap_err();
    assert!(matches!(err, CourseError::Validation(_)));
    assert_eq!(f.course_repo.course_count(), 0);
  }
}
