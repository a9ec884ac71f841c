use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::ports::UserRepository;

use super::entities::{Course, CourseAssignment, CourseGraph, CourseResource, Lesson};
use super::errors::CourseError;
use super::ports::CourseRepository;
use super::value_objects::{CourseTitle, LessonTitle, ResourceType};

/// Course creation data
pub struct NewCourse {
  pub owner_id: Uuid,
  pub title: CourseTitle,
  pub description: String,
  pub image_url: Option<String>,
}

/// A lesson together with the resources that belong to it. Pairing is carried
/// by the structure itself, so a resource without a lesson is unrepresentable.
pub struct NewLesson {
  pub title: LessonTitle,
  pub description: String,
  pub resources: Vec<NewResource>,
}

pub struct NewResource {
  pub content: String,
  pub resource_type: ResourceType,
}

pub struct NewAssignment {
  pub title: String,
  pub description: String,
}

/// Sequences the dependent multi-entity build for course creation and hands
/// the finished graph to the repository as one atomic unit.
pub struct CourseComposer {
  course_repo: Arc<dyn CourseRepository>,
  user_repo: Arc<dyn UserRepository>,
}

impl CourseComposer {
  pub fn new(course_repo: Arc<dyn CourseRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
    Self {
      course_repo,
      user_repo,
    }
  }

  /// Creates a course with its lessons, their resources, and its assignments.
  ///
  /// The build is strictly sequential because each step consumes ids produced
  /// by the previous one: the course id flows into every child, and each
  /// lesson's id flows into its resources. Assignments are created with a
  /// zero score and no submission no matter what the caller supplied.
  /// Persistence happens once, atomically, after the whole graph is built.
  pub async fn create_course(
    &self,
    course: NewCourse,
    lessons: Vec<NewLesson>,
    assignments: Vec<NewAssignment>,
  ) -> Result<CourseGraph, CourseError> {
    // The owner must exist before anything is written
    let owner = self
      .user_repo
      .find_by_id(course.owner_id)
      .await
      .map_err(|e| CourseError::Internal(format!("Failed to verify course owner: {}", e)))?;

    if owner.is_none() {
      return Err(CourseError::OwnerNotFound(course.owner_id));
    }

    let course_entity = Course::new(
      course.owner_id,
      course.title,
      course.description,
      course.image_url,
    );

    let mut lesson_entities = Vec::with_capacity(lessons.len());
    let mut resource_entities = Vec::new();

    for (i, lesson) in lessons.into_iter().enumerate() {
      let lesson_entity = Lesson::new(
        course_entity.id,
        lesson.title,
        lesson.description,
        (i + 1) as i32,
      );

      for resource in lesson.resources {
        resource_entities.push(CourseResource::new(
          course_entity.id,
          lesson_entity.id,
          resource.content,
          resource.resource_type,
        ));
      }

      lesson_entities.push(lesson_entity);
    }

    let assignment_entities = assignments
      .into_iter()
      .map(|a| CourseAssignment::new(course_entity.id, a.title, a.description))
      .collect();

    let graph = CourseGraph {
      course: course_entity,
      lessons: lesson_entities,
      resources: resource_entities,
      assignments: assignment_entities,
    };

    self.course_repo.create(graph).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::User;
  use crate::domain::auth::testing::InMemoryUserRepository;
  use crate::domain::auth::value_objects::UserRole;
  use crate::domain::course::testing::InMemoryCourseRepository;

  async fn owner(user_repo: &InMemoryUserRepository) -> User {
    crate::domain::auth::ports::UserRepository::create(
      user_repo,
      User::new(
        "teacher@example.com".to_string(),
        "Grace".to_string(),
        "Hopper".to_string(),
        "$stub$pw".to_string(),
        UserRole::Instructor,
      ),
    )
    .await
    .unwrap()
  }

  fn composer(
    course_repo: Arc<InMemoryCourseRepository>,
    user_repo: Arc<InMemoryUserRepository>,
  ) -> CourseComposer {
    CourseComposer::new(course_repo, user_repo)
  }

  fn new_course(owner_id: Uuid) -> NewCourse {
    NewCourse {
      owner_id,
      title: CourseTitle::new("Compilers".to_string()).unwrap(),
      description: "From lexing to codegen".to_string(),
      image_url: Some("https://img.example.com/compilers.png".to_string()),
    }
  }

  fn lesson(title: &str, resource_content: &str) -> NewLesson {
    NewLesson {
      title: LessonTitle::new(title.to_string()).unwrap(),
      description: format!("{} in depth", title),
      resources: vec![NewResource {
        content: resource_content.to_string(),
        resource_type: ResourceType::Video,
      }],
    }
  }

  #[tokio::test]
  async fn test_graph_is_built_in_order() {
    let course_repo = Arc::new(InMemoryCourseRepository::new());
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let owner = owner(&user_repo).await;
    let composer = composer(course_repo.clone(), user_repo);

    let graph = composer
      .create_course(
        new_course(owner.id),
        vec![lesson("Lexing", "lexing.mp4"), lesson("Parsing", "parsing.mp4")],
        vec![NewAssignment {
          title: "Write a lexer".to_string(),
          description: "Tokenize arithmetic".to_string(),
        }],
      )
      .await
      .unwrap();

    assert_eq!(graph.lessons.len(), 2);
    assert_eq!(graph.resources.len(), 2);
    assert_eq!(graph.assignments.len(), 1);

    // every child references the course
    assert!(graph.lessons.iter().all(|l| l.course_id == graph.course.id));
    assert!(graph.resources.iter().all(|r| r.course_id == graph.course.id));

    // lessons keep input order; resource i is attached to lesson i
    assert_eq!(graph.lessons[0].position, 1);
    assert_eq!(graph.lessons[1].position, 2);
    assert_eq!(graph.resources[0].lesson_id, graph.lessons[0].id);
    assert_eq!(graph.resources[1].lesson_id, graph.lessons[1].id);
    assert_eq!(graph.resources[0].content, "lexing.mp4");
    assert_eq!(graph.resources[1].content, "parsing.mp4");
  }

  #[tokio::test]
  async fn test_assignments_start_empty() {
    let course_repo = Arc::new(InMemoryCourseRepository::new());
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let owner = owner(&user_repo).await;
    let composer = composer(course_repo, user_repo);

    let graph = composer
      .create_course(
        new_course(owner.id),
        vec![],
        vec![NewAssignment {
          title: "Essay".to_string(),
          description: "500 words".to_string(),
        }],
      )
      .await
      .unwrap();

    assert_eq!(graph.assignments[0].overall_score, 0);
    assert!(graph.assignments[0].submitted_file.is_none());
  }

  #[tokio::test]
  async fn test_unknown_owner_writes_nothing() {
    let course_repo = Arc::new(InMemoryCourseRepository::new());
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let composer = composer(course_repo.clone(), user_repo);

    let missing = Uuid::new_v4();
    let err = composer
      .create_course(new_course(missing), vec![lesson("Lexing", "lexing.mp4")], vec![])
      .await
      .unwrap_err();

    assert!(matches!(err, CourseError::OwnerNotFound(id) if id == missing));
    assert_eq!(course_repo.course_count(), 0);
  }

  #[tokio::test]
  async fn test_created_graph_is_readable_back() {
    let course_repo = Arc::new(InMemoryCourseRepository::new());
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let owner = owner(&user_repo).await;
    let composer = composer(course_repo.clone(), user_repo);

    let graph = composer
      .create_course(new_course(owner.id), vec![lesson("Lexing", "lexing.mp4")], vec![])
      .await
      .unwrap();

    let stored = course_repo.find_by_id(graph.course.id).await.unwrap();
    assert_eq!(stored, Some(graph.course));

    let lessons = course_repo.lessons_for_course(graph.lessons[0].course_id).await.unwrap();
    assert_eq!(lessons, graph.lessons);
  }
}
