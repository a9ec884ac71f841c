//! In-memory course store for unit tests. Applies the same referential rules
//! as the SQL schema and stores a graph all-or-nothing, mirroring the
//! transactional contract of the real repository.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

use super::entities::{Course, CourseAssignment, CourseGraph, CourseResource, Lesson};
use super::errors::CourseError;
use super::ports::CourseRepository;

#[derive(Default)]
struct State {
  courses: Vec<Course>,
  lessons: Vec<Lesson>,
  resources: Vec<CourseResource>,
  assignments: Vec<CourseAssignment>,
}

pub struct InMemoryCourseRepository {
  state: Mutex<State>,
}

impl InMemoryCourseRepository {
  pub fn new() -> Self {
    Self {
      state: Mutex::new(State::default()),
    }
  }

  pub fn course_count(&self) -> usize {
    self.state.lock().unwrap().courses.len()
  }
}

impl Default for InMemoryCourseRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
  async fn create(&self, graph: CourseGraph) -> Result<CourseGraph, CourseError> {
    let mut state = self.state.lock().unwrap();

    // referential checks before any mutation, like FK constraints inside a
    // transaction: nothing lands unless the whole graph is consistent
    let lesson_ids: HashSet<Uuid> = graph.lessons.iter().map(|l| l.id).collect();
    for resource in &graph.resources {
      if !lesson_ids.contains(&resource.lesson_id) {
        return Err(CourseError::Internal(format!(
          "resource {} references unknown lesson {}",
          resource.id, resource.lesson_id
        )));
      }
    }

    state.courses.push(graph.course.clone());
    state.lessons.extend(graph.lessons.iter().cloned());
    state.resources.extend(graph.resources.iter().cloned());
    state.assignments.extend(graph.assignments.iter().cloned());

    Ok(graph)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, CourseError> {
    let state = self.state.lock().unwrap();
    Ok(state.courses.iter().find(|c| c.id == id).cloned())
  }

  async fn lessons_for_course(&self, course_id: Uuid) -> Result<Vec<Lesson>, CourseError> {
    let state = self.state.lock().unwrap();
    let mut lessons: Vec<Lesson> = state
      .lessons
      .iter()
      .filter(|l| l.course_id == course_id)
      .cloned()
      .collect();
    lessons.sort_by_key(|l| l.position);
    Ok(lessons)
  }

  async fn resources_for_course(
    &self,
    course_id: Uuid,
  ) -> Result<Vec<CourseResource>, CourseError> {
    let state = self.state.lock().unwrap();
    Ok(
      state
        .resources
        .iter()
        .filter(|r| r.course_id == course_id)
        .cloned()
        .collect(),
    )
  }

  async fn assignments_for_course(
    &self,
    course_id: Uuid,
  ) -> Result<Vec<CourseAssignment>, CourseError> {
    let state = self.state.lock().unwrap();
    Ok(
      state
        .assignments
        .iter()
        .filter(|a| a.course_id == course_id)
        .cloned()
        .collect(),
    )
  }
}
