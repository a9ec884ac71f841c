use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::course::{
  Course, CourseAssignment, CourseError, CourseGraph, CourseResource, CourseTitle, Lesson,
  LessonTitle, ResourceType, ports::CourseRepository,
};

/// PostgreSQL implementation of the CourseRepository trait.
///
/// `create` runs the whole graph through one transaction: the insert order
/// (course, lessons, resources, assignments) satisfies the foreign keys, and
/// any failure before commit rolls everything back, including the implicit
/// rollback when the transaction guard is dropped by a cancelled call.
pub struct PostgresCourseRepository {
  pool: PgPool,
}

impl PostgresCourseRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, FromRow)]
struct CourseRow {
  id: Uuid,
  owner_id: Uuid,
  title: String,
  description: String,
  image_url: Option<String>,
  created_at: DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
  type Error = CourseError;

  fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
    Ok(Course {
      id: row.id,
      owner_id: row.owner_id,
      title: CourseTitle::new(row.title)?,
      description: row.description,
      image_url: row.image_url,
      created_at: row.created_at,
    })
  }
}

#[derive(Debug, FromRow)]
struct LessonRow {
  id: Uuid,
  course_id: Uuid,
  title: String,
  description: String,
  position: i32,
}

impl TryFrom<LessonRow> for Lesson {
  type Error = CourseError;

  fn try_from(row: LessonRow) -> Result<Self, Self::Error> {
    Ok(Lesson {
      id: row.id,
      course_id: row.course_id,
      title: LessonTitle::new(row.title)?,
      description: row.description,
      position: row.position,
    })
  }
}

#[derive(Debug, FromRow)]
struct ResourceRow {
  id: Uuid,
  course_id: Uuid,
  lesson_id: Uuid,
  content: String,
  resource_type: String,
}

impl TryFrom<ResourceRow> for CourseResource {
  type Error = CourseError;

  fn try_from(row: ResourceRow) -> Result<Self, Self::Error> {
    Ok(CourseResource {
      id: row.id,
      course_id: row.course_id,
      lesson_id: row.lesson_id,
      content: row.content,
      resource_type: ResourceType::from_str(&row.resource_type)?,
    })
  }
}

#[derive(Debug, FromRow)]
struct AssignmentRow {
  id: Uuid,
  course_id: Uuid,
  title: String,
  description: String,
  overall_score: i32,
  submitted_file: Option<String>,
}

impl From<AssignmentRow> for CourseAssignment {
  fn from(row: AssignmentRow) -> Self {
    CourseAssignment {
      id: row.id,
      course_id: row.course_id,
      title: row.title,
      description: row.description,
      overall_score: row.overall_score,
      submitted_file: row.submitted_file,
    }
  }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
  async fn create(&self, graph: CourseGraph) -> Result<CourseGraph, CourseError> {
    let mut tx = self.pool.begin().await?;

    sqlx::query(
      r#"
            INSERT INTO courses (id, owner_id, title, description, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
    )
    .bind(graph.course.id)
    .bind(graph.course.owner_id)
    .bind(graph.course.title.value())
    .bind(&graph.course.description)
    .bind(&graph.course.image_url)
    .bind(graph.course.created_at)
    .execute(&mut *tx)
    .await?;

    for lesson in &graph.lessons {
      sqlx::query(
        r#"
                INSERT INTO lessons (id, course_id, title, description, position)
                VALUES ($1, $2, $3, $4, $5)
                "#,
      )
      .bind(lesson.id)
      .bind(lesson.course_id)
      .bind(lesson.title.value())
      .bind(&lesson.description)
      .bind(lesson.position)
      .execute(&mut *tx)
      .await?;
    }

    for resource in &graph.resources {
      sqlx::query(
        r#"
                INSERT INTO course_resources (id, course_id, lesson_id, content, resource_type)
                VALUES ($1, $2, $3, $4, $5)
                "#,
      )
      .bind(resource.id)
      .bind(resource.course_id)
      .bind(resource.lesson_id)
      .bind(&resource.content)
      .bind(resource.resource_type.as_str())
      .execute(&mut *tx)
      .await?;
    }

    for assignment in &graph.assignments {
      sqlx::query(
        r#"
                INSERT INTO course_assignments
                    (id, course_id, title, description, overall_score, submitted_file)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
      )
      .bind(assignment.id)
      .bind(assignment.course_id)
      .bind(&assignment.title)
      .bind(&assignment.description)
      .bind(assignment.overall_score)
      .bind(&assignment.submitted_file)
      .execute(&mut *tx)
      .await?;
    }

    tx.commit().await?;

    tracing::debug!(course_id = %graph.course.id, lessons = graph.lessons.len(), "Created course graph");

    Ok(graph)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, CourseError> {
    let row = sqlx::query_as::<_, CourseRow>(
      r#"
            SELECT id, owner_id, title, description, image_url, created_at
            FROM courses
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn lessons_for_course(&self, course_id: Uuid) -> Result<Vec<Lesson>, CourseError> {
    let rows = sqlx::query_as::<_, LessonRow>(
      r#"
            SELECT id, course_id, title, description, position
            FROM lessons
            WHERE course_id = $1
            ORDER BY position ASC
            "#,
    )
    .bind(course_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn resources_for_course(
    &self,
    course_id: Uuid,
  ) -> Result<Vec<CourseResource>, CourseError> {
    let rows = sqlx::query_as::<_, ResourceRow>(
      r#"
            SELECT id, course_id, lesson_id, content, resource_type
            FROM course_resources
            WHERE course_id = $1
            "#,
    )
    .bind(course_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn assignments_for_course(
    &self,
    course_id: Uuid,
  ) -> Result<Vec<CourseAssignment>, CourseError> {
    let rows = sqlx::query_as::<_, AssignmentRow>(
      r#"
            SELECT id, course_id, title, description, overall_score, submitted_file
            FROM course_assignments
            WHERE course_id = $1
            "#,
    )
    .bind(course_id)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(CourseAssignment::from).collect())
  }
}
