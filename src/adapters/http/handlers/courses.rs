use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CreateCourseRequest, CreateCourseResponse},
  errors::ApiError,
};
use crate::application::course::{
  CreateAssignmentDto, CreateCourseCommand, CreateCourseUseCase, CreateLessonDto,
  CreateResourceDto,
};

/// Handler for course creation
///
/// POST /api/v1/courses
/// Body: CreateCourseRequest (JSON), course fields plus three ordered lists;
/// resources[i] belongs to lessons[i] and the lists must be the same length.
/// Response: CreateCourseResponse (JSON) with status 201
pub async fn create_course_handler(
  request: web::Json<CreateCourseRequest>,
  use_case: web::Data<Arc<CreateCourseUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();

  let command = CreateCourseCommand {
    owner_id: request.owner_id,
    title: request.title,
    description: request.description,
    image_url: request.image_url,
    lessons: request
      .lessons
      .into_iter()
      .map(|l| CreateLessonDto {
        title: l.title,
        description: l.description,
      })
      .collect(),
    resources: request
      .resources
      .into_iter()
      .map(|r| CreateResourceDto {
        content: r.content,
        resource_type: r.resource_type,
      })
      .collect(),
    assignments: request
      .assignments
      .into_iter()
      .map(|a| CreateAssignmentDto {
        title: a.title,
        description: a.description,
        overall_score: a.overall_score,
        submitted_file: a.submitted_file,
      })
      .collect(),
  };

  let response = use_case.execute(command).await?;

  let api_response = CreateCourseResponse {
    course_id: response.course_id,
    lesson_ids: response.lesson_ids,
    created_at: response.created_at,
  };

  Ok(HttpResponse::Created().json(api_response))
}
