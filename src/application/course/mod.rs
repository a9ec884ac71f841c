pub mod create_course;

pub use create_course::{
  CreateAssignmentDto, CreateCourseCommand, CreateCourseResponse, CreateCourseUseCase,
  CreateLessonDto, CreateResourceDto,
};
