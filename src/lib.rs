//! learnhub - learning management backend
//!
//! Layered hexagonal architecture:
//! - `domain`: entities, value objects, ports and domain services
//! - `application`: use cases orchestrating the domain
//! - `infrastructure`: PostgreSQL repositories, password hashing, config
//! - `adapters`: HTTP delivery

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
