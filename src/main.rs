use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnhub::{
  adapters::http::{configure_auth_routes, configure_course_routes, configure_user_routes},
  application::auth::{DeleteUserUseCase, ListUsersUseCase, LoginUseCase, SignUpUseCase},
  application::course::CreateCourseUseCase,
  domain::auth::services::AccountService,
  domain::course::CourseComposer,
  infrastructure::{
    config::Config,
    persistence::postgres::{PostgresCourseRepository, PostgresUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "learnhub=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting learnhub");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let course_repo = Arc::new(PostgresCourseRepository::new(db_pool.clone()));

  // Initialize security services
  let password_hasher =
    Arc::new(Argon2PasswordHasher::new().expect("Failed to create password hasher"));

  // Initialize domain services
  let account_service = Arc::new(AccountService::new(user_repo.clone(), password_hasher));
  let course_composer = Arc::new(CourseComposer::new(course_repo.clone(), user_repo.clone()));

  // Initialize use cases
  let sign_up_use_case = Arc::new(SignUpUseCase::new(account_service.clone()));
  let login_use_case = Arc::new(LoginUseCase::new(account_service.clone()));
  let list_users_use_case = Arc::new(ListUsersUseCase::new(account_service.clone()));
  let delete_user_use_case = Arc::new(DeleteUserUseCase::new(account_service.clone()));
  let create_course_use_case = Arc::new(CreateCourseUseCase::new(course_composer.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Configure auth API routes
      .service(web::scope("/api/v1/auth").configure(|cfg| {
        configure_auth_routes(cfg, sign_up_use_case.clone(), login_use_case.clone())
      }))
      // Configure user administration routes
      .service(web::scope("/api/v1/users").configure(|cfg| {
        configure_user_routes(
          cfg,
          list_users_use_case.clone(),
          delete_user_use_case.clone(),
        )
      }))
      // Configure course routes
      .service(
        web::scope("/api/v1/courses")
          .configure(|cfg| configure_course_routes(cfg, create_course_use_case.clone())),
      )
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
