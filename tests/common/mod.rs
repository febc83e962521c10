#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use course_api::models::{Course, NewCourse};
use course_api::repository::{CourseRepository, InMemoryCourseRepository, RepositoryError};
use course_api::services::CanaryHealthIndicator;
use course_api::utils::constant::HEALTH_FAILURE_ENV_VAR;
use reqwest::header::LOCATION;
use serde_json::Value;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("course_api=debug")
            .with_test_writer()
            .init();
    });
}

/// A canary indicator whose failure trigger is a flag owned by the test
/// instead of the process environment.
pub fn switchable_canary() -> (CanaryHealthIndicator, Arc<AtomicBool>) {
    let trigger = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&trigger);
    let canary = CanaryHealthIndicator::with_lookup(HEALTH_FAILURE_ENV_VAR, move |_| {
        flag.load(Ordering::SeqCst).then(String::new)
    });
    (canary, trigger)
}

/// A course store that cannot be reached.
///
/// Every operation fails. With `answers_ping` set, `ping` still succeeds so
/// the failure only shows up on the first real query.
#[derive(Debug, Default)]
pub struct UnreachableCourseRepository {
    pub answers_ping: bool,
}

impl UnreachableCourseRepository {
    fn unreachable<T>() -> Result<T, RepositoryError> {
        Err(RepositoryError::UnexpectedId("store unreachable".to_string()))
    }
}

#[async_trait]
impl CourseRepository for UnreachableCourseRepository {
    async fn insert(&self, _course: NewCourse) -> Result<Course, RepositoryError> {
        Self::unreachable()
    }

    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError> {
        Self::unreachable()
    }

    async fn find_by_title_containing(&self, _title: &str) -> Result<Vec<Course>, RepositoryError> {
        Self::unreachable()
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Course>, RepositoryError> {
        Self::unreachable()
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), RepositoryError> {
        Self::unreachable()
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        Self::unreachable()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Self::unreachable()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        if self.answers_ping {
            Ok(())
        } else {
            Self::unreachable()
        }
    }
}

/// Serves the router on a random local port and waits until it answers.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn serve(
    repository: Arc<dyn CourseRepository>,
    canary: CanaryHealthIndicator,
) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = course_api::app_with_repository(repository, Some(canary));
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Spawns the application over a fresh in-memory repository.
pub async fn spawn_app() -> (String, Arc<InMemoryCourseRepository>) {
    let repository = Arc::new(InMemoryCourseRepository::new());
    let (canary, _) = switchable_canary();
    let address = serve(Arc::clone(&repository) as Arc<dyn CourseRepository>, canary).await;
    (address, repository)
}

/// Posts a course and returns the `Location` header and the created course.
pub async fn post_course(client: &reqwest::Client, address: &str, body: &Value) -> (String, Course) {
    let response = client
        .post(format!("{address}/api/courses"))
        .json(body)
        .send()
        .await
        .expect("Failed to create course");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let location = response
        .headers()
        .get(LOCATION)
        .expect("Missing Location header")
        .to_str()
        .expect("Location header is not ASCII")
        .to_string();

    let course: Course = response
        .json()
        .await
        .expect("Failed to parse created course");

    (location, course)
}

/// Extracts the id from a `/api/courses/{id}` location.
pub fn id_from_location(location: &str) -> &str {
    &location[location.rfind('/').map_or(0, |pos| pos + 1)..]
}
