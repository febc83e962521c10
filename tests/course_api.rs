mod common;

use course_api::error::ExceptionResponse;
use course_api::models::{Course, NewCourse};
use course_api::repository::CourseRepository;
use serde_json::json;

use common::{id_from_location, post_course, spawn_app};

#[tokio::test]
async fn create_and_fetch_course() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let (_, created) = post_course(
        &client,
        &address,
        &json!({"title": "Spring Boot 4", "description": "Test Desc", "published": true}),
    )
    .await;
    assert_eq!(created.title, "Spring Boot 4");

    // Store was empty, so only this course exists
    let response = client
        .get(format!("{address}/api/courses"))
        .send()
        .await
        .expect("Failed to list courses");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let courses: Vec<Course> = response.json().await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Spring Boot 4");
    assert_eq!(courses[0], created);
}

#[tokio::test]
async fn get_course_by_id_from_location() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let (location, created) = post_course(
        &client,
        &address,
        &json!({"title": "Docker", "description": "Containers", "published": true}),
    )
    .await;

    assert_eq!(location, format!("/api/courses/{}", created.id));
    let id = id_from_location(&location);

    let response = client
        .get(format!("{address}/api/courses/{id}"))
        .send()
        .await
        .expect("Failed to fetch course");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Docker");
    assert_eq!(body["description"], "Containers");
    assert_eq!(body["published"], true);
}

#[tokio::test]
async fn created_course_gets_store_assigned_id() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let (_, created) = post_course(
        &client,
        &address,
        &json!({"id": "client-chosen", "title": "Kubernetes"}),
    )
    .await;

    assert_ne!(created.id, "client-chosen");
    assert_eq!(created.id.len(), 24);
    assert!(created.id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(created.description, None);
    assert!(!created.published);
}

#[tokio::test]
async fn repeated_posts_create_distinct_courses() {
    let (address, repository) = spawn_app().await;
    let client = reqwest::Client::new();
    let body = json!({"title": "Docker", "description": "Containers", "published": true});

    let (_, first) = post_course(&client, &address, &body).await;
    let (_, second) = post_course(&client, &address, &body).await;

    assert_ne!(first.id, second.id);
    assert_eq!(repository.count().await.unwrap(), 2);
}

#[tokio::test]
async fn missing_course_returns_exception_response() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    for id in ["65a1b2c3d4e5f6a7b8c9d0e1", "not-an-object-id"] {
        let response = client
            .get(format!("{address}/api/courses/{id}"))
            .send()
            .await
            .expect("Failed to fetch course");
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        let body: ExceptionResponse = response.json().await.unwrap();
        assert_eq!(body.message, "Course not found");
        assert!(body.details.contains(id));
        assert!(!body.timestamp.is_empty());
    }
}

#[tokio::test]
async fn list_filters_by_title_substring() {
    let (address, repository) = spawn_app().await;
    let client = reqwest::Client::new();

    for title in ["Rust Basics", "Advanced Rust", "Go in Action", "rusty tools"] {
        repository
            .insert(NewCourse::new(title, None, false))
            .await
            .unwrap();
    }

    let response = client
        .get(format!("{address}/api/courses"))
        .query(&[("title", "Rust")])
        .send()
        .await
        .expect("Failed to search courses");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let courses: Vec<Course> = response.json().await.unwrap();
    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Rust Basics", "Advanced Rust"]);
}

#[tokio::test]
async fn search_without_matches_returns_empty_array() {
    let (address, repository) = spawn_app().await;
    let client = reqwest::Client::new();

    repository
        .insert(NewCourse::new("Docker", Some("Containers"), true))
        .await
        .unwrap();

    let response = client
        .get(format!("{address}/api/courses?title=Haskell"))
        .send()
        .await
        .expect("Failed to search courses");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let courses: Vec<Course> = response.json().await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn delete_course_by_id() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let (location, _) = post_course(&client, &address, &json!({"title": "Docker"})).await;
    let keep = post_course(&client, &address, &json!({"title": "Podman"})).await.1;

    let response = client
        .delete(format!("{address}{location}"))
        .send()
        .await
        .expect("Failed to delete course");
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{address}{location}"))
        .send()
        .await
        .expect("Failed to fetch course");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let courses: Vec<Course> = client
        .get(format!("{address}/api/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(courses, vec![keep]);

    // Deleting again, or deleting garbage, is still fine
    for path in [location.as_str(), "/api/courses/not-an-object-id"] {
        let response = client
            .delete(format!("{address}{path}"))
            .send()
            .await
            .expect("Failed to delete course");
        assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn delete_all_courses_empties_list() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    for title in ["Docker", "Kubernetes", "Helm"] {
        post_course(&client, &address, &json!({"title": title})).await;
    }

    let response = client
        .delete(format!("{address}/api/courses"))
        .send()
        .await
        .expect("Failed to delete courses");
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let courses: Vec<Course> = client
        .get(format!("{address}/api/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn invalid_create_payloads_are_rejected() {
    let (address, repository) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/courses"))
        .json(&json!({"title": "", "description": "Nothing"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: ExceptionResponse = response.json().await.unwrap();
    assert_eq!(body.details, "title must not be empty");

    let response = client
        .post(format!("{address}/api/courses"))
        .json(&json!({"description": "No title"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: ExceptionResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Invalid request body");
    assert!(body.details.contains("title"));

    let response = client
        .post(format!("{address}/api/courses"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: ExceptionResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Invalid request body");

    let response = client
        .post(format!("{address}/api/courses"))
        .body(r#"{"title": "No content type"}"#)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: ExceptionResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Invalid request body");

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_routes_and_methods_answer_with_exception_response() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/lessons"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: ExceptionResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Route not found");
    assert!(body.details.contains("/api/lessons"));

    let response = client
        .put(format!("{address}/api/courses/65a1b2c3d4e5f6a7b8c9d0e1"))
        .json(&json!({"title": "Renamed"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    let body: ExceptionResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Method not allowed");
    assert!(body.details.contains("PUT"));
}
