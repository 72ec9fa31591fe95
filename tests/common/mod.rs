//! Shared test support: in-memory repository fakes and router plumbing.
//!
//! The validation middleware receives its repositories through `AppState`,
//! so the whole HTTP surface can be exercised against these fakes without a
//! running database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use books_api::api::create_router;
use books_api::domain::{Book, CreateBook, NewUser, User};
use books_api::errors::{AppError, AppResult};
use books_api::infra::{BookRepository, Database, UserRepository};
use books_api::services::{Authenticator, BookManager};
use books_api::{AppState, Config};

/// In-memory stand-in for the user store.
#[derive(Default, Clone)]
pub struct InMemoryUsers {
    records: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, user: User) {
        self.records.lock().unwrap().push(user);
    }

    pub fn all(&self) -> Vec<User> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_phone_suffix(&self, suffix: &str) -> AppResult<Option<User>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|u| u.phone.ends_with(suffix)).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            title: new_user.title,
            name: new_user.name,
            phone: new_user.phone,
            email: new_user.email,
            password_hash: new_user.password_hash,
            address: new_user.address,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

/// In-memory stand-in for the book store with soft delete semantics.
#[derive(Default, Clone)]
pub struct InMemoryBooks {
    records: Arc<Mutex<Vec<Book>>>,
}

impl InMemoryBooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, book: Book) {
        self.records.lock().unwrap().push(book);
    }

    pub fn all(&self) -> Vec<Book> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookRepository for InMemoryBooks {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|b| b.id == id && !b.is_deleted())
            .cloned())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|b| b.title == title).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn create(&self, new_book: CreateBook) -> AppResult<Book> {
        let now = Utc::now();
        let book = Book {
            id: Uuid::new_v4(),
            title: new_book.title,
            excerpt: new_book.excerpt,
            user_id: new_book.user_id,
            isbn: new_book.isbn,
            category: new_book.category,
            subcategory: new_book.subcategory,
            released_at: new_book.released_at,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.records.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut records = self.records.lock().unwrap();
        let book = records
            .iter_mut()
            .find(|b| b.id == id && !b.is_deleted())
            .ok_or_else(|| AppError::not_found("no book exists with this bookId"))?;
        book.deleted_at = Some(Utc::now());
        Ok(())
    }
}

/// Build an application state wired to fresh in-memory fakes.
pub fn test_state() -> (AppState, InMemoryUsers, InMemoryBooks) {
    let users = InMemoryUsers::new();
    let books = InMemoryBooks::new();

    let users_repo: Arc<dyn UserRepository> = Arc::new(users.clone());
    let books_repo: Arc<dyn BookRepository> = Arc::new(books.clone());

    let config = Config::with_secret("test-secret-key-for-testing-only-32chars");
    let auth_service = Arc::new(Authenticator::new(users_repo.clone(), config));
    let book_service = Arc::new(BookManager::new(books_repo.clone()));

    // An inert connection satisfies the Database handle; no query reaches it.
    let database = Arc::new(Database::from_connection(DatabaseConnection::default()));

    let state = AppState::new(auth_service, book_service, users_repo, books_repo, database);
    (state, users, books)
}

/// Build a router over fresh in-memory fakes.
pub fn test_app() -> (Router, InMemoryUsers, InMemoryBooks) {
    let (state, users, books) = test_state();
    (create_router(state), users, books)
}

/// Fire a request and collect `(status, parsed JSON body)`.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };
    (status, json)
}

/// POST a JSON value.
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// GET a path.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// DELETE a path.
pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// A persisted user for seeding duplicate scenarios.
pub fn sample_user(email: &str, phone: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        title: "Mr".to_string(),
        name: "EXISTING USER".to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        password_hash: "hashed".to_string(),
        address: None,
        created_at: now,
        updated_at: now,
    }
}

/// A persisted book for seeding duplicate scenarios.
pub fn sample_book(user_id: Uuid, title: &str, isbn: &str) -> Book {
    let now = Utc::now();
    Book {
        id: Uuid::new_v4(),
        title: title.to_string(),
        excerpt: "An excerpt.".to_string(),
        user_id,
        isbn: isbn.to_string(),
        category: "fiction".to_string(),
        subcategory: "novel".to_string(),
        released_at: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
