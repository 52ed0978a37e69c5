use crate::{
    error::AppError,
    models::{Book, BookInput},
    repositories::BookRepository,
};
use actix_web::{delete, get, http::header, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Retrieves the list of all books.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Book` objects (empty if the catalog is empty).
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn get_books(books: web::Data<BookRepository>) -> Result<impl Responder, AppError> {
    log::info!("Fetching all books");
    let books = books.get_books().await?;
    log::info!("Successfully fetched {} books", books.len());
    Ok(HttpResponse::Ok().json(books))
}

/// Retrieves a specific book by its ID.
///
/// ## Path Parameters:
/// - `id`: The identifier of the book to retrieve.
///
/// ## Responses:
/// - `200 OK`: Returns the `Book` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no book has the given identifier.
/// - `500 Internal Server Error`: For database errors.
#[get("/{id}")]
pub async fn get_book_by_id(
    books: web::Data<BookRepository>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = book_id.into_inner();
    log::info!("Fetching book with id {}", id);

    match books.get_book_by_id(id).await? {
        Some(book) => {
            log::info!("Successfully fetched book with id {}", id);
            Ok(HttpResponse::Ok().json(book))
        }
        None => {
            log::warn!("Book with id {} not found", id);
            Err(AppError::NotFound("Book not found".into()))
        }
    }
}

/// Retrieves books by the author's name (exact match).
///
/// ## Path Parameters:
/// - `name`: The author name to filter by.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of matching `Book` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no books match the author.
/// - `500 Internal Server Error`: For database errors.
#[get("/author/{name}")]
pub async fn get_books_by_author(
    books: web::Data<BookRepository>,
    author: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let author = author.into_inner();
    log::info!("Fetching books by author '{}'", author);

    let matches = books.get_books_by_author(&author).await?;
    if matches.is_empty() {
        log::warn!("No books found for author '{}'", author);
        return Err(AppError::NotFound("No books found for this author".into()));
    }

    log::info!(
        "Successfully fetched {} books by author '{}'",
        matches.len(),
        author
    );
    Ok(HttpResponse::Ok().json(matches))
}

/// Retrieves books by category (exact match).
///
/// ## Path Parameters:
/// - `category`: The category to filter by.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of matching `Book` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no books match the category.
/// - `500 Internal Server Error`: For database errors.
#[get("/category/{category}")]
pub async fn get_books_by_category(
    books: web::Data<BookRepository>,
    category: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let category = category.into_inner();
    log::info!("Fetching books in category '{}'", category);

    let matches = books.get_books_by_category(&category).await?;
    if matches.is_empty() {
        log::warn!("No books found in category '{}'", category);
        return Err(AppError::NotFound("No books found in this category".into()));
    }

    log::info!(
        "Successfully fetched {} books in category '{}'",
        matches.len(),
        category
    );
    Ok(HttpResponse::Ok().json(matches))
}

/// Creates a new book.
///
/// ## Request Body:
/// A JSON object matching `BookInput`: `title`, `author`, `language`,
/// `category`, and `published_year`. The identifier is assigned by the store.
///
/// ## Responses:
/// - `201 Created`: Returns the created `Book` as JSON, with a `Location`
///   header pointing at the get-by-id endpoint.
/// - `400 Bad Request`: If the payload fails validation.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_book(
    books: web::Data<BookRepository>,
    book_data: web::Json<BookInput>,
) -> Result<impl Responder, AppError> {
    log::info!("Creating a new book titled '{}'", book_data.title);

    // Validate input
    if let Err(e) = book_data.validate() {
        log::warn!("Invalid payload for book creation: {}", e);
        return Err(e.into());
    }

    let book = books.create_book(&book_data).await?;
    log::info!("Successfully created book with id {}", book.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/books/{}", book.id)))
        .json(book))
}

/// Updates an existing book.
///
/// The payload carries the full entity. The identifier in the path must match
/// the identifier in the body; a mismatch is rejected before any store access.
///
/// ## Path Parameters:
/// - `id`: The identifier of the book to update.
///
/// ## Responses:
/// - `204 No Content`: On successful update.
/// - `400 Bad Request`: If the path and body identifiers differ, or the payload
///   fails validation.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no book has the given identifier.
/// - `500 Internal Server Error`: For database errors.
#[put("/{id}")]
pub async fn update_book(
    books: web::Data<BookRepository>,
    book_id: web::Path<i32>,
    book_data: web::Json<Book>,
) -> Result<impl Responder, AppError> {
    let id = book_id.into_inner();
    log::info!("Updating book with id {}", id);

    if id != book_data.id {
        log::warn!(
            "Path id {} does not match body id {}",
            id,
            book_data.id
        );
        return Err(AppError::BadRequest(
            "The id in the URL does not match the id in the book object".into(),
        ));
    }

    if let Err(e) = book_data.validate() {
        log::warn!("Invalid payload for book update: {}", e);
        return Err(e.into());
    }

    if books.get_book_by_id(id).await?.is_none() {
        log::warn!("Book with id {} not found", id);
        return Err(AppError::NotFound(
            "The book with the specified id does not exist".into(),
        ));
    }

    books.update_book(&book_data).await?;
    log::info!("Successfully updated book with id {}", id);

    Ok(HttpResponse::NoContent().finish())
}

/// Deletes a book by its ID.
///
/// ## Path Parameters:
/// - `id`: The identifier of the book to delete.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no book has the given identifier.
/// - `500 Internal Server Error`: For database errors.
#[delete("/{id}")]
pub async fn delete_book(
    books: web::Data<BookRepository>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = book_id.into_inner();
    log::info!("Deleting book with id {}", id);

    if books.get_book_by_id(id).await?.is_none() {
        log::warn!("Book with id {} not found", id);
        return Err(AppError::NotFound("Book not found".into()));
    }

    books.delete_book(id).await?;
    log::info!("Successfully deleted book with id {}", id);

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use serde_json::json;
    use sqlx::PgPool;

    // A lazy pool pointing at an unreachable address: any handler that
    // touches the store through it fails with a 500, so a 400 response
    // proves the request was rejected before any store access.
    fn unreachable_pool() -> PgPool {
        PgPool::connect_lazy("postgres://127.0.0.1:1/unreachable").unwrap()
    }

    #[actix_rt::test]
    async fn test_update_id_mismatch_rejected_before_store_access() {
        let repo = BookRepository::new(unreachable_pool());
        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(repo))
                .service(web::scope("/books").service(update_book)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/books/1")
            .set_json(&json!({
                "id": 2,
                "title": "Dune",
                "author": "Herbert",
                "language": "English",
                "category": "Sci-Fi",
                "published_year": 1965
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_create_invalid_payload_rejected_before_store_access() {
        let repo = BookRepository::new(unreachable_pool());
        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(repo))
                .service(web::scope("/books").service(create_book)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/books")
            .set_json(&json!({
                "title": "Dune",
                "author": "Herbert",
                "language": "English",
                "category": "Sci-Fi",
                "published_year": 1200
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_update_invalid_payload_rejected_before_store_access() {
        let repo = BookRepository::new(unreachable_pool());
        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(repo))
                .service(web::scope("/books").service(update_book)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/books/1")
            .set_json(&json!({
                "id": 1,
                "title": "",
                "author": "Herbert",
                "language": "English",
                "category": "Sci-Fi",
                "published_year": 1965
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
