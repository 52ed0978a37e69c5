use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a book entity as stored in the database and returned by the API.
///
/// Update requests carry the full entity, id included, so the same validation
/// rules apply as for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Book {
    /// Unique identifier for the book, assigned by the database.
    /// Immutable once assigned.
    pub id: i32,
    /// The title of the book. Required, at most 100 characters.
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    /// The author of the book. Required, at most 50 characters.
    #[validate(length(min = 1, max = 50, message = "Author must be 1-50 characters"))]
    pub author: String,
    /// The language the book is written in. Required, at most 20 characters.
    #[validate(length(min = 1, max = 20, message = "Language must be 1-20 characters"))]
    pub language: String,
    /// The category the book belongs to. Required, at most 50 characters.
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,
    /// The year the book was published. Must be between 1450 and 2100.
    #[validate(range(min = 1450, max = 2100, message = "Published year must be between 1450 and 2100"))]
    pub published_year: i32,
}

/// Input structure for creating a book. The identifier is assigned by the store,
/// so it is absent here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookInput {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "Author must be 1-50 characters"))]
    pub author: String,

    #[validate(length(min = 1, max = 20, message = "Language must be 1-20 characters"))]
    pub language: String,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,

    #[validate(range(min = 1450, max = 2100, message = "Published year must be between 1450 and 2100"))]
    pub published_year: i32,
}
