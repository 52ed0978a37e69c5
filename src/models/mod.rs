pub mod book;
pub mod user;

pub use book::{Book, BookInput};
pub use user::User;
