pub mod books;
pub mod users;

pub use books::BookRepository;
pub use users::UserRepository;
