pub mod auth;
pub mod books;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register),
    )
    .service(
        // The author/category routes are registered ahead of the `{id}` route
        // so their literal segments match before the id pattern.
        web::scope("/books")
            .service(books::get_books)
            .service(books::create_book)
            .service(books::get_books_by_author)
            .service(books::get_books_by_category)
            .service(books::get_book_by_id)
            .service(books::update_book)
            .service(books::delete_book),
    );
}
