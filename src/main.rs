use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use bookstore::auth::AuthMiddleware;
use bookstore::config::Config;
use bookstore::repositories::{BookRepository, UserRepository};
use bookstore::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let book_repository = BookRepository::new(pool.clone());
    let user_repository = UserRepository::new(pool.clone());

    log::info!("Starting bookstore server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(book_repository.clone()))
            .app_data(web::Data::new(user_repository.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
