//! Runtime configuration for the bookstore server, loaded from the
//! environment (a `.env` file is honored via `dotenv` in `main`).
//!
//! JWT settings (`JWT_SECRET`, `JWT_ISSUER`, `JWT_AUDIENCE`) are read at the
//! point of use in `auth::token`, not here.

use std::env;

pub struct Config {
    /// PostgreSQL connection string for the catalog database. Required.
    pub database_url: String,
    /// Port to bind the HTTP server to. Defaults to 8080.
    pub server_port: u16,
    /// Host address to bind to. Defaults to 127.0.0.1.
    pub server_host: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }

    /// Base URL the server is reachable at, for startup logging.
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
