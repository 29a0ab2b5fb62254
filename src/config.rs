// Configuration is read once at startup from the environment (and `.env`):
// - Database connection string and pool size
// - Server listening address/port
// - Upper bound on the requested page size

use dotenv::dotenv;
use std::env;

pub const DEFAULT_MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub max_page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data.db".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().unwrap_or(5))
            .unwrap_or(5);
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let max_page_size = env::var("MAX_PAGE_SIZE")
            .map(|v| v.parse().unwrap_or(DEFAULT_MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_MAX_PAGE_SIZE)
            .max(1);

        Self {
            database_url,
            db_max_connections,
            server_host,
            server_port,
            max_page_size,
        }
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
