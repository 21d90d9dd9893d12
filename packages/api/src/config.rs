use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub mongo_db_name: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            mongo_url: env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "boardgames".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}
