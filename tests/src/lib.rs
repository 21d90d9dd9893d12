use std::env;

use rand::{distributions::Alphanumeric, Rng};

pub fn base_url() -> String {
    env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn unique_email() -> String {
    format!("it_{}@example.com", random_string(10))
}

pub fn unique_title(prefix: &str) -> String {
    format!("{} {}", prefix, random_string(8))
}
