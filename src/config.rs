use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        gnews_api_key: get_env("GNEWS_API_KEY"),
        gnews_base_url: get_env_or_default("GNEWS_BASE_URL", "https://gnews.io/api/v4"),
        host: get_env_or_default("HOST", "0.0.0.0"),
        port: parse_port(&get_env_or_default("PORT", "3000")),
        static_dir: get_env_or_default("STATIC_DIR", "static"),
    }
});

pub struct Config {
    pub gnews_api_key: String,
    pub gnews_base_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

fn get_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(value: &str) -> u16 {
    value
        .parse()
        .unwrap_or_else(|_| panic!("PORT must be a number between 1 and 65535, got: {value}"))
}
