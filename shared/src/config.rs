use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DB_HOST").context("DB_HOST is not set")?,
            port: env::var("DB_PORT")
                .ok()
                .map(|p| p.parse())
                .transpose()
                .context("DB_PORT must be a port number")?
                .unwrap_or(5432),
            username: env::var("DB_USER").context("DB_USER is not set")?,
            password: env::var("DB_PASSWORD").context("DB_PASSWORD is not set")?,
            database: env::var("DB_NAME").context("DB_NAME is not set")?,
        };
        Ok(Self { database })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}
