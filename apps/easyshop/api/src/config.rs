use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};

use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config pieces.
///
/// Environment variables:
/// - `APP_ENV`, `HOST`, `PORT`
/// - `DATABASE_URL` (required) and the `DB_*` pool settings
/// - `JWT_SECRET` (required), `JWT_ACCESS_TTL_SECS`
/// - `CORS_ALLOWED_ORIGIN` (optional; unset allows any origin)
/// - `RUN_MIGRATIONS` (default: true)
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let jwt = JwtConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            jwt,
            cors,
            environment,
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "config-test-secret-with-more-than-32-chars";

    #[test]
    fn test_loads_with_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/easyshop")),
                ("JWT_SECRET", Some(SECRET)),
                ("PORT", None),
                ("RUN_MIGRATIONS", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 8080);
                assert!(config.run_migrations);
                assert!(config.cors.allowed_origins.is_none());
                assert!(config.environment.is_development());
                assert_eq!(config.app.name, "easyshop_api");
            },
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_vars(
            [("DATABASE_URL", None), ("JWT_SECRET", Some(SECRET))],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_short_jwt_secret_fails() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/easyshop")),
                ("JWT_SECRET", Some("short")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_migrations_can_be_disabled() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/easyshop")),
                ("JWT_SECRET", Some(SECRET)),
                ("RUN_MIGRATIONS", Some("false")),
            ],
            || {
                assert!(!Config::from_env().unwrap().run_migrations);
            },
        );
    }
}
