use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;
use crate::movies::MovieModel;
use crate::users::UserInfoModel;

/// Per-call query timeout used when none is configured.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Open a connection pool sized from the config.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Apply the embedded migrations from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    info!("running database migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("run migrations")?;
    Ok(())
}

/// All data-access models sharing one pool and one query timeout.
#[derive(Clone)]
pub struct Models {
    pub users: UserInfoModel,
    pub movies: MovieModel,
}

impl Models {
    pub fn new(db: PgPool, timeout: Duration) -> Self {
        Self {
            users: UserInfoModel::new(db.clone(), timeout),
            movies: MovieModel::new(db, timeout),
        }
    }

    pub fn with_default_timeout(db: PgPool) -> Self {
        Self::new(db, DEFAULT_QUERY_TIMEOUT)
    }

    /// Build the bundle from environment configuration, the way the
    /// surrounding application boots.
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let db = connect(&config).await?;
        Ok(Self::new(db, config.query_timeout()))
    }
}
