use crate::config::Settings;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;

/// Builds the shared connection pool. Construction is lazy: no connection is
/// opened until the first acquire, so startup cannot fail here.
pub fn create_pool(settings: &Settings) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&settings.db_host)
        .port(settings.db_port)
        .username(&settings.db_user)
        .password(&settings.db_password)
        .database(&settings.db_name);

    MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy_with(options)
}

/// Startup liveness probe: take one connection from the pool and hand it
/// straight back.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let conn = pool.acquire().await?;
    drop(conn);
    Ok(())
}
