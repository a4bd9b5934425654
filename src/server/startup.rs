use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::{user::UserRepository, wallet::WalletRepository},
    error::AppError,
    model::user::Role,
    service::auth::hash_password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application database.
///
/// Sessions live in the same SQLite file as the application data, stored by
/// tower-sessions' SQLx store with a 7-day inactivity expiry.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to attach to the router
/// - `Err(AppError)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for external API calls.
///
/// Redirects are disabled so a compromised or misconfigured provider URL
/// cannot bounce requests to internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the bootstrap admin account when none exists.
///
/// First boot has no way to log in as an admin, so one is created from the
/// configured credentials. Subsequent boots find the admin and do nothing.
///
/// # Returns
/// - `Ok(())` - An admin exists (created now or previously)
/// - `Err(AppError)` - Database error during lookup or creation
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password);
    let admin = user_repo
        .create(
            config.admin_email.clone(),
            "Administrator".to_string(),
            password_hash,
            Role::Admin,
        )
        .await?;

    // Admin wallet backs manual settlements in support cases
    WalletRepository::new(db).create(admin.id).await?;

    tracing::info!("Created bootstrap admin account {}", config.admin_email);

    Ok(())
}
