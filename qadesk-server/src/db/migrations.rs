//! Schema migrations for the users and qas tables
//!
//! Every statement is idempotent so this runs on each startup.

use sqlx::PgPool;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        email TEXT NOT NULL UNIQUE CHECK (email <> ''),
        provider TEXT NOT NULL DEFAULT ''
    )
"#;

// user_email deliberately carries no REFERENCES clause: items may name an
// email before (or without) its user existing.
const CREATE_QAS: &str = r#"
    CREATE TABLE IF NOT EXISTS qas (
        id BIGSERIAL PRIMARY KEY,
        question TEXT NOT NULL DEFAULT '',
        answer TEXT NOT NULL DEFAULT '',
        user_email TEXT NOT NULL
    )
"#;

const CREATE_QAS_USER_EMAIL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_qas_user_email ON qas (user_email)";

const CREATE_CASCADE_FUNCTION: &str = r#"
    CREATE OR REPLACE FUNCTION qadesk_cascade_user_items() RETURNS trigger AS $$
    BEGIN
        DELETE FROM qas WHERE user_email = OLD.email;
        RETURN OLD;
    END;
    $$ LANGUAGE plpgsql
"#;

const DROP_CASCADE_TRIGGER: &str = "DROP TRIGGER IF EXISTS users_cascade_items ON users";

const CREATE_CASCADE_TRIGGER: &str = r#"
    CREATE TRIGGER users_cascade_items
    AFTER DELETE ON users
    FOR EACH ROW EXECUTE FUNCTION qadesk_cascade_user_items()
"#;

/// Run all migrations in a single transaction.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    let mut tx = pool.begin().await?;
    for statement in [
        CREATE_USERS,
        CREATE_QAS,
        CREATE_QAS_USER_EMAIL_INDEX,
        CREATE_CASCADE_FUNCTION,
        DROP_CASCADE_TRIGGER,
        CREATE_CASCADE_TRIGGER,
    ] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
