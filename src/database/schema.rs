use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;

// "group" is quoted everywhere because GROUP is a keyword.
pub const CREATE_GROUP_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "group" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)"#;

pub const CREATE_STUDENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    group_id INTEGER,
    FOREIGN KEY (group_id) REFERENCES "group" (id)
)"#;

pub const CREATE_LECTURER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS lecturer (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)"#;

pub const CREATE_SUBJECT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS subject (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)"#;

pub const CREATE_SCHEDULE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schedule (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    subject_id INTEGER,
    lecturer_id INTEGER,
    FOREIGN KEY (subject_id) REFERENCES subject (id),
    FOREIGN KEY (lecturer_id) REFERENCES lecturer (id)
)"#;

/// Creation order: group, student, lecturer, subject, schedule.
pub const SCHEMA: [&str; 5] = [
    CREATE_GROUP_TABLE,
    CREATE_STUDENT_TABLE,
    CREATE_LECTURER_TABLE,
    CREATE_SUBJECT_TABLE,
    CREATE_SCHEDULE_TABLE,
];

/// Issues every `CREATE TABLE IF NOT EXISTS`, stopping at the first failure.
#[instrument(skip(pool))]
pub async fn create_tables(pool: &Pool<Sqlite>) -> Result<(), AppError> {
    info!("Creating tables");
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
