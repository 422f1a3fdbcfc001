use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Once;

use sqlx::{Pool, Sqlite, SqliteExecutor, sqlite::SqliteConnectOptions};
use tracing::log::LevelFilter;

use crate::database::{create_tables, file_options, open_store};
use crate::seed::insert_sample_data;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

/// In-memory store with no tables.
pub async fn setup_empty_db() -> Pool<Sqlite> {
    init_logging();
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to build in-memory options")
        .foreign_keys(false);
    open_store(options)
        .await
        .expect("Failed to create in-memory database")
}

pub async fn setup_test_db() -> Pool<Sqlite> {
    let pool = setup_empty_db().await;
    create_tables(&pool).await.expect("Failed to create tables");
    pool
}

pub async fn setup_seeded_db() -> Pool<Sqlite> {
    let pool = setup_test_db().await;
    insert_sample_data(&pool)
        .await
        .expect("Failed to insert sample data");
    pool
}

/// Reopens a store file written by a run.
pub async fn open_file_db(path: &Path) -> Pool<Sqlite> {
    open_store(file_options(path))
        .await
        .expect("Failed to open store file")
}

pub fn console_text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("Console output was not UTF-8")
}

/// A store file under the OS temp dir, removed on drop.
pub struct TempStore {
    pub path: PathBuf,
}

impl TempStore {
    pub fn new() -> Self {
        init_logging();
        let path = std::env::temp_dir().join(format!("homework-{}.db", uuid::Uuid::new_v4()));
        Self { path }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub group_id: Option<i64>,
}

/// Lecturer and subject rows share this shape.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct NamedRow {
    pub id: i64,
    pub name: String,
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLink {
    pub id: i64,
    pub subject_id: Option<i64>,
    pub lecturer_id: Option<i64>,
}

pub async fn get_groups(conn: impl SqliteExecutor<'_>) -> Result<Vec<Group>, sqlx::Error> {
    sqlx::query_as::<_, Group>(r#"SELECT id, name FROM "group" ORDER BY id"#)
        .fetch_all(conn)
        .await
}

pub async fn get_lecturers(conn: impl SqliteExecutor<'_>) -> Result<Vec<NamedRow>, sqlx::Error> {
    sqlx::query_as::<_, NamedRow>("SELECT id, name FROM lecturer ORDER BY id")
        .fetch_all(conn)
        .await
}

pub async fn get_subjects(conn: impl SqliteExecutor<'_>) -> Result<Vec<NamedRow>, sqlx::Error> {
    sqlx::query_as::<_, NamedRow>("SELECT id, name FROM subject ORDER BY id")
        .fetch_all(conn)
        .await
}

pub async fn find_students_by_name(
    conn: impl SqliteExecutor<'_>,
    name: &str,
) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "SELECT id, name, group_id FROM student WHERE name = ? ORDER BY id",
    )
    .bind(name)
    .fetch_all(conn)
    .await
}

pub async fn get_schedule_links(
    conn: impl SqliteExecutor<'_>,
) -> Result<Vec<ScheduleLink>, sqlx::Error> {
    sqlx::query_as::<_, ScheduleLink>(
        "SELECT id, subject_id, lecturer_id FROM schedule ORDER BY id",
    )
    .fetch_all(conn)
    .await
}
