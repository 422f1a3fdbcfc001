use sqlx::{Pool, Sqlite, SqliteConnection};
use tracing::{info, instrument, warn};

use crate::db::{
    count_rows, insert_group, insert_lecturer, insert_schedule, insert_student, insert_subject,
};
use crate::error::AppError;
use crate::models::Table;

pub const GROUPS: [&str; 3] = ["Group A", "Group B", "Group C"];

/// (name, group id). Ids are the positions a fresh store assigns to `GROUPS`.
pub const STUDENTS: [(&str, i64); 6] = [
    ("John Smith", 1),
    ("Maria Johnson", 1),
    ("Peter Brown", 2),
    ("Anna Davis", 2),
    ("Michael Wilson", 3),
    ("Sarah Miller", 3),
];

pub const LECTURERS: [&str; 4] = [
    "Dr. Robert Taylor",
    "Prof. Elizabeth White",
    "Dr. James Anderson",
    "Prof. Patricia Thomas",
];

pub const SUBJECTS: [&str; 5] = [
    "Mathematics",
    "Physics",
    "Computer Science",
    "Chemistry",
    "Biology",
];

/// (subject id, lecturer id)
pub const SCHEDULE: [(i64, i64); 6] = [
    (1, 1), // Mathematics, Dr. Robert Taylor
    (2, 2), // Physics, Prof. Elizabeth White
    (3, 3), // Computer Science, Dr. James Anderson
    (4, 4), // Chemistry, Prof. Patricia Thomas
    (5, 1), // Biology, Dr. Robert Taylor
    (1, 3), // Mathematics, Dr. James Anderson
];

/// Inserts the sample rows in one transaction.
///
/// The transaction is committed even when an insert fails, so rows written
/// before the failure stay in the store. The insert error is still returned.
#[instrument(skip(pool))]
pub async fn insert_sample_data(pool: &Pool<Sqlite>) -> Result<(), AppError> {
    info!("Inserting sample data");
    let mut tx = pool.begin().await?;

    let outcome = insert_rows(&mut tx).await;
    if let Err(e) = &outcome {
        warn!(error = %e, "Sample data only partially inserted");
    }

    tx.commit().await?;
    outcome
}

async fn insert_rows(conn: &mut SqliteConnection) -> Result<(), AppError> {
    for name in GROUPS {
        insert_group(&mut *conn, name).await?;
    }

    for (name, group_id) in STUDENTS {
        insert_student(&mut *conn, name, Some(group_id)).await?;
    }

    for name in LECTURERS {
        insert_lecturer(&mut *conn, name).await?;
    }

    for name in SUBJECTS {
        insert_subject(&mut *conn, name).await?;
    }

    for (subject_id, lecturer_id) in SCHEDULE {
        insert_schedule(&mut *conn, subject_id, lecturer_id).await?;
    }

    Ok(())
}

/// Logs how many rows each table holds.
#[instrument(skip(pool))]
pub async fn log_row_counts(pool: &Pool<Sqlite>) -> Result<(), AppError> {
    for table in [
        Table::Group,
        Table::Student,
        Table::Lecturer,
        Table::Subject,
        Table::Schedule,
    ] {
        let rows = count_rows(pool, table).await?;
        info!(table = table.as_sql(), rows, "Row count");
    }
    Ok(())
}
