use sqlx::SqliteExecutor;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{StudentGroup, SubjectLecturer, Table};

#[instrument(skip(conn))]
pub async fn insert_group(conn: impl SqliteExecutor<'_>, name: &str) -> Result<i64, AppError> {
    let res = sqlx::query(r#"INSERT INTO "group" (name) VALUES (?)"#)
        .bind(name)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

#[instrument(skip(conn))]
pub async fn insert_student(
    conn: impl SqliteExecutor<'_>,
    name: &str,
    group_id: Option<i64>,
) -> Result<i64, AppError> {
    let res = sqlx::query("INSERT INTO student (name, group_id) VALUES (?, ?)")
        .bind(name)
        .bind(group_id)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

#[instrument(skip(conn))]
pub async fn insert_lecturer(conn: impl SqliteExecutor<'_>, name: &str) -> Result<i64, AppError> {
    let res = sqlx::query("INSERT INTO lecturer (name) VALUES (?)")
        .bind(name)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

#[instrument(skip(conn))]
pub async fn insert_subject(conn: impl SqliteExecutor<'_>, name: &str) -> Result<i64, AppError> {
    let res = sqlx::query("INSERT INTO subject (name) VALUES (?)")
        .bind(name)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

#[instrument(skip(conn))]
pub async fn insert_schedule(
    conn: impl SqliteExecutor<'_>,
    subject_id: i64,
    lecturer_id: i64,
) -> Result<i64, AppError> {
    let res = sqlx::query("INSERT INTO schedule (subject_id, lecturer_id) VALUES (?, ?)")
        .bind(subject_id)
        .bind(lecturer_id)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

/// Student names with their group names, inner-joined so students without a
/// matching group are left out.
#[instrument(skip(conn))]
pub async fn get_students_with_groups(
    conn: impl SqliteExecutor<'_>,
) -> Result<Vec<StudentGroup>, AppError> {
    info!("Getting students with groups");
    let rows = sqlx::query_as::<_, StudentGroup>(
        r#"SELECT student.name AS student_name, "group".name AS group_name
         FROM student
         INNER JOIN "group" ON student.group_id = "group".id"#,
    )
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

#[instrument(skip(conn))]
pub async fn get_schedule_entries(
    conn: impl SqliteExecutor<'_>,
) -> Result<Vec<SubjectLecturer>, AppError> {
    info!("Getting schedule entries");
    let rows = sqlx::query_as::<_, SubjectLecturer>(
        "SELECT subject.name AS subject_name, lecturer.name AS lecturer_name
         FROM schedule
         INNER JOIN subject ON subject.id = schedule.subject_id
         INNER JOIN lecturer ON lecturer.id = schedule.lecturer_id",
    )
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

/// Returns the number of students moved.
#[instrument(skip(conn))]
pub async fn update_student_group_by_name(
    conn: impl SqliteExecutor<'_>,
    student_name: &str,
    group_id: i64,
) -> Result<u64, AppError> {
    info!("Updating student group");
    let res = sqlx::query("UPDATE student SET group_id = ? WHERE name = ?")
        .bind(group_id)
        .bind(student_name)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

/// Returns the number of schedule rows reassigned.
#[instrument(skip(conn))]
pub async fn update_schedule_lecturer(
    conn: impl SqliteExecutor<'_>,
    subject_id: i64,
    current_lecturer_id: i64,
    new_lecturer_id: i64,
) -> Result<u64, AppError> {
    info!("Updating schedule lecturer");
    let res = sqlx::query(
        "UPDATE schedule
         SET lecturer_id = ?
         WHERE subject_id = ? AND lecturer_id = ?",
    )
    .bind(new_lecturer_id)
    .bind(subject_id)
    .bind(current_lecturer_id)
    .execute(conn)
    .await?;
    Ok(res.rows_affected())
}

#[instrument(skip(conn))]
pub async fn find_student_group(
    conn: impl SqliteExecutor<'_>,
    student_name: &str,
) -> Result<Option<StudentGroup>, AppError> {
    let row = sqlx::query_as::<_, StudentGroup>(
        r#"SELECT s.name AS student_name, g.name AS group_name
         FROM student s
         JOIN "group" g ON s.group_id = g.id
         WHERE s.name = ?
         LIMIT 1"#,
    )
    .bind(student_name)
    .fetch_optional(conn)
    .await?;

    Ok(row)
}

#[instrument(skip(conn))]
pub async fn find_schedule_entry(
    conn: impl SqliteExecutor<'_>,
    subject_name: &str,
    lecturer_name: &str,
) -> Result<Option<SubjectLecturer>, AppError> {
    let row = sqlx::query_as::<_, SubjectLecturer>(
        "SELECT sub.name AS subject_name, lect.name AS lecturer_name
         FROM schedule s
         JOIN subject sub ON s.subject_id = sub.id
         JOIN lecturer lect ON s.lecturer_id = lect.id
         WHERE sub.name = ? AND lect.name = ?
         LIMIT 1",
    )
    .bind(subject_name)
    .bind(lecturer_name)
    .fetch_optional(conn)
    .await?;

    Ok(row)
}

/// Every grouped student, ordered by group name then student name.
#[instrument(skip(conn))]
pub async fn get_students_by_group(
    conn: impl SqliteExecutor<'_>,
) -> Result<Vec<StudentGroup>, AppError> {
    info!("Listing students by group");
    let rows = sqlx::query_as::<_, StudentGroup>(
        r#"SELECT s.name AS student_name, g.name AS group_name
         FROM student s
         JOIN "group" g ON s.group_id = g.id
         ORDER BY g.name, s.name"#,
    )
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

#[instrument(skip(conn))]
pub async fn count_rows(conn: impl SqliteExecutor<'_>, table: Table) -> Result<i64, AppError> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.as_sql());
    let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(conn).await?;
    Ok(count)
}
