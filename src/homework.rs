use std::io::Write;
use std::path::Path;

use sqlx::{Pool, Sqlite, sqlite::SqliteConnectOptions};
use tracing::{info, instrument};

use crate::database::{close_store, create_tables, file_options, open_store, sqlite_version};
use crate::db::{
    find_schedule_entry, find_student_group, get_schedule_entries, get_students_by_group,
    get_students_with_groups, insert_student, update_schedule_lecturer,
    update_student_group_by_name,
};
use crate::error::AppError;
use crate::report::{
    BANNER_WIDTH, rule, write_banner, write_student_groups, write_student_list,
    write_subject_lecturers,
};
use crate::seed::{insert_sample_data, log_row_counts};

pub const MOVED_STUDENT: &str = "John Smith";
pub const MOVED_TO_GROUP_ID: i64 = 3;

pub const REASSIGNED_SUBJECT_ID: i64 = 1;
pub const REASSIGNED_FROM_LECTURER_ID: i64 = 3;
pub const REASSIGNED_TO_LECTURER_ID: i64 = 4;

pub const NEW_STUDENT: &str = "David Moore";
pub const NEW_STUDENT_GROUP_ID: i64 = 2;

/// Runs the whole homework against the store file at `database`.
pub async fn run(database: &Path, out: &mut dyn Write) -> Result<(), AppError> {
    run_with(file_options(database), &database.display().to_string(), out).await
}

/// Opens the store, runs every step, and closes the store again whatever the
/// steps returned.
///
/// Only a failed open or a missing row in the first verification lookup ends
/// the run early. A failed open is reported on the console and is not an
/// error of the run.
#[instrument(skip_all, fields(database = %label))]
pub async fn run_with(
    options: SqliteConnectOptions,
    label: &str,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    writeln!(out, "STARTING HOMEWORK EXECUTION")?;
    writeln!(out, "{}", rule('=', 50))?;
    writeln!(out, "SQLite version: {}", sqlite_version().await)?;

    let pool = match open_store(options).await {
        Ok(pool) => {
            writeln!(out, "Connected to SQLite database successfully")?;
            pool
        }
        Err(e) => {
            e.log_and_record("Opening store");
            writeln!(out, "Error connecting to database: {e}")?;
            writeln!(out, "Error! Cannot create database connection.")?;
            return Ok(());
        }
    };

    let outcome = run_steps(&pool, out).await;
    close_store(pool).await;
    outcome?;

    writeln!(out)?;
    writeln!(out, "Homework completed successfully!")?;
    writeln!(out, "Database saved as: {label}")?;
    info!("Homework finished");
    Ok(())
}

/// Steps 2 to 6 against an open store.
pub async fn run_steps(pool: &Pool<Sqlite>, out: &mut dyn Write) -> Result<(), AppError> {
    setup_tables(pool, out).await;
    seed_data(pool, out).await;

    writeln!(out)?;
    writeln!(out, "CHECKING DATA BEFORE UPDATE:")?;
    execute_queries(pool, out).await;

    update_records(pool, out).await;

    writeln!(out)?;
    writeln!(out, "📈 CHECKING DATA AFTER UPDATE:")?;
    execute_queries(pool, out).await;

    verify_changes(pool, out).await
}

fn report_failure(out: &mut dyn Write, prefix: &str, err: &AppError) {
    err.log_and_record(prefix);
    // Nothing sensible remains if the console itself is gone.
    let _ = writeln!(out, "{prefix}: {err}");
}

pub async fn setup_tables(pool: &Pool<Sqlite>, out: &mut dyn Write) {
    let outcome = match create_tables(pool).await {
        Ok(()) => writeln!(out, "Tables created successfully").map_err(AppError::from),
        Err(e) => Err(e),
    };
    if let Err(e) = outcome {
        report_failure(out, "Error creating tables", &e);
    }
}

pub async fn seed_data(pool: &Pool<Sqlite>, out: &mut dyn Write) {
    let outcome = match insert_sample_data(pool).await {
        Ok(()) => writeln!(out, "Sample data inserted successfully").map_err(AppError::from),
        Err(e) => Err(e),
    };
    if let Err(e) = outcome {
        report_failure(out, "Error inserting data", &e);
    }
    if let Err(e) = log_row_counts(pool).await {
        e.log_and_record("Counting seeded rows");
    }
}

/// Prints both join reports. A failing query stops the step; anything already
/// printed stays printed.
pub async fn execute_queries(pool: &Pool<Sqlite>, out: &mut dyn Write) {
    if let Err(e) = print_queries(pool, out).await {
        report_failure(out, "Error executing queries", &e);
    }
}

async fn print_queries(pool: &Pool<Sqlite>, out: &mut dyn Write) -> Result<(), AppError> {
    write_banner(out, "QUERY 1: Students and Their Groups", BANNER_WIDTH)?;
    let students = get_students_with_groups(pool).await?;
    write_student_groups(out, &students)?;

    write_banner(out, "QUERY 2: Subjects and Lecturers from Schedule", BANNER_WIDTH)?;
    let schedule = get_schedule_entries(pool).await?;
    write_subject_lecturers(out, &schedule)?;

    Ok(())
}

/// Applies the three fixed mutations in one transaction. Each statement fails
/// on its own; the commit runs regardless.
#[instrument(skip_all)]
pub async fn update_records(pool: &Pool<Sqlite>, out: &mut dyn Write) {
    if let Err(e) = apply_updates(pool, out).await {
        report_failure(out, "Error updating records", &e);
    }
}

async fn apply_updates(pool: &Pool<Sqlite>, out: &mut dyn Write) -> Result<(), AppError> {
    write_banner(out, "UPDATING RECORDS", 60)?;

    let mut tx = pool.begin().await?;

    match update_student_group_by_name(&mut *tx, MOVED_STUDENT, MOVED_TO_GROUP_ID).await {
        Ok(moved) => {
            info!(moved, "Student group updated");
            writeln!(out, "✓ Updated group for John Smith (Group A → Group C)")?;
        }
        Err(e) => report_failure(out, "Error updating student group", &e),
    }

    match update_schedule_lecturer(
        &mut *tx,
        REASSIGNED_SUBJECT_ID,
        REASSIGNED_FROM_LECTURER_ID,
        REASSIGNED_TO_LECTURER_ID,
    )
    .await
    {
        Ok(reassigned) => {
            info!(reassigned, "Schedule lecturer updated");
            writeln!(
                out,
                "✓ Updated lecturer for Mathematics (Dr. James Anderson → Prof. Patricia Thomas)"
            )?;
        }
        Err(e) => report_failure(out, "Error updating schedule", &e),
    }

    match insert_student(&mut *tx, NEW_STUDENT, Some(NEW_STUDENT_GROUP_ID)).await {
        Ok(id) => {
            info!(id, "Student added");
            writeln!(out, "✓ Added new student: David Moore to Group B")?;
        }
        Err(e) => report_failure(out, "Error adding student", &e),
    }

    tx.commit().await?;
    writeln!(out)?;
    writeln!(out, "Records updated successfully!")?;
    Ok(())
}

/// Confirms the mutations by name and prints the ordered student list.
///
/// Statement failures are reported and swallowed. A missing row for the moved
/// student is returned instead, skipping the rest of the verification.
#[instrument(skip_all)]
pub async fn verify_changes(pool: &Pool<Sqlite>, out: &mut dyn Write) -> Result<(), AppError> {
    match check_changes(pool, out).await {
        Err(e) if e.is_statement_failure() => {
            report_failure(out, "Error verifying changes", &e);
            Ok(())
        }
        outcome => outcome,
    }
}

async fn check_changes(pool: &Pool<Sqlite>, out: &mut dyn Write) -> Result<(), AppError> {
    write_banner(out, "VERIFICATION OF CHANGES", BANNER_WIDTH)?;

    let moved = find_student_group(pool, MOVED_STUDENT)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No grouped student named {MOVED_STUDENT}")))?;
    writeln!(out, "✓ John Smith is now in group: {}", moved.group_name)?;

    if let Some(entry) = find_schedule_entry(pool, "Mathematics", "Prof. Patricia Thomas").await? {
        writeln!(out, "✓ Mathematics is now taught by: {}", entry.lecturer_name)?;
    }

    if let Some(added) = find_student_group(pool, NEW_STUDENT).await? {
        writeln!(
            out,
            "✓ New student added: {} in {}",
            added.student_name, added.group_name
        )?;
    }

    let listing = get_students_by_group(pool).await?;
    write_student_list(out, &listing)?;

    Ok(())
}
