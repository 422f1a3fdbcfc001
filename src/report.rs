use std::io::Write;

use crate::models::{StudentGroup, SubjectLecturer};

pub const BANNER_WIDTH: usize = 70;

pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Blank line, rule, title, rule.
pub fn write_banner(out: &mut dyn Write, title: &str, width: usize) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('=', width))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", rule('=', width))
}

pub fn student_group_line(row: &StudentGroup) -> String {
    format!("{:<20} | {:<10}", row.student_name, row.group_name)
}

pub fn subject_lecturer_line(row: &SubjectLecturer) -> String {
    format!("{:<20} | {:<25}", row.subject_name, row.lecturer_name)
}

pub fn write_student_groups(out: &mut dyn Write, rows: &[StudentGroup]) -> std::io::Result<()> {
    writeln!(out, "{:<20} | {:<10}", "Student Name", "Group Name")?;
    writeln!(out, "{}", rule('-', 35))?;
    for row in rows {
        writeln!(out, "{}", student_group_line(row))?;
    }
    writeln!(out)?;
    writeln!(out, "Total students: {}", rows.len())
}

pub fn write_subject_lecturers(
    out: &mut dyn Write,
    rows: &[SubjectLecturer],
) -> std::io::Result<()> {
    writeln!(out, "{:<20} | {:<25}", "Subject Name", "Lecturer Name")?;
    writeln!(out, "{}", rule('-', 50))?;
    for row in rows {
        writeln!(out, "{}", subject_lecturer_line(row))?;
    }
    writeln!(out)?;
    writeln!(out, "Total schedule entries: {}", rows.len())
}

/// The post-update listing: no header, only the rows and a total.
pub fn write_student_list(out: &mut dyn Write, rows: &[StudentGroup]) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('-', 40))?;
    writeln!(out, "UPDATED STUDENT LIST:")?;
    writeln!(out, "{}", rule('-', 40))?;
    for row in rows {
        writeln!(out, "{}", student_group_line(row))?;
    }
    writeln!(out, "Total students after update: {}", rows.len())
}
