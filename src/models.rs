/// One row of the student/group join.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct StudentGroup {
    pub student_name: String,
    pub group_name: String,
}

/// One row of the schedule/subject/lecturer join.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct SubjectLecturer {
    pub subject_name: String,
    pub lecturer_name: String,
}

/// Tables the program owns, for row counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Group,
    Student,
    Lecturer,
    Subject,
    Schedule,
}

impl Table {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Table::Group => "\"group\"",
            Table::Student => "student",
            Table::Lecturer => "lecturer",
            Table::Subject => "subject",
            Table::Schedule => "schedule",
        }
    }
}
