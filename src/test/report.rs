#[cfg(test)]
mod tests {
    use crate::models::{StudentGroup, SubjectLecturer};
    use crate::report::{
        rule, student_group_line, subject_lecturer_line, write_banner, write_student_groups,
        write_student_list, write_subject_lecturers,
    };
    use crate::test::utils::console_text;

    fn student(name: &str, group: &str) -> StudentGroup {
        StudentGroup {
            student_name: name.to_string(),
            group_name: group.to_string(),
        }
    }

    #[test]
    fn test_fixed_width_lines() {
        assert_eq!(
            student_group_line(&student("John Smith", "Group A")),
            "John Smith           | Group A   "
        );

        let line = subject_lecturer_line(&SubjectLecturer {
            subject_name: "Mathematics".to_string(),
            lecturer_name: "Dr. Robert Taylor".to_string(),
        });
        assert_eq!(line, "Mathematics          | Dr. Robert Taylor        ");
        assert_eq!(line.len(), 20 + 3 + 25);
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let line = student_group_line(&student("Bartholomew Fitzgerald-Smythe", "Group A"));
        assert!(line.starts_with("Bartholomew Fitzgerald-Smythe | "));
    }

    #[test]
    fn test_banner() {
        let mut buf = Vec::new();
        write_banner(&mut buf, "UPDATING RECORDS", 60).unwrap();

        let text = console_text(buf);
        let lines: Vec<&str> = text.lines().collect();
        let bar = rule('=', 60);
        assert_eq!(lines, vec!["", bar.as_str(), "UPDATING RECORDS", bar.as_str()]);
    }

    #[test]
    fn test_student_table() {
        let rows = vec![student("John Smith", "Group A"), student("Anna Davis", "Group B")];
        let mut buf = Vec::new();
        write_student_groups(&mut buf, &rows).unwrap();

        let text = console_text(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Student Name         | Group Name");
        assert_eq!(lines[1], "-".repeat(35));
        assert_eq!(lines[3], "Anna Davis           | Group B   ");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Total students: 2");
    }

    #[test]
    fn test_empty_schedule_table() {
        let mut buf = Vec::new();
        write_subject_lecturers(&mut buf, &[]).unwrap();

        let text = console_text(buf);
        assert!(text.starts_with("Subject Name         | Lecturer Name            \n"));
        assert!(text.contains(&"-".repeat(50)));
        assert!(text.ends_with("Total schedule entries: 0\n"));
    }

    #[test]
    fn test_student_list() {
        let mut buf = Vec::new();
        write_student_list(&mut buf, &[student("David Moore", "Group B")]).unwrap();

        let text = console_text(buf);
        assert!(text.contains("UPDATED STUDENT LIST:"));
        assert!(text.contains("David Moore          | Group B   \n"));
        assert!(text.ends_with("Total students after update: 1\n"));
    }
}
