use colored::Colorize;
use roster::api::EditOutcome;
use roster::error::Result;
use roster::model::Student;
use unicode_width::UnicodeWidthStr;

const MIN_NAME_WIDTH: usize = 4;
const MIN_ID_WIDTH: usize = 2;

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub(super) fn print_students(students: &[Student]) {
    for line in render_table(students) {
        println!("{}", line);
    }
}

pub(super) fn print_student(student: &Student) {
    println!("{}", student);
}

pub(super) fn print_outcome(outcome: &EditOutcome) {
    println!("{} {}", "before:".dimmed(), outcome.before);
    println!("{} {}", "after: ".bold(), outcome.after);
}

pub(super) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Lays the roster out as a left-aligned table with a header row.
fn render_table(students: &[Student]) -> Vec<String> {
    if students.is_empty() {
        return vec!["No students found.".to_string()];
    }

    let id_width = students
        .iter()
        .map(|s| s.id().width())
        .max()
        .unwrap_or(0)
        .max(MIN_ID_WIDTH);
    let name_width = students
        .iter()
        .map(|s| s.name().width())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut lines = Vec::with_capacity(students.len() + 1);
    lines.push(format!(
        "{}  {}  {}",
        pad_to_width("ID", id_width),
        pad_to_width("NAME", name_width),
        "AGE"
    ));
    for student in students {
        lines.push(format!(
            "{}  {}  {:>3}",
            pad_to_width(student.id(), id_width),
            pad_to_width(student.name(), name_width),
            student.age()
        ));
    }
    lines
}

// format!'s width counts chars, which misaligns wide and combining characters
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
