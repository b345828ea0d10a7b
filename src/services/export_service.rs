use chrono::NaiveDateTime;

use crate::database::{activities_repo, students_repo, SharedStore, Store};
use crate::error::Result;

pub const CSV_HEADER: [&str; 4] = ["Name", "Email", "Grade", "Activities Count"];

/// Roster as CSV, one row per student in store order, with the number of
/// activities each student currently appears in.
pub fn render_students_csv(store: &SharedStore) -> Result<String> {
    render_store_csv(&store.read())
}

pub fn render_store_csv(store: &Store) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for (email, student) in students_repo::list_students(store) {
        let count = activities_repo::count_for_participant(store, email);
        writer.write_record([
            student.name.as_str(),
            student.email.as_str(),
            student.grade.as_str(),
            count.to_string().as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `students_YYYYMMDD_HHMMSS.csv`
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("students_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
