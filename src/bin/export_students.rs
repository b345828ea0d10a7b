//! Prints the CSV export of the seeded roster to stdout.
//!
//! The roster lives only in a server process's memory, so this always renders
//! the fixed seed data, never the state of a running server. Use
//! `GET /students/export/csv` for that.

use std::io::Write;

use mergington_api::services::export_service;
use mergington_api::Store;

fn main() -> anyhow::Result<()> {
    let csv = export_service::render_store_csv(&Store::seeded())?;
    std::io::stdout().write_all(csv.as_bytes())?;
    Ok(())
}
