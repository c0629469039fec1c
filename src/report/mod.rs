//! Plain-text reports for a scored character.

mod detail;
mod summary;

pub use detail::{write_details, write_details_file, DETAILS_FILE};
pub use summary::{write_summary, write_summary_file, SUMMARY_FILE};
