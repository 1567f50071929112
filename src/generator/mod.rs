pub mod csv_export;
pub mod summary_text;

pub use csv_export::write_csv;
pub use summary_text::render_summary;
