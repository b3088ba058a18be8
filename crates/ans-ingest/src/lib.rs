pub mod combined;
pub mod discovery;
pub mod gates;
pub mod raw;
pub mod unify;

pub use combined::{read_combined, write_combined};
pub use discovery::list_csv_files;
pub use gates::load_gate_registry;
pub use raw::parse_raw_sample_file;
pub use unify::{normalize_landmark, unify_tables};
