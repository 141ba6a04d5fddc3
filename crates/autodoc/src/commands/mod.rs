//! Command implementations

pub mod conf;
pub mod detect;
pub mod document;
pub mod index;
pub mod scan;
pub mod show;

pub use conf::generate_conf;
pub use detect::detect_files;
pub use document::document_scripts;
pub use index::generate_index;
pub use scan::scan_scripts;
pub use show::show_page;
