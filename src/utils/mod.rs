pub mod environment;
pub mod timestamps;

pub use environment::{DATA_DIR_ENV, get_data_dir};
pub use timestamps::{display_label, format_display_label};
