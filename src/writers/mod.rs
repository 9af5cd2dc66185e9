mod flags;
mod textgrid;

pub use flags::{write_flag_log, write_flag_log_file};
pub use textgrid::{write_textgrid, write_textgrid_file};
