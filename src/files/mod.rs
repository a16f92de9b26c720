//! File handling for input logs and generated documents.

pub mod input;
pub mod output;

pub use input::{decode_lossy, read_log, InputError};
pub use output::{
    install_support_file, output_dir, write_document, SUPPORT_FILE, SUPPORT_FILE_NAME,
};
