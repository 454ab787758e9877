mod file_save_sink;

pub use file_save_sink::{FileSaveError, FileSaveSink};
