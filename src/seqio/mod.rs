mod format;
mod reader;
mod writer;

pub use format::{is_gzip_path, SeqFormat};
pub use reader::{SequenceRecord, SequenceStream};
pub use writer::SequenceWriter;
