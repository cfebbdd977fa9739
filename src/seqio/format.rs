/// Record format of a sequence file, decided by filename suffix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    Fastq,
}

impl SeqFormat {
    /// Detect the record format from a path.
    ///
    /// A trailing `.gz` layer is ignored, then the remaining extension is
    /// compared case-insensitively: `.fq` and `.fastq` mean FASTQ, anything
    /// else is treated as FASTA. File content is never inspected.
    pub fn from_path(path: &str) -> SeqFormat {
        let lower = path.to_ascii_lowercase();
        let stem = lower.strip_suffix(".gz").unwrap_or(&lower);
        if stem.ends_with(".fq") || stem.ends_with(".fastq") {
            SeqFormat::Fastq
        } else {
            SeqFormat::Fasta
        }
    }

    pub fn is_fastq(&self) -> bool {
        matches!(self, SeqFormat::Fastq)
    }
}

/// True when the path names a gzip stream. Keyed off the suffix so that
/// compression of input and output is always under the caller's control.
pub fn is_gzip_path(path: &str) -> bool {
    path.to_ascii_lowercase().ends_with(".gz")
}
