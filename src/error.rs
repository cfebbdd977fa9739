use thiserror::Error;

/// Configuration problems detected before the extraction pipeline starts.
///
/// These abort the run with exit code 1 and never leave a partial
/// output file behind.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found or empty")]
    MissingFile(String),

    #[error("input is fasta but requested output is fastq")]
    FastaToFastq,
}
