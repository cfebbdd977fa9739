// src/utils/bam_reader.rs
use anyhow::{Context, Result};
use rust_htslib::bam;

pub struct BamReaderFactory;

impl BamReaderFactory {
    /// Open an indexed BAM/CRAM for region queries. CRAM decoding needs the
    /// reference sequence, which htslib resolves through REF_PATH.
    pub fn open_indexed(bam_path: &str, reference_path: Option<&str>) -> Result<bam::IndexedReader> {
        if let Some(ref_path) = reference_path {
            if bam_path.ends_with(".cram") {
                std::env::set_var("REF_PATH", ref_path);
            }
        }
        bam::IndexedReader::from_path(bam_path)
            .with_context(|| format!("failed to open indexed alignment file {}", bam_path))
    }
}
