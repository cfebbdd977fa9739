use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rust_htslib::bam::{self, Read};

use crate::error::ConfigError;
use crate::seqio::{SeqFormat, SequenceStream, SequenceWriter};
use crate::types::ReadType;
use crate::utils::bam_reader::BamReaderFactory;
use crate::utils::bed::{self, GenomicInterval};

/// Regions used when no --bed file is given: 500 kb windows at both ends
/// of every hg38 chromosome.
const DEFAULT_SUBTEL_REGIONS: &str = include_str!("../../resources/subtel-regions.bed");

pub fn run(
    bam_file: String,
    input_file: String,
    output_file: String,
    bed_file: Option<String>,
    read_type: ReadType,
    min_passes: u32,
    min_read_quality: f64,
    reference_file: Option<String>,
) -> Result<()> {
    if !exists_and_is_nonzero(&bam_file) {
        return Err(ConfigError::MissingFile(bam_file).into());
    }
    if !exists_and_is_nonzero(&input_file) {
        return Err(ConfigError::MissingFile(input_file).into());
    }

    let input_is_fastq = SeqFormat::from_path(&input_file).is_fastq();
    let output_is_fastq = SeqFormat::from_path(&output_file).is_fastq();
    if !input_is_fastq && output_is_fastq {
        return Err(ConfigError::FastaToFastq.into());
    }

    let intervals = match &bed_file {
        Some(path) => {
            if !exists_and_is_nonzero(path) {
                return Err(ConfigError::MissingFile(path.clone()).into());
            }
            bed::load_bed(path)?
        }
        None => {
            println!("using default subtelomere regions...");
            bed::parse_bed(DEFAULT_SUBTEL_REGIONS)
        }
    };

    let mut bam = BamReaderFactory::open_indexed(&bam_file, reference_file.as_deref())?;
    let read_names = collect_region_read_names(&mut bam, &intervals, read_type)?;

    let reader = SequenceStream::open(&input_file)?;
    let mut writer = SequenceWriter::create(&output_file, output_is_fastq)?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    progress.set_message("filtering reads...");

    let mut scanned: u64 = 0;
    let mut written: u64 = 0;
    for record in reader {
        let record =
            record.with_context(|| format!("failed to parse record in {}", input_file))?;
        scanned += 1;
        if scanned % 1000 == 0 {
            progress.set_message(format!("{} reads scanned, {} kept", scanned, written));
        }

        if !read_names.contains(read_type.canonical_name(&record.name)) {
            continue;
        }
        if !read_type.passes_quality_filters(&record.name, min_passes, min_read_quality)? {
            continue;
        }
        writer.write_record(&record)?;
        written += 1;
    }
    writer.finish()?;
    progress.finish_with_message(format!("kept {} of {} reads", written, scanned));

    Ok(())
}

/// Query every interval against the indexed alignments and collect the
/// canonical names of all reads placed there.
fn collect_region_read_names(
    bam: &mut bam::IndexedReader,
    intervals: &[GenomicInterval],
    read_type: ReadType,
) -> Result<HashSet<String>> {
    println!("getting readnames from bam...");
    let mut names = HashSet::new();
    let mut record = bam::Record::new();
    for interval in intervals {
        let region = interval.query_string();
        println!("- {}", region);
        // Subtelomere lists cover contigs not every sample was aligned
        // against; those intervals are skipped rather than fatal.
        if bam.header().tid(interval.chrom.as_bytes()).is_none() {
            eprintln!(
                "skipping contig not present in input bam: {}",
                interval.chrom
            );
            continue;
        }
        bam.fetch(region.as_str())
            .with_context(|| format!("failed to query region {}", region))?;
        while let Some(result) = bam.read(&mut record) {
            result.with_context(|| format!("failed to read alignment in {}", region))?;
            let raw_name = String::from_utf8_lossy(record.qname());
            names.insert(read_type.canonical_name(&raw_name).to_string());
        }
    }
    Ok(names)
}

fn exists_and_is_nonzero(path: &str) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_regions_cover_both_ends_of_every_chromosome() {
        let intervals = bed::parse_bed(DEFAULT_SUBTEL_REGIONS);
        // 22 autosomes plus X and Y, two windows each
        assert_eq!(intervals.len(), 48);
        assert_eq!(intervals[0].query_string(), "chr1:0-500000");
        assert!(intervals.iter().all(|i| i.chrom.starts_with("chr")));
        let p_arms = intervals.iter().filter(|i| i.start == "0").count();
        assert_eq!(p_arms, 24);
    }

    #[test]
    fn zero_length_and_missing_files_fail_the_existence_check() {
        let dir = tempfile::TempDir::new().unwrap();
        let empty = dir.path().join("empty.bam");
        std::fs::write(&empty, b"").unwrap();
        assert!(!exists_and_is_nonzero(empty.to_str().unwrap()));
        assert!(!exists_and_is_nonzero("/no/such/file.bam"));

        let nonzero = dir.path().join("data.bam");
        std::fs::write(&nonzero, b"x").unwrap();
        assert!(exists_and_is_nonzero(nonzero.to_str().unwrap()));
    }
}
