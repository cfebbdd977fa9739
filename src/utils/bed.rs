use std::fs;

use anyhow::{Context, Result};

/// One subtelomere interval, fields kept exactly as they appeared in the
/// BED file.
///
/// Start and end stay unparsed: they are pasted verbatim into the
/// `chrom:start-end` query handed to htslib, so whatever numeric form the
/// file used survives the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicInterval {
    pub chrom: String,
    pub start: String,
    pub end: String,
}

impl GenomicInterval {
    /// Region string in the `chrom:start-end` form htslib queries expect.
    pub fn query_string(&self) -> String {
        format!("{}:{}-{}", self.chrom, self.start, self.end)
    }
}

/// Parse BED content into intervals, keeping file order.
///
/// Only the first three tab-separated fields of a line are used; any
/// further columns are ignored. Lines with fewer than three fields are
/// malformed and abort the run.
pub fn parse_bed(content: &str) -> Vec<GenomicInterval> {
    content
        .lines()
        .map(|line| {
            let fields: Vec<&str> = line.trim().split('\t').collect();
            GenomicInterval {
                chrom: fields[0].to_string(),
                start: fields[1].to_string(),
                end: fields[2].to_string(),
            }
        })
        .collect()
}

pub fn load_bed(path: &str) -> Result<Vec<GenomicInterval>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read bed file {}", path))?;
    Ok(parse_bed(&content))
}
