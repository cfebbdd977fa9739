use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::{Context, Result};
use bio::io::{fasta, fastq};
use flate2::read::MultiGzDecoder;

use crate::seqio::format::{is_gzip_path, SeqFormat};

/// One sequence record as it came off the input file.
///
/// `name` is the complete header line past the marker character, so a CCS
/// description like `np=12 rq=0.99` stays attached to the identifier.
/// `qual` is empty for FASTA input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub seq: String,
    pub qual: String,
}

/// Forward-only reader over FASTA/FASTQ, plain or gzipped.
///
/// Both the record format and the compression layer are keyed off the
/// filename suffix, never the content. Gzipped files go through
/// [`MultiGzDecoder`] so multi-member streams (bgzip output) decode fully.
/// The two underlying readers report different error types; both surface
/// as `Err` items from the iterator.
pub enum SequenceStream {
    Fasta(fasta::Records<BufReader<Box<dyn Read>>>),
    Fastq(fastq::Records<BufReader<Box<dyn Read>>>),
}

impl SequenceStream {
    pub fn open(path: &str) -> Result<SequenceStream> {
        let file =
            File::open(path).with_context(|| format!("failed to open reads file {}", path))?;
        let raw: Box<dyn Read> = if is_gzip_path(path) {
            Box::new(MultiGzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Ok(match SeqFormat::from_path(path) {
            SeqFormat::Fasta => SequenceStream::Fasta(fasta::Reader::new(raw).records()),
            SeqFormat::Fastq => SequenceStream::Fastq(fastq::Reader::new(raw).records()),
        })
    }
}

// bio splits a header at the first whitespace; rejoining with a space
// restores space-delimited names byte-for-byte. A tab separator would be
// normalized to a space, but read names never carry tabs.
fn full_name(id: &str, desc: Option<&str>) -> String {
    match desc {
        Some(desc) => format!("{} {}", id, desc),
        None => id.to_string(),
    }
}

impl Iterator for SequenceStream {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SequenceStream::Fasta(records) => records.next().map(|result| {
                let rec = result?;
                Ok(SequenceRecord {
                    name: full_name(rec.id(), rec.desc()),
                    seq: String::from_utf8_lossy(rec.seq()).into_owned(),
                    qual: String::new(),
                })
            }),
            SequenceStream::Fastq(records) => records.next().map(|result| {
                let rec = result?;
                Ok(SequenceRecord {
                    name: full_name(rec.id(), rec.desc()),
                    seq: String::from_utf8_lossy(rec.seq()).into_owned(),
                    qual: String::from_utf8_lossy(rec.qual()).into_owned(),
                })
            }),
        }
    }
}
