use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::seqio::format::is_gzip_path;
use crate::seqio::reader::SequenceRecord;

/// Append-only writer that encodes kept records as FASTA or FASTQ,
/// gzip-compressing when the output path ends in `.gz`.
pub struct SequenceWriter {
    sink: Sink,
    fastq: bool,
}

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl SequenceWriter {
    pub fn create(path: &str, fastq: bool) -> Result<SequenceWriter> {
        let file =
            File::create(path).with_context(|| format!("failed to create output file {}", path))?;
        let sink = if is_gzip_path(path) {
            Sink::Gzip(GzEncoder::new(BufWriter::new(file), Compression::default()))
        } else {
            Sink::Plain(BufWriter::new(file))
        };
        Ok(SequenceWriter { sink, fastq })
    }

    /// Append one record in the requested encoding.
    ///
    /// FASTQ output copies the stored quality string through unchanged;
    /// a record without one produces an empty quality line.
    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        if self.fastq {
            write!(
                self.sink,
                "@{}\n{}\n+\n{}\n",
                record.name, record.seq, record.qual
            )?;
        } else {
            write!(self.sink, ">{}\n{}\n", record.name, record.seq)?;
        }
        Ok(())
    }

    /// Flush buffers and, for gzip output, write the stream trailer.
    pub fn finish(self) -> Result<()> {
        match self.sink {
            Sink::Plain(mut writer) => writer.flush()?,
            Sink::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Plain(writer) => writer.write(buf),
            Sink::Gzip(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Plain(writer) => writer.flush(),
            Sink::Gzip(writer) => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    use flate2::read::MultiGzDecoder;
    use tempfile::TempDir;

    fn record(name: &str, seq: &str, qual: &str) -> SequenceRecord {
        SequenceRecord {
            name: name.to_string(),
            seq: seq.to_string(),
            qual: qual.to_string(),
        }
    }

    #[test]
    fn fasta_encoding_is_header_then_sequence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fa");
        let mut writer = SequenceWriter::create(path.to_str().unwrap(), false).unwrap();
        writer.write_record(&record("r1 np=3 rq=0.9", "ACGT", "IIII")).unwrap();
        writer.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, ">r1 np=3 rq=0.9\nACGT\n");
    }

    #[test]
    fn fastq_encoding_keeps_quality_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fq");
        let mut writer = SequenceWriter::create(path.to_str().unwrap(), true).unwrap();
        writer.write_record(&record("r1", "ACGT", "II!I")).unwrap();
        writer.write_record(&record("r2", "TT", "")).unwrap();
        writer.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "@r1\nACGT\n+\nII!I\n@r2\nTT\n+\n\n");
    }

    #[test]
    fn gzip_output_decodes_back_to_plain_encoding() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fa.gz");
        let mut writer = SequenceWriter::create(path.to_str().unwrap(), false).unwrap();
        writer.write_record(&record("r1", "ACGT", "")).unwrap();
        writer.finish().unwrap();

        let mut decoded = String::new();
        MultiGzDecoder::new(std::fs::File::open(&path).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, ">r1\nACGT\n");
    }
}
