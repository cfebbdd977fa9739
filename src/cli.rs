use clap::{Parser, Subcommand};

use crate::types::ReadType;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract reads whose alignments overlap subtelomeric regions
    Extract {
        /// Input BAM (or CRAM) with an index next to it
        #[arg(short = 'b', long = "bam", value_name = "input.bam")]
        bam_file: String,

        /// Input reads (.fa / .fa.gz / .fq / .fq.gz)
        #[arg(short = 'i', long = "input", value_name = "input.fa")]
        input_file: String,

        /// Output reads (.fa / .fa.gz / .fq / .fq.gz)
        #[arg(short = 'o', long = "output", value_name = "output.fa")]
        output_file: String,

        /// Subtelomere regions, BED format (default: bundled hg38 list)
        #[arg(long = "bed", value_name = "subtel.bed")]
        bed_file: Option<String>,

        /// Read name format
        #[arg(long = "readtype", value_enum, default_value = "SRA")]
        read_type: ReadType,

        /// Minimum passes (CCS only)
        #[arg(long = "min-np", default_value = "3")]
        min_passes: u32,

        /// Minimum read quality (CCS only)
        #[arg(long = "min-rq", default_value = "0.8")]
        min_read_quality: f64,

        /// Reference FASTA, needed to decode CRAM input
        #[arg(long = "reference", value_name = "ref.fa")]
        reference_file: Option<String>,
    },
}
