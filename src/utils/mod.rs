pub mod bam_reader;
pub mod bed;
