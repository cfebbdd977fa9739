mod cli;
mod commands;
mod error;
mod seqio;
mod types;
mod utils;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Extract {
            bam_file,
            input_file,
            output_file,
            bed_file,
            read_type,
            min_passes,
            min_read_quality,
            reference_file,
        } => commands::extract::run(
            bam_file,
            input_file,
            output_file,
            bed_file,
            read_type,
            min_passes,
            min_read_quality,
            reference_file,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
