//! CLI entry point for the decompose-and-pack tool

use blockpack::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> blockpack::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
