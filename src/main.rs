//! CLI entry point for the procedural background texture generator

use backdrop::io::cli::{Cli, PatternWriter};
use clap::Parser;

fn main() -> backdrop::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let mut writer = PatternWriter::new(cli);
    writer.run()
}
