//! CLI entry point for word-driven tile generation

use clap::Parser;
use wordtile::io::cli::{Cli, TileProcessor, init_logging};

fn main() -> wordtile::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.log.as_deref())?;
    let mut processor = TileProcessor::new(cli);
    processor.process()
}
