// Copyright 2026 The Binius Developers
use anyhow::Result;
use clap::Parser;
use hashbench::{Cli, cli::init_logging};

fn main() -> Result<()> {
	init_logging();
	Cli::parse().run()?;
	Ok(())
}
