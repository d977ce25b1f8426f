//! Converts a BMF bitmap font description into C font tables written to standard output.

use std::io::{self, BufWriter, Write};

use anyhow::Result;

pub mod cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = cli::get_config();

    let mut writer = BufWriter::new(io::stdout().lock());
    bmf_converter::convert_file(&config, &mut writer)?;
    writer.flush()?;

    Ok(())
}
