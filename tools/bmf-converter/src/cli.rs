//! Command line parsing and [`ConvertConfig`] construction.

use std::path::PathBuf;

use bmf_converter::ConvertConfig;
use clap::{Arg, ArgMatches, Command, value_parser};

/// Parses `convbmf`'s arguments to construct a [`ConvertConfig`].
pub fn get_config() -> ConvertConfig {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`ConvertConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> ConvertConfig {
    let height = matches
        .get_one::<u8>("height")
        .copied()
        .unwrap_or_else(|| unreachable!("`height` is a required argument"));

    let width = matches
        .get_one::<u8>("width")
        .copied()
        .unwrap_or_else(|| unreachable!("`width` is a required argument"));

    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| unreachable!("`input` is a required argument"));

    ConvertConfig {
        height,
        width,
        input,
    }
}

/// Returns the command parser for `convbmf`.
fn command_parser() -> Command {
    let height = Arg::new("height")
        .help("Height of every glyph in pixels")
        .value_parser(value_parser!(u8).range(1..))
        .required(true);

    let width = Arg::new("width")
        .help("Width of every glyph in pixels")
        .value_parser(value_parser!(u8).range(1..))
        .required(true);

    let input = Arg::new("input")
        .help("BMF font description to convert")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    Command::new("convbmf")
        .about("Converts a BMF bitmap font description into C font tables")
        .arg(height)
        .arg(width)
        .arg(input)
}
