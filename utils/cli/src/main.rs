use std::path::PathBuf;

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use img2bin_core::convert_file;

/// Raw RGB image converter
///
/// Decodes an image file and writes its pixels as packed 3-byte RGB triples,
/// row by row from the top left corner. The output has no header, so the
/// image dimensions are printed after a successful conversion.
#[derive(Debug, Parser)]
#[command(name = "img2bin", author, version, about, long_about = None)]
struct Cli {
    /// Image to convert
    #[arg(value_name = "IMAGE")]
    input: PathBuf,
    /// Destination of the raw pixel data, overwritten if it exists
    #[arg(value_name = "BIN")]
    output: PathBuf,
}

/// Exit status used for command line usage errors.
const USAGE_EXIT_CODE: i32 = 1;

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("Invalid arguments: {}", err);

            println!("{}", Cli::command().render_usage());
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = parse_args();
    let dimensions = convert_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "Unable to convert {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    println!(
        "Wrote {} image data to {}",
        dimensions,
        cli.output.display()
    );
    Ok(())
}
