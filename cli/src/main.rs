//! readpdf CLI - write the plain text of a PDF to a text file

use std::error::Error as _;
use std::path::PathBuf;

use clap::Parser;

use readpdf::extract::{self, ExtractConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "readpdf")]
#[command(version)]
#[command(about = "Extract the plain text of every page of a PDF into a text file", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output text file (created or overwritten)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Cli> for ExtractConfig {
    fn from(cli: Cli) -> Self {
        ExtractConfig::new()
            .with_input(cli.input)
            .with_output(cli.output)
    }
}

fn main() {
    env_logger::init();

    let config = ExtractConfig::from(Cli::parse());
    let result = extract::run(&config);

    if let Err(ref e) = result {
        let mut source = e.source();
        while let Some(cause) = source {
            log::debug!("caused by: {}", cause);
            source = cause.source();
        }
    }

    // Both outcomes are reported on stdout and exit with status 0.
    println!("{}", extract::status_line(&result));
}
