use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lib_recolor::{
    find_files, ColorParseError, ColorTuple, Converter, EnumerateError, RunTotals, Substitution,
};
use log::{debug, LevelFilter};
use thiserror::Error;

pub const USAGE_EXAMPLE: &str =
    "> replace-color -d=/path/to/images -s=.png -f=0xffff00ff -t=0xffff0080";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error("Invalid --{option} value: {source}")]
    InvalidColor {
        option: &'static str,
        source: ColorParseError,
    },

    #[error("{0}")]
    Enumerate(#[from] EnumerateError),
}

#[derive(Parser, Debug)]
#[command(
    name = "replace-color",
    version,
    about = "Replace a single color in a bunch of RGBA images"
)]
pub struct Args {
    /// The directory where to search for input files
    #[arg(short = 'd', long)]
    pub directory: PathBuf,

    /// How the input file names should end
    #[arg(short = 's', long)]
    pub filename_suffix: String,

    /// Which RGBA color to change; for example, try 0xffff00ff for yellow
    #[arg(short = 'f', long)]
    pub from_color: String,

    /// Which RGBA color to change to; for example, try 0xffff0080 for yellow with alpha
    #[arg(short = 't', long)]
    pub to_color: String,

    /// Show colors actually found?
    #[arg(short = 'c', long)]
    pub show_colors: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Parses both colors. Nothing on disk is looked at before this succeeds.
    pub fn substitution(&self) -> Result<Substitution, AppError> {
        let parse = |option: &'static str, text: &str| {
            text.parse::<ColorTuple>()
                .map_err(|source| AppError::InvalidColor { option, source })
        };

        Ok(Substitution {
            from: parse("from-color", &self.from_color)?,
            to: parse("to-color", &self.to_color)?,
            collect_colors: self.show_colors,
        })
    }
}

/// Runs a whole conversion, printing the transcript to stdout.
pub fn run(args: &Args) -> Result<RunTotals, AppError> {
    let substitution = args.substitution()?;
    debug!("Parsed arguments: {:?}", args);

    println!("Converting from : {}", substitution.from);
    println!("             to : {}", substitution.to);
    println!("  Searching for : *{}", args.filename_suffix);
    println!("             in : {}", args.directory.display());

    let files = find_files(&args.directory, &args.filename_suffix)?;
    println!("Found {} files, now converting ...", files.len());

    let converter = Converter::new(substitution);
    let totals = converter.convert_each(&files, |report| println!("{}", report));

    println!();
    println!("{}", totals);

    Ok(totals)
}
