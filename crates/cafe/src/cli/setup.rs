use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cafe", bin_name = "cafe", version)]
#[command(about = "Order drinks, build your own, and keep favorites", long_about = None)]
pub struct Cli {
    /// Directory holding shop.json and cafe.toml (defaults to $CAFE_DATA_DIR, then the OS data dir)
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Skip the timed pauses after notices and orders
    #[arg(long, help_heading = "Options")]
    pub no_pause: bool,

    /// Verbose logging to stderr
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
