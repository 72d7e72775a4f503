use clap::{Parser, Subcommand};

pub mod destroy;
pub use destroy::*;

#[derive(Parser)]
#[command(
    name = "byebyte",
    version,
    about = "Corrupt files with random bytes for glitch art and decoder testing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Overwrite bytes of a file with random data
    #[command(
        after_help = "Example:\n  byebyte destroy --min 0.3 --max 0.8 --input file.jpg --output file_byebyte.jpg"
    )]
    Destroy(DestroyArgs),
    Version,
}
