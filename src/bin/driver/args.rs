use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Print the token stream
    #[cfg(feature = "lexer")]
    #[arg(long)]
    pub tokens: bool,

    /// Print the parsed syntax tree
    #[cfg(feature = "parser")]
    #[arg(long)]
    pub ast: bool,

    /// Print the intermediate quadruples
    #[cfg(feature = "quads")]
    #[arg(long)]
    pub quads: bool,

    /// Source file to compile
    pub input: PathBuf,
}
