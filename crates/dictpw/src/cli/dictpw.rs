use clap::{Parser, Subcommand};

use crate::{
    commands::{generate, wordlist, GenerateArgs, WordlistCommand},
    Result,
};

/// Generate passwords using dictionary words that are easier to remember.
///
/// Without a subcommand passwords are generated using the
/// top-level options, which cannot be combined with a subcommand.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Dictpw {
    #[clap(flatten)]
    generate: GenerateArgs,

    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process wordlist files.
    #[clap(alias = "wl")]
    Wordlist {
        #[clap(subcommand)]
        cmd: WordlistCommand,
    },
}

pub fn run() -> Result<()> {
    let args = Dictpw::parse();
    match args.cmd {
        Some(Command::Wordlist { cmd }) => wordlist::run(cmd)?,
        None => generate::run(args.generate)?,
    }
    Ok(())
}
