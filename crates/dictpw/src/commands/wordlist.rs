use clap::Subcommand;
use dictpw_cli_helpers::messages::{info, success, warn};
use dictpw_wordlist::{
    output_path, parse_delimiter, write_wordlist, Dedupe, Error,
};
use std::{
    collections::{BTreeSet, HashSet},
    path::PathBuf,
};

use crate::Result;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove duplicate words from wordlists.
    ///
    /// Output file names are based on the input file names,
    /// words.txt is written to words.new.txt.
    Dedupe {
        /// Output directory.
        #[clap(short = 'd', long, default_value = ".")]
        outdir: PathBuf,

        /// Delimiter of input files.
        #[clap(short = 'i', long, default_value = "\\n")]
        input_delimiter: String,

        /// Delimiter of output files.
        #[clap(short = 'o', long, default_value = "\\n")]
        output_delimiter: String,

        /// Combine all output files into one (name will be based
        /// on the first input file).
        #[clap(short, long)]
        combine: bool,

        /// Input file names.
        #[clap(required = true)]
        infiles: Vec<PathBuf>,
    },
}

/// Handle wordlist commands.
pub fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Dedupe {
            outdir,
            input_delimiter,
            output_delimiter,
            combine,
            infiles,
        } => {
            dedupe(
                outdir,
                &input_delimiter,
                &output_delimiter,
                combine,
                infiles,
            )?;
        }
    }
    Ok(())
}

/// Deduplicate words across files and write the results.
///
/// Nothing is written unless every input can be read and no
/// output file already exists.
pub fn dedupe(
    outdir: PathBuf,
    input_delimiter: &str,
    output_delimiter: &str,
    combine: bool,
    infiles: Vec<PathBuf>,
) -> Result<Vec<PathBuf>> {
    if !outdir.is_dir() {
        return Err(Error::NotDirectory(outdir).into());
    }
    let input_delimiter = parse_delimiter(input_delimiter)?;
    let output_delimiter = parse_delimiter(output_delimiter)?;

    let mut dedupe = Dedupe::new();
    for file in &infiles {
        if dedupe.add_file(file, &input_delimiter)? == 0 {
            warn(format!("{} has no new words", file.display()));
        }
    }

    info(format!("Total unique input words: {}", dedupe.total()));

    let outputs: Vec<(PathBuf, &BTreeSet<String>)> = if combine {
        let first = infiles.first().ok_or(Error::NoInput)?;
        vec![(output_path(first, &outdir)?, dedupe.combined())]
    } else {
        dedupe
            .sets()
            .iter()
            .map(|set| Ok((output_path(&set.source, &outdir)?, &set.words)))
            .collect::<Result<Vec<_>>>()?
    };

    let mut targets = HashSet::with_capacity(outputs.len());
    for (path, _) in &outputs {
        if path.exists() || !targets.insert(path) {
            return Err(Error::FileExists(path.clone()).into());
        }
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (path, words) in outputs {
        let count = write_wordlist(&path, words, &output_delimiter)?;
        success(format!("Writing {} with {} words", path.display(), count));
        written.push(path);
    }
    Ok(written)
}
