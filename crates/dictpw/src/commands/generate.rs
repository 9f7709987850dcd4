use clap::Args;
use dictpw_password::{
    csprng,
    secrecy::{ExposeSecret, SecretString},
    Placement, PasswordGenerator, StrengthEstimator, Zxcvbn,
};
use std::{io::Write, path::PathBuf};

use crate::{commands::check, Result, Settings};

/// Options for password generation.
///
/// Options that are not given fall back to the config file
/// and then to the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Use custom wordlist (can be passed multiple times).
    #[clap(short = 'i', long, value_name = "FILE")]
    pub input_dict: Vec<PathBuf>,

    /// Custom wordlist(s) as a glob (can be passed multiple
    /// times and combined with -i).
    #[clap(short = 'I', long, value_name = "GLOB")]
    pub input_glob: Vec<String>,

    /// Word delimiter for input files [default: newline].
    #[clap(short, long)]
    pub delimiter: Option<String>,

    /// Min length of words to use [default: 6].
    #[clap(short, long = "min-wordlen", value_name = "LEN")]
    pub min_wordlen: Option<usize>,

    /// Max length of words to use [default: no max].
    #[clap(short = 'a', long = "max-wordlen", value_name = "LEN")]
    pub max_wordlen: Option<usize>,

    /// Number of words to generate [default: 4].
    #[clap(short, long)]
    pub num_words: Option<usize>,

    /// Number of passwords to generate [default: 1].
    #[clap(short = 'N', long)]
    pub num_pwds: Option<usize>,

    /// Allow words with hyphens.
    #[clap(short = 'y', long)]
    pub allow_hyphen: bool,

    /// Allow words with spaces.
    #[clap(short = 'p', long)]
    pub allow_space: bool,

    /// Transform characters in words with some probability
    /// [0, 1] (e.g. 'a' -> '@') [default: 0].
    #[clap(short = 't', long, value_name = "PROB", value_parser = parse_probability)]
    pub trans_modify_prob: Option<f64>,

    /// Uppercase characters in words with some probability
    /// [0, 1] [default: 0].
    #[clap(short = 'u', long, value_name = "PROB", value_parser = parse_probability)]
    pub upper_modify_prob: Option<f64>,

    /// Always make first character of each word uppercase
    /// (skips all other modifications for that character).
    #[clap(short = 'U', long)]
    pub always_upper_start: bool,

    /// Add numbers and symbols with some probability [0, 1]
    /// [default: 1].
    #[clap(short = 'c', long, value_name = "PROB", value_parser = parse_probability)]
    pub add_char_prob: Option<f64>,

    /// Where to add numbers and symbols: between, beforeafter
    /// or everywhere (including between characters)
    /// [default: between].
    #[clap(short = 'w', long, value_name = "WHERE")]
    pub add_char_where: Option<Placement>,

    /// Print estimated crack times for generated passwords.
    #[clap(short = 'r', long)]
    pub crack_times: bool,

    /// Check crack times for a password rather than generating
    /// new ones (the password must not be empty).
    #[clap(short = 'R', long, value_name = "PASSWORD")]
    pub check_crack_times: Option<String>,

    /// Config file to load.
    #[clap(long, env = "DICTPW_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn parse_probability(value: &str) -> std::result::Result<f64, String> {
    match value.parse::<f64>() {
        Ok(probability) if (0.0..=1.0).contains(&probability) => {
            Ok(probability)
        }
        _ => Err(format!(
            "probability should be a valid number from [0, 1], got {}",
            value
        )),
    }
}

/// Merge the command line options over the config file.
pub fn settings(args: &GenerateArgs) -> Result<Settings> {
    let mut settings = if let Some(path) = &args.config {
        Settings::load(path)?
    } else {
        Settings::default()
    };

    if !args.input_dict.is_empty() || !args.input_glob.is_empty() {
        settings.input.files = args.input_dict.clone();
        settings.input.globs = args.input_glob.clone();
    }
    if let Some(delimiter) = &args.delimiter {
        settings.input.delimiter = delimiter.clone();
    }

    let generator = &mut settings.generator;
    if let Some(min) = args.min_wordlen {
        generator.min_word_len = min;
    }
    if let Some(max) = args.max_wordlen {
        generator.max_word_len = Some(max);
    }
    if let Some(num_words) = args.num_words {
        generator.num_words = num_words;
    }
    generator.allow_hyphen |= args.allow_hyphen;
    generator.allow_space |= args.allow_space;
    if let Some(probability) = args.trans_modify_prob {
        generator.substitute_probability = probability;
    }
    if let Some(probability) = args.upper_modify_prob {
        generator.uppercase_probability = probability;
    }
    generator.upper_first |= args.always_upper_start;
    if let Some(probability) = args.add_char_prob {
        generator.symbol_probability = probability;
    }
    if let Some(placement) = args.add_char_where {
        generator.placement = placement;
    }

    if let Some(num_passwords) = args.num_pwds {
        settings.num_passwords = num_passwords;
    }
    settings.crack_times |= args.crack_times;

    settings.validate()?;
    Ok(settings)
}

/// Generate and print passwords.
pub fn run(args: GenerateArgs) -> Result<()> {
    if let Some(password) = &args.check_crack_times {
        return check::run(password);
    }

    let settings = settings(&args)?;
    let wordlist = settings.input.load()?;
    let generator =
        PasswordGenerator::new(settings.generator.clone(), wordlist.iter())?;

    let mut rng = csprng();
    let passwords = generator.many(settings.num_passwords, &mut rng);
    let estimator = settings.crack_times.then(Zxcvbn::default);

    let mut stdout = std::io::stdout().lock();
    print_passwords(
        &mut stdout,
        &passwords,
        estimator.as_ref().map(|e| e as &dyn StrengthEstimator),
    )?;
    Ok(())
}

/// Write one password per line.
///
/// With an estimator each password is followed by its crack
/// time report and reports are separated by a blank line.
pub fn print_passwords(
    out: &mut impl Write,
    passwords: &[SecretString],
    estimator: Option<&dyn StrengthEstimator>,
) -> Result<()> {
    for (index, password) in passwords.iter().enumerate() {
        writeln!(out, "{}", password.expose_secret())?;
        if let Some(estimator) = estimator {
            writeln!(out, "{}", estimator.crack_times(password.expose_secret()))?;
            if index + 1 < passwords.len() {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
