use anyhow::Result;
use dictpw_password::{
    generator::{assemble, sample_words},
    secrecy::ExposeSecret,
    symbols::inject_symbols,
    transform::transform_word,
    Error, GeneratorConfig, PasswordGenerator, Placement, SubstitutionTable,
    DIGITS, SYMBOLS,
};
use dictpw_unit_tests::mock::Scripted;
use dictpw_wordlist::Wordlist;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

const FRUIT: &str = "../fixtures/wordlists/fruit.txt";

fn fruit() -> Result<Wordlist> {
    Ok(Wordlist::load_files([FRUIT], "\n")?)
}

fn is_symbol(c: char) -> bool {
    DIGITS.contains(&c) || SYMBOLS.contains(&c)
}

#[test]
fn two_plain_fruit_words() -> Result<()> {
    let wordlist = fruit()?;
    let config = GeneratorConfig::plain(2).lengths(1, None);
    let generator = PasswordGenerator::new(config, wordlist.iter())?;
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let parts = generator.parts(&mut rng);
        assert_eq!(2, parts.len());
        assert_ne!(parts[0], parts[1]);
        assert!(parts.iter().all(|p| wordlist.contains(p)));

        let password = assemble(&parts);
        assert_eq!(10, password.len());
        assert_eq!(format!("{}{}", parts[0], parts[1]), password);
    }
    Ok(())
}

#[test]
fn scripted_selection_is_exact() -> Result<()> {
    let wordlist = fruit()?;
    let config = GeneratorConfig::plain(2).lengths(1, None);
    let generator = PasswordGenerator::new(config, wordlist.iter())?;

    // Swap index 0 with itself then index 1 with index 2
    let mut rng = Scripted::new([0, 1], []);
    let password = generator.one(&mut rng);
    assert_eq!("applemango", password.expose_secret());
    Ok(())
}

#[test]
fn no_duplicates_within_password() -> Result<()> {
    let wordlist = fruit()?;
    let config = GeneratorConfig::plain(4).lengths(1, None);
    let generator = PasswordGenerator::new(config, wordlist.iter())?;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let words: HashSet<String> =
            generator.parts(&mut rng).into_iter().collect();
        assert_eq!(4, words.len());
    }
    Ok(())
}

#[test]
fn sample_uses_every_word() {
    let words: Vec<String> =
        ["apple", "grape", "mango", "peach"].map(String::from).to_vec();
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.extend(sample_words(&words, 1, &mut rng));
    }
    assert_eq!(4, seen.len());
}

#[test]
fn too_short_before_sampling() -> Result<()> {
    let wordlist = fruit()?;
    let config = GeneratorConfig::plain(5).lengths(1, None);
    let result = PasswordGenerator::new(config, wordlist.iter());
    assert!(matches!(
        result,
        Err(Error::WordlistTooShort {
            available: 4,
            required: 5
        })
    ));
    Ok(())
}

#[test]
fn filter_policy_on_mixed_wordlist() -> Result<()> {
    let wordlist =
        Wordlist::load_files(["../fixtures/wordlists/mixed.txt"], "\n")?;
    assert!(wordlist.contains("apple"));

    let config = GeneratorConfig::plain(1).lengths(5, Some(6));
    let generator = PasswordGenerator::new(config, wordlist.iter())?;
    let mut words = generator.words().to_vec();
    words.sort();
    assert_eq!(vec!["apple", "banana", "cherry"], words);

    let config = GeneratorConfig::plain(1).lengths(1, None).hyphen(true);
    let generator = PasswordGenerator::new(config, wordlist.iter())?;
    assert!(generator.words().contains(&"blood-orange".to_owned()));
    assert!(!generator.words().contains(&"passion fruit".to_owned()));

    let config = GeneratorConfig::plain(1).lengths(1, None).space(true);
    let generator = PasswordGenerator::new(config, wordlist.iter())?;
    assert!(generator.words().contains(&"passion fruit".to_owned()));
    assert!(!generator.words().contains(&"blood-orange".to_owned()));
    Ok(())
}

#[test]
fn zero_probabilities_keep_words() {
    let table = SubstitutionTable::default();
    let config = GeneratorConfig::plain(1);
    let mut rng = Scripted::new([], [true; 32]);
    assert_eq!("lighthouse", transform_word("LightHouse", &config, &table, &mut rng));

    let config = config.upper_first(true);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!("Lighthouse", transform_word("lighthouse", &config, &table, &mut rng));
}

#[test]
fn trials_run_per_character_in_order() {
    let table = SubstitutionTable::default();
    let config = GeneratorConfig::plain(1)
        .substitute(0.25)
        .uppercase(0.75)
        .upper_first(true);

    // Per character: substitute then uppercase
    let mut rng = Scripted::new([1], [false, true, true, false, true, true]);
    let word = transform_word("toss", &config, &table, &mut rng);
    assert_eq!("TO$5", word);
    assert_eq!(vec![0.25, 0.75, 0.25, 0.75, 0.25, 0.75], rng.trials);
}

#[test]
fn zero_symbol_probability_never_inserts() -> Result<()> {
    let wordlist = fruit()?;
    for placement in Placement::ALL {
        let config = GeneratorConfig::new(3)
            .lengths(1, None)
            .symbols(0.0, placement);
        let generator = PasswordGenerator::new(config, wordlist.iter())?;
        let mut rng = Scripted::new([], [true; 64]);
        let password = generator.one(&mut rng);
        assert_eq!(15, password.expose_secret().len());
        assert!(rng.trials.iter().all(|p| *p == 0.0));
    }
    Ok(())
}

#[test]
fn placement_insertion_points() {
    let config = GeneratorConfig::default();
    let alphabet = ['#'];

    let between = config.clone().symbols(1.0, Placement::Between);
    let mut rng = Scripted::new([], [true; 16]);
    assert_eq!("fox#", inject_symbols("fox", false, &between, &alphabet, &mut rng));
    assert_eq!("fox", inject_symbols("fox", true, &between, &alphabet, &mut rng));

    let before_after = config.clone().symbols(0.5, Placement::BeforeAfter);
    let mut rng = Scripted::new([], [true; 16]);
    assert_eq!("#fox#", inject_symbols("fox", true, &before_after, &alphabet, &mut rng));
    assert_eq!(2, rng.trials.len());

    let everywhere = config.symbols(0.5, Placement::Everywhere);
    let mut rng = Scripted::new([], [false, true, false, true]);
    assert_eq!("f#ox#", inject_symbols("fox", false, &everywhere, &alphabet, &mut rng));
    assert_eq!(4, rng.trials.len());
}

#[test]
fn full_pipeline_with_symbols() -> Result<()> {
    let wordlist = fruit()?;
    let config = GeneratorConfig::new(4)
        .lengths(1, None)
        .substitute(0.5)
        .uppercase(0.5)
        .upper_first(true)
        .symbols(1.0, Placement::Between);
    let generator = PasswordGenerator::new(config, wordlist.iter())?;
    let mut rng = StdRng::seed_from_u64(99);
    for password in generator.many(20, &mut rng) {
        let chars: Vec<char> = password.expose_secret().chars().collect();
        // four words of five characters and three separators
        assert_eq!(23, chars.len());
        for index in [5, 11, 17] {
            assert!(is_symbol(chars[index]));
        }
        for index in [0, 6, 12, 18] {
            assert!(chars[index].is_ascii_uppercase());
        }
    }
    Ok(())
}
