use anyhow::Result;
use dictpw_wordlist::{
    expand_globs, output_path, parse_delimiter, read_unique, write_wordlist,
    Dedupe, Wordlist,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn union_of_wordlists() -> Result<()> {
    let mut wordlist =
        Wordlist::load_files(["../fixtures/wordlists/fruit.txt"], "\n")?;
    assert_eq!(4, wordlist.len());

    let added = wordlist.add_file("../fixtures/wordlists/comma.txt", ",")?;
    assert_eq!(3, added);
    assert_eq!(7, wordlist.len());
    assert!(wordlist.contains("papaya"));
    Ok(())
}

#[test]
fn glob_fixtures() -> Result<()> {
    let mut files = expand_globs(["../fixtures/wordlists/*.txt"])?;
    files.sort();
    assert_eq!(3, files.len());
    assert!(files[0].ends_with("comma.txt"));

    let none = expand_globs(["../fixtures/wordlists/*.csv"])?;
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn glob_invalid_pattern() {
    assert!(expand_globs(["../fixtures/[*.txt"]).is_err());
}

#[test]
fn dedupe_and_resplit() -> Result<()> {
    let dir = tempdir()?;
    let mut dedupe = Dedupe::new();
    dedupe.add_file("../fixtures/wordlists/fruit.txt", "\n")?;
    let kept = dedupe.add_file(
        "../fixtures/wordlists/comma.txt",
        &parse_delimiter(",")?,
    )?;
    assert_eq!(3, kept);
    assert_eq!(7, dedupe.total());

    for set in dedupe.sets() {
        let path = output_path(&set.source, dir.path())?;
        write_wordlist(&path, &set.words, " ")?;
    }
    assert_eq!(
        "apple grape mango peach",
        fs::read_to_string(dir.path().join("fruit.new.txt"))?
    );
    assert_eq!(
        "guava kiwi papaya",
        fs::read_to_string(dir.path().join("comma.new.txt"))?
    );

    let words = read_unique(
        &fs::read_to_string(dir.path().join("comma.new.txt"))?,
        " ",
    );
    assert_eq!(3, words.len());
    Ok(())
}
