use super::*;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("fastwild").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_defaults_from_settings() {
    let settings = Settings::default();
    let opt = parse(&[]);
    assert_eq!(opt.groups(&settings), settings.groups);
    assert_eq!(opt.engines(&settings), settings.engines);
    assert_eq!(opt.repetitions(&settings), 1);
    assert!(!opt.timing(&settings));
    assert_eq!(opt.unit(&settings), SymbolUnit::Char);
    assert!(opt.pattern.is_none());
}

#[test]
fn test_overrides() {
    let settings = Settings::default();
    let opt = parse(&["-g", "wild", "--group", "utf8", "-e", "bytes", "-n", "10", "--timing", "-u", "grapheme"]);
    assert_eq!(opt.groups(&settings), vec![Group::Wild, Group::Utf8]);
    assert_eq!(opt.engines(&settings), vec![Engine::Bytes]);
    assert_eq!(opt.repetitions(&settings), 10);
    assert!(opt.timing(&settings));
    assert_eq!(opt.unit(&settings), SymbolUnit::Grapheme);
}

#[test]
fn test_timing_toggle() {
    let mut settings = Settings::default();
    settings.timing = true;
    assert!(parse(&[]).timing(&settings));
    assert!(!parse(&["--no-timing"]).timing(&settings));
    assert!(!parse(&["--timing", "--no-timing"]).timing(&settings));
    assert!(parse(&["--no-timing", "--timing"]).timing(&settings));
}

#[test]
fn test_zero_repetitions_rejected() {
    assert!(Opt::try_parse_from(["fastwild", "-n", "0"]).is_err());
}

#[test]
fn test_unknown_group_rejected() {
    assert!(Opt::try_parse_from(["fastwild", "-g", "regex"]).is_err());
}

#[test]
fn test_match() {
    let opt = parse(&["-m", "*.rs", "main.rs", "lib.txt"]);
    assert_eq!(opt.pattern.as_deref(), Some("*.rs"));
    assert_eq!(opt.texts, vec!["main.rs", "lib.txt"]);

    let opt = parse(&["--match", "-*", "--", "-v"]);
    assert_eq!(opt.pattern.as_deref(), Some("-*"));
    assert_eq!(opt.texts, vec!["-v"]);
}

#[test]
fn test_texts_require_pattern() {
    assert!(Opt::try_parse_from(["fastwild", "main.rs"]).is_err());
}

#[test]
fn test_config_files() {
    let opt = parse(&["--config", "a.yaml", "--config", "b.toml"]);
    assert_eq!(opt.config_files(), (&["a.yaml".to_owned(), "b.toml".to_owned()][..], false));

    let opt = parse(&["--config", "a.yaml", "--config", "-", "--config", "c.yaml"]);
    assert_eq!(opt.config_files(), (&["c.yaml".to_owned()][..], true));

    let opt = parse(&["--config", ""]);
    assert_eq!(opt.config_files(), (&[] as &[String], true));
}
