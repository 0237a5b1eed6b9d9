use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["affectlex"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.lexicon.is_none());
}

#[test]
fn parses_lexicon_command_with_global_path() {
    let cli = Cli::try_parse_from(["affectlex", "lexicon", "--lexicon", "lex.yaml"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Lexicon)));
    assert_eq!(cli.lexicon, Some(PathBuf::from("lex.yaml")));
}

#[test]
fn parses_score_with_text() {
    let cli = Cli::try_parse_from(["affectlex", "score", "what a lovely day"])
        .expect("expected valid cli args");
    let Some(Commands::Score(args)) = cli.command else {
        panic!("expected score command");
    };
    assert_eq!(args.text.as_deref(), Some("what a lovely day"));
    assert!(!args.stdin);
    assert!(!args.pretty);
}

#[test]
fn parses_score_flags() {
    let cli = Cli::try_parse_from([
        "affectlex",
        "score",
        "text",
        "--encoding",
        "frequency",
        "--min",
        "-0.5",
        "--max",
        "0.5",
        "--ngrams",
        "2,4",
        "--output",
        "full",
        "--places",
        "3",
        "--sort-by",
        "weight",
        "--wc-grams",
        "--locale",
        "gb",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Score(args)) = cli.command else {
        panic!("expected score command");
    };
    assert_eq!(args.encoding.as_deref(), Some("frequency"));
    assert_eq!(args.min, Some(-0.5));
    assert_eq!(args.max, Some(0.5));
    assert_eq!(args.ngrams.as_deref(), Some("2,4"));
    assert_eq!(args.output.as_deref(), Some("full"));
    assert_eq!(args.places, Some(3));
    assert_eq!(args.sort_by.as_deref(), Some("weight"));
    assert!(args.wc_grams);
    assert_eq!(args.locale.as_deref(), Some("gb"));
}

#[test]
fn stdin_conflicts_with_text() {
    let result = Cli::try_parse_from(["affectlex", "score", "text", "--stdin"]);
    assert!(result.is_err());
}

#[test]
fn ngrams_conflicts_with_no_ngrams() {
    let result = Cli::try_parse_from(["affectlex", "score", "t", "--ngrams", "2", "--no-ngrams"]);
    assert!(result.is_err());
}

#[test]
fn negative_places_are_rejected() {
    let result = Cli::try_parse_from(["affectlex", "score", "t", "--places", "-1"]);
    assert!(result.is_err());
}

#[test]
fn help_is_answered_by_the_parser_alone() {
    // main parses before reading the environment, so a bad env var cannot mask --help.
    let err = Cli::try_parse_from(["affectlex", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
