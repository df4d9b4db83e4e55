use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("valid").chain(args.iter().copied()))
}

#[test]
fn cli_without_flags_configures_nothing() {
    let orchestrator = parse(&[]).into_orchestrator();
    assert_eq!(orchestrator.value.unmasked(), "");
    assert_eq!(orchestrator.value.name(), "value");
    assert_eq!(orchestrator.rules, RuleSet::default());
    assert_eq!(
        orchestrator.formatter.output_format(),
        OutputFormat::Default
    );
}

#[test]
fn cli_value_flags() {
    let orchestrator =
        parse(&["--value", "secret", "--value-name", "token", "--mask-value"]).into_orchestrator();
    assert_eq!(orchestrator.value.unmasked(), "secret");
    assert_eq!(orchestrator.value.masked(), "***");
    assert_eq!(orchestrator.value.name(), "token");
}

#[test]
fn cli_string_rules() {
    let cli = parse(&[
        "--min", "1",
        "--max", "9",
        "--exact-length", "5",
        "--min-length", "2",
        "--max-length", "8",
        "--pattern", "^a+$",
        "--enum", "foo,bar",
        "--timestamp", "date",
    ]);
    let rules = cli.into_orchestrator().rules;
    assert_eq!(rules.min, "1");
    assert_eq!(rules.max, "9");
    assert_eq!(rules.exact_length, "5");
    assert_eq!(rules.min_length, "2");
    assert_eq!(rules.max_length, "8");
    assert_eq!(rules.pattern, "^a+$");
    assert_eq!(rules.enumeration, "foo,bar");
    assert_eq!(rules.timestamp, "date");
}

#[test]
fn cli_flag_rules() {
    let cli = parse(&[
        "--not-empty",
        "--digit",
        "--alpha",
        "--alphanumeric",
        "--ascii",
        "--printable-ascii",
        "--lower-case",
        "--upper-case",
        "--int",
        "--float",
        "--url",
        "--domain",
        "--email",
        "--semver",
        "--uuid",
        "--base64",
        "--json",
    ]);
    let rules = cli.into_orchestrator().rules;
    assert_eq!(rules.configured_rules().count(), 17);
}

#[test]
fn cli_accepts_negative_numbers() {
    let rules = parse(&["--value", "-5", "--min", "-10", "--max", "-1"])
        .into_orchestrator()
        .rules;
    assert_eq!(rules.min, "-10");
    assert_eq!(rules.max, "-1");
}

#[test]
fn cli_github_actions_format() {
    let orchestrator = parse(&["--format", "github-actions"]).into_orchestrator();
    assert_eq!(
        orchestrator.formatter.output_format(),
        OutputFormat::GithubActions
    );
}

#[test]
fn cli_unknown_format_falls_back_to_default() {
    let orchestrator = parse(&["--format", "xml"]).into_orchestrator();
    assert_eq!(
        orchestrator.formatter.output_format(),
        OutputFormat::Default
    );
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["valid", "--no-such-rule"]).is_err());
}

#[test]
fn cli_accepts_negative_lengths_and_hyphenated_names() {
    let orchestrator = parse(&[
        "--exact-length", "-1",
        "--min-length", "-2",
        "--max-length", "-3",
        "--timestamp", "-date",
        "--value-name", "-id",
    ])
    .into_orchestrator();
    assert_eq!(orchestrator.rules.exact_length, "-1");
    assert_eq!(orchestrator.rules.min_length, "-2");
    assert_eq!(orchestrator.rules.max_length, "-3");
    assert_eq!(orchestrator.rules.timestamp, "-date");
    assert_eq!(orchestrator.value.name(), "-id");
}
