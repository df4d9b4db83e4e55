use rstest::rstest;

use super::*;

fn assert_outcome(outcome: &RuleOutcome, issue: Option<&str>) {
    match issue {
        None => assert_eq!(*outcome, RuleOutcome::Passed),
        Some(issue) => assert_eq!(*outcome, RuleOutcome::ValidationFail(issue.to_string())),
    }
}

#[rstest]
#[case::text("abc", None)]
#[case::zero("0", None)]
#[case::false_literal("false", None)]
#[case::null_literal("null", None)]
#[case::whitespace(" ", None)]
#[case::empty("", Some("cannot be blank"))]
fn not_empty_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&not_empty(value), issue);
}

#[rstest]
#[case::digits("12345", None)]
#[case::mixed("abc12", Some("must contain digits only"))]
#[case::full_width("１２３", Some("must contain digits only"))]
fn digit_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&digit(value), issue);
}

#[rstest]
#[case::letters("abcABC", None)]
#[case::with_digits("abcABC123", Some("must contain English letters only"))]
#[case::accented("café", Some("must contain English letters only"))]
fn alpha_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&alpha(value), issue);
}

#[rstest]
#[case::letters_and_digits("abcABC123", None)]
#[case::symbols("abcABC123<>", Some("must contain English letters and digits only"))]
fn alphanumeric_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&alphanumeric(value), issue);
}

#[rstest]
#[case::symbols("abcABC123<>", None)]
#[case::whitespace_controls("'newline\r\ntab\t'", None)]
#[case::full_range("'\x00 ASCII \x7F'", None)]
#[case::printable_range("'\x20 printable ASCII \x7E'", None)]
#[case::non_printable("'\x19 not printable ASCII \x7F'", None)]
#[case::japanese("abcABC123<>あ", Some("must contain ASCII characters only"))]
fn ascii_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&ascii(value), issue);
}

#[rstest]
#[case::symbols("abcABC123<>", None)]
#[case::printable_range("'\x20 printable ASCII \x7E'", None)]
#[case::japanese("abcABC123<>あ", Some("must contain printable ASCII characters only"))]
#[case::whitespace_controls("'newline\r\ntab\t'", Some("must contain printable ASCII characters only"))]
#[case::full_range("'\x00 ASCII \x7F'", Some("must contain printable ASCII characters only"))]
#[case::non_printable("'\x19 not printable ASCII \x7F'", Some("must contain printable ASCII characters only"))]
fn printable_ascii_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&printable_ascii(value), issue);
}

#[rstest]
#[case::letters("abc", None)]
#[case::with_symbols("abc123<>", None)]
#[case::unicode("ßäö", None)]
#[case::mixed("abcABC", Some("must be in lower case"))]
#[case::unicode_upper("Äbc", Some("must be in lower case"))]
fn lower_case_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&lower_case(value), issue);
}

#[rstest]
#[case::letters("ABC", None)]
#[case::with_symbols("ABC123<>", None)]
#[case::unicode("ÄÖÜ", None)]
#[case::mixed("abcABC", Some("must be in upper case"))]
fn upper_case_cases(#[case] value: &str, #[case] issue: Option<&str>) {
    assert_outcome(&upper_case(value), issue);
}

#[test]
fn empty_value_satisfies_every_class() {
    for outcome in [
        digit(""),
        alpha(""),
        alphanumeric(""),
        ascii(""),
        printable_ascii(""),
        lower_case(""),
        upper_case(""),
    ] {
        assert!(outcome.is_passed());
    }
}
