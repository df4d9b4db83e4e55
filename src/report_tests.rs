use super::*;

fn pseudo() -> Value {
    Value::new("pseudo")
}

fn report_with(validations: &[&str], arguments: &[&str]) -> Report {
    let mut report = Report::new();
    for issue in validations {
        report.record_validation(*issue);
    }
    for issue in arguments {
        report.record_argument(*issue);
    }
    report
}

#[test]
fn has_error_with_validation_issue() {
    assert!(report_with(&["validation error"], &[]).has_error());
}

#[test]
fn has_error_with_argument_issue() {
    assert!(report_with(&[], &["argument error"]).has_error());
}

#[test]
fn has_error_with_both_channels() {
    assert!(report_with(&["validation error"], &["argument error"]).has_error());
}

#[test]
fn no_error_when_nothing_recorded() {
    let report = Report::new();
    assert!(!report.has_error());
    assert_eq!(report.issue_count(), 0);
    assert_eq!(report.render(&pseudo()), "");
}

#[test]
fn render_one_validation_issue() {
    assert_eq!(
        report_with(&["one"], &[]).render(&pseudo()),
        "Validation error: The specified value \"pseudo\" is invalid. Issues: one."
    );
}

#[test]
fn render_multiple_validation_issues() {
    assert_eq!(
        report_with(&["one", "two"], &[]).render(&pseudo()),
        "Validation error: The specified value \"pseudo\" is invalid. Issues: one, two."
    );
}

#[test]
fn render_one_argument_issue() {
    assert_eq!(
        report_with(&[], &["one"]).render(&pseudo()),
        "Argument error: one."
    );
}

#[test]
fn render_multiple_argument_issues() {
    assert_eq!(
        report_with(&[], &["one", "two"]).render(&pseudo()),
        "Argument error: one, two."
    );
}

#[test]
fn render_both_channels() {
    assert_eq!(
        report_with(&["one", "two"], &["three", "four"]).render(&pseudo()),
        "Validation error: The specified value \"pseudo\" is invalid. Issues: one, two; \
         Argument error: three, four."
    );
}

#[test]
fn render_masks_value() {
    let value = Value::new("secret-token").with_mask(true);
    let rendered = report_with(&["one"], &[]).render(&value);
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("\"***\""));
}

#[test]
fn render_uses_value_name() {
    let value = Value::new("pseudo").with_name("test-id");
    assert_eq!(
        report_with(&["one"], &[]).render(&value),
        "Validation error: The specified test-id \"pseudo\" is invalid. Issues: one."
    );
}

#[test]
fn record_routes_outcomes_to_channels() {
    let mut report = Report::new();
    report.record(RuleOutcome::Passed);
    report.record(RuleOutcome::ValidationFail("bad value".to_string()));
    report.record(RuleOutcome::ArgumentFail("bad argument".to_string()));

    assert_eq!(report.validations(), ["bad value".to_string()]);
    assert_eq!(report.arguments(), ["bad argument".to_string()]);
    assert_eq!(report.issue_count(), 2);
}

#[test]
fn record_preserves_insertion_order() {
    let report = report_with(&["b", "a", "c"], &[]);
    assert_eq!(report.validations(), ["b", "a", "c"]);
}
