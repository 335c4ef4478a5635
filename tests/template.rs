//! Tests for format template parsing and rendering.

use hermes::{FormatSegment, FormatTemplate, Placeholder, Severity};

#[test]
fn parse_default_template() {
    let template = FormatTemplate::parse("[{logname}] {logmessage}");
    assert_eq!(
        template.segments(),
        &[
            FormatSegment::Literal("[".to_string()),
            FormatSegment::Placeholder(Placeholder::Logname),
            FormatSegment::Literal("] ".to_string()),
            FormatSegment::Placeholder(Placeholder::Logmessage),
        ]
    );
}

#[test]
fn render_substitutes_each_placeholder() {
    let template = FormatTemplate::parse("[{logname}] {loglevel}: {logmessage}");
    let line = template.render("app", Severity::Warn, "started");
    assert_eq!(line, "[app] WARN: started");
}

#[test]
fn render_contains_severity_name_for_all_severities() {
    let template = FormatTemplate::parse("{loglevel}");
    for severity in Severity::all() {
        assert_eq!(template.render("n", severity, "m"), severity.as_str());
    }
}

#[test]
fn unknown_placeholder_passes_through_verbatim() {
    let template = FormatTemplate::parse("{logname} {timestamp} {logmessage}");
    let line = template.render("app", Severity::Info, "msg");
    assert_eq!(line, "app {timestamp} msg");
}

#[test]
fn unterminated_brace_is_literal() {
    let template = FormatTemplate::parse("{logname} and {rest");
    assert_eq!(
        template.render("app", Severity::Info, "msg"),
        "app and {rest"
    );
}

#[test]
fn template_without_placeholders_is_untouched() {
    let template = FormatTemplate::parse("static text only");
    assert_eq!(
        template.render("app", Severity::Error, "msg"),
        "static text only"
    );
}

#[test]
fn empty_braces_are_literal() {
    let template = FormatTemplate::parse("a {} b");
    assert_eq!(template.render("app", Severity::Info, "m"), "a {} b");
}

#[test]
fn repeated_placeholder_substitutes_every_occurrence() {
    let template = FormatTemplate::parse("{logname}/{logname}");
    assert_eq!(template.render("app", Severity::Info, "m"), "app/app");
}

#[test]
fn empty_template_renders_empty() {
    let template = FormatTemplate::parse("");
    assert_eq!(template.render("app", Severity::Info, "m"), "");
}

#[test]
fn default_template_constant() {
    assert_eq!(FormatTemplate::DEFAULT, "[{logname}] {logmessage}");
    assert_eq!(
        FormatTemplate::default().render("app", Severity::Info, "hello"),
        "[app] hello"
    );
}
