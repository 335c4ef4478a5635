//! The output layout is user-configurable instead of hardcoded — a template
//! like `"[{logname}] {loglevel}: {logmessage}"` is parsed once into segments
//! and re-rendered for every log call.

use crate::level::Severity;

/// Closed set of known substitution tokens — unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The logger's name.
    Logname,
    /// The severity's uppercase textual name.
    Loglevel,
    /// The message text passed to `log`.
    Logmessage,
}

impl Placeholder {
    /// Template parsing needs to match brace-delimited names against known placeholders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logname => "logname",
            Self::Loglevel => "loglevel",
            Self::Logmessage => "logmessage",
        }
    }

    /// Iteration over all variants avoids forgetting a placeholder when matching by name.
    pub const ALL: &'static [Self] = &[Self::Logname, Self::Loglevel, Self::Logmessage];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, surrounding text, and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted with their values at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template — parse once, render on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// The documented default, which reproduces the plain `[name] message` layout.
    pub const DEFAULT: &'static str = "[{logname}] {logmessage}";

    /// One-time parse turns `"[{logname}] {logmessage}"` into a segment list.
    ///
    /// There is no validation step: a brace sequence that does not name a
    /// recognized placeholder, or a `{` with no closing brace, is kept as
    /// literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            if let Some(len) = rest[open..].find('}') {
                current.push_str(&rest[..open]);
                let name = &rest[open + 1..open + len];

                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }

                if let Some(ph) = Self::match_placeholder(name) {
                    segments.push(FormatSegment::Placeholder(ph));
                } else {
                    // Unknown placeholder, keep as literal
                    segments.push(FormatSegment::Literal(format!("{{{name}}}")));
                }

                rest = &rest[open + len + 1..];
            } else {
                break;
            }
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    /// Tests and downstream code need direct access to verify parse results.
    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes values into the pre-parsed segments — the hot path for every log line.
    #[must_use]
    pub fn render(&self, name: &str, severity: Severity, message: &str) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => result.push_str(match ph {
                    Placeholder::Logname => name,
                    Placeholder::Loglevel => severity.as_str(),
                    Placeholder::Logmessage => message,
                }),
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}
