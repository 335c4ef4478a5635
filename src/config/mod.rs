//! Plain-text key-value configuration, one directive per line:
//!
//! ```text
//! enabled true
//! format "[{logname}] {loglevel}: {logmessage}"
//! ```
//!
//! The file is optional and re-read on every log call. There is no schema
//! validation: unrecognized keys and malformed lines are skipped, so a config
//! typo degrades to the in-memory defaults instead of breaking logging.

use std::fs;
use std::path::Path;

/// The fixed relative path probed when no explicit path is configured.
pub const DEFAULT_PATH: &str = "hermes.conf";

/// The subset of logger state a config file may overwrite.
///
/// `None` means the directive was absent — the logger keeps its current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// `enabled true` / `enabled false`.
    pub enabled: Option<bool>,
    /// `format "..."` — a double-quoted template string.
    pub format: Option<String>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// Returns `None` when the file is absent or unreadable — reload is a
    /// silent no-op in both cases, never an error.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        Some(Self::parse(&content))
    }

    /// Scans the directive lines, keeping the last occurrence of each
    /// recognized key. Any line that does not tokenize into a recognized
    /// key with a well-formed value has no effect.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let trimmed = line.trim();
            let Some((key, value)) = trimmed.split_once(char::is_whitespace) else {
                continue;
            };

            match key {
                "enabled" => match value.split_whitespace().next() {
                    Some("true") => config.enabled = Some(true),
                    Some("false") => config.enabled = Some(false),
                    _ => {}
                },
                "format" => {
                    if let Some(s) = parse_quoted(value.trim()) {
                        config.format = Some(s);
                    }
                }
                _ => {}
            }
        }

        config
    }
}

/// Unquotes a `"..."` token, honoring `\"`, `\\`, `\n`, and `\t` escapes.
/// Anything not wrapped in double quotes is rejected (the line is ignored).
fn parse_quoted(token: &str) -> Option<String> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some(escaped) => result.push(escaped),
                // Trailing backslash before the closing quote — malformed.
                None => return None,
            }
        } else if c == '"' {
            // An unescaped quote inside the token — malformed.
            return None;
        } else {
            result.push(c);
        }
    }

    Some(result)
}
