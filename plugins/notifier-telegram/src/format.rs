//! Message formatting.
//!
//! Success and failure messages share one layout per [`ParseMode`]. Every
//! value taken from the release event is escaped for the dialect before it
//! is inserted; layout text is written already in the dialect's syntax.

use std::borrow::Cow;
use std::fmt::Write;

use chrono::{NaiveDate, Utc};
use herald_plugin::ReleaseContext;

use crate::settings::{ParseMode, Settings};

/// Characters that must be backslash-escaped in `MarkdownV2` text.
pub const MARKDOWN_V2_SPECIAL: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Suffix appended to cut release notes.
pub const TRUNCATION_MARKER: &str = "...";

/// Which release outcome a message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The release was published.
    Success,
    /// The release failed.
    Failure,
}

/// Renders the message for a release outcome.
///
/// A non-empty custom template replaces the success layout; failure
/// messages always use the fixed layout.
#[must_use]
pub fn format_message(ctx: &ReleaseContext, settings: &Settings, outcome: Outcome) -> String {
    match outcome {
        Outcome::Success => match settings.template.as_deref().filter(|t| !t.is_empty()) {
            Some(template) => render_template(template, ctx, Utc::now().date_naive()),
            None => build_success_message(ctx, settings),
        },
        Outcome::Failure => build_error_message(ctx, settings.parse_mode),
    }
}

/// Escapes `MarkdownV2` special characters with a backslash.
///
/// Backslashes themselves are left alone; the function is not idempotent.
#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes `& < > " '` as HTML entities.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Upper-cases the first letter of every word and lower-cases the rest.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = true;
        }
    }
    result
}

/// Cuts `notes` to `limit` characters and appends [`TRUNCATION_MARKER`].
///
/// Notes within the limit, or with no limit, are returned unchanged.
#[must_use]
pub fn truncate_notes(notes: &str, limit: Option<usize>) -> Cow<'_, str> {
    match limit {
        Some(limit) if notes.chars().count() > limit => {
            let mut cut: String = notes.chars().take(limit).collect();
            cut.push_str(TRUNCATION_MARKER);
            Cow::Owned(cut)
        }
        _ => Cow::Borrowed(notes),
    }
}

/// Substitutes release fields into a user template.
///
/// Values are inserted verbatim. Unknown placeholders are left in place.
#[must_use]
pub fn render_template(template: &str, ctx: &ReleaseContext, date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d").to_string();
    let values: [(&str, &str, &str); 6] = [
        ("{{version}}", "{{.Version}}", &ctx.version),
        ("{{tag}}", "{{.TagName}}", &ctx.tag_name),
        ("{{branch}}", "{{.Branch}}", &ctx.branch),
        ("{{release_type}}", "{{.ReleaseType}}", &ctx.release_type),
        ("{{release_notes}}", "{{.ReleaseNotes}}", &ctx.release_notes),
        ("{{date}}", "{{.Date}}", &date),
    ];

    let mut result = template.to_string();
    for (placeholder, legacy, value) in values {
        result = result.replace(placeholder, value).replace(legacy, value);
    }
    result
}

/// Builds the fixed success layout.
#[must_use]
pub fn build_success_message(ctx: &ReleaseContext, settings: &Settings) -> String {
    let markup = Markup(settings.parse_mode);
    let mut out = String::new();

    _ = writeln!(
        out,
        "🚀 {}\n",
        markup.bold(&format!(
            "Release {} Published{}",
            markup.escape(&ctx.version),
            markup.bang()
        ))
    );
    _ = writeln!(out, "📦 {} {}", markup.bold("Version:"), markup.code(&ctx.version));
    _ = writeln!(
        out,
        "📋 {} {}",
        markup.bold("Type:"),
        markup.escape(&title_case(&ctx.release_type))
    );
    _ = writeln!(out, "🌿 {} {}", markup.bold("Branch:"), markup.code(&ctx.branch));
    _ = writeln!(out, "🏷️ {} {}", markup.bold("Tag:"), markup.code(&ctx.tag_name));

    if let Some(changes) = &ctx.changes {
        _ = writeln!(out, "\n{}", markup.bold("Changes:"));
        _ = writeln!(out, "• {} features", changes.features.len());
        _ = writeln!(out, "• {} bug fixes", changes.fixes.len());
        if !changes.breaking.is_empty() {
            _ = writeln!(out, "• {} breaking changes", changes.breaking.len());
        }
    }

    if settings.include_changelog && !ctx.release_notes.is_empty() {
        let notes = truncate_notes(&ctx.release_notes, settings.changelog_limit());
        _ = writeln!(out, "\n{}", markup.bold("Release Notes:"));
        out.push_str(&markup.escape(&notes));
    }

    out
}

/// Builds the fixed failure layout.
#[must_use]
pub fn build_error_message(ctx: &ReleaseContext, parse_mode: ParseMode) -> String {
    let markup = Markup(parse_mode);
    let mut out = String::new();

    _ = writeln!(
        out,
        "❌ {}\n",
        markup.bold(&format!("Release {} Failed", markup.escape(&ctx.version)))
    );
    _ = writeln!(out, "📦 {} {}", markup.bold("Version:"), markup.code(&ctx.version));
    _ = writeln!(out, "🌿 {} {}", markup.bold("Branch:"), markup.code(&ctx.branch));
    _ = write!(out, "\nPlease check the CI logs for details{}", markup.period());

    out
}

/// Dialect-specific markup. `bold` takes text that is already safe for the
/// dialect; `code` and `escape` take raw event values.
#[derive(Clone, Copy)]
struct Markup(ParseMode);

impl Markup {
    fn escape<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self.0 {
            ParseMode::MarkdownV2 => Cow::Owned(escape_markdown_v2(text)),
            ParseMode::Html => Cow::Owned(escape_html(text)),
            ParseMode::Plain => Cow::Borrowed(text),
        }
    }

    fn bold(self, text: &str) -> String {
        match self.0 {
            ParseMode::MarkdownV2 => format!("*{text}*"),
            ParseMode::Html => format!("<b>{text}</b>"),
            ParseMode::Plain => text.to_string(),
        }
    }

    fn code(self, value: &str) -> String {
        match self.0 {
            ParseMode::MarkdownV2 => format!("`{}`", escape_markdown_v2(value)),
            ParseMode::Html => format!("<code>{}</code>", escape_html(value)),
            ParseMode::Plain => value.to_string(),
        }
    }

    fn bang(self) -> &'static str {
        match self.0 {
            ParseMode::MarkdownV2 => "\\!",
            ParseMode::Html | ParseMode::Plain => "!",
        }
    }

    fn period(self) -> &'static str {
        match self.0 {
            ParseMode::MarkdownV2 => "\\.",
            ParseMode::Html | ParseMode::Plain => ".",
        }
    }
}
