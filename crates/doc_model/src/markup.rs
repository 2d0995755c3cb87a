//! Restricted hyperlink markup
//!
//! Resume strings may embed exactly one kind of markup: an anchor tag such as
//! `<a href='https://example.com'>Example</a>`. [`MarkupParser`] splits a
//! string into plain and hyperlinked [`Run`]s. It is deliberately not a
//! general markup parser: anything that does not form a complete anchor is
//! kept as literal text, and the parser never fails.
//!
//! Recognized shape:
//! - `<a` (case-insensitive) followed by whitespace and attributes, closed by `>`
//! - an `href` attribute quoted with `'` or `"`; other attributes are ignored
//! - literal label text up to the first `</a>`; labels are never nested

use crate::Run;
use std::borrow::Cow;

/// Why a `<` that looked like markup was kept as literal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradationKind {
    /// `<a ...` never reached its closing `>`
    UnterminatedOpenTag,
    /// Anchor without a quoted `href`
    MissingHref,
    /// `href` present but blank
    EmptyHref,
    /// No `</a>` after the opening tag
    MissingCloseTag,
    /// Nothing between the opening and closing tags
    EmptyLabel,
    /// `</a>` with no opening tag
    UnmatchedCloseTag,
}

/// A degraded tag: byte offset of its `<` in the source string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degradation {
    pub offset: usize,
    pub kind: DegradationKind,
}

/// Parser output including every place markup was downgraded to text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMarkup {
    pub runs: Vec<Run>,
    pub degradations: Vec<Degradation>,
}

impl ParsedMarkup {
    /// Whether any tag-like text was kept literally
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    /// Visible text of all runs, i.e. the source with anchors replaced by labels
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Splits strings into plain and hyperlink runs
pub struct MarkupParser;

impl MarkupParser {
    /// Parse `raw` into runs
    ///
    /// Empty input yields no runs; plain text yields exactly one plain run.
    pub fn parse(raw: &str) -> Vec<Run> {
        Self::parse_detailed(raw).runs
    }

    /// Parse `raw`, also reporting where markup was degraded to literal text
    pub fn parse_detailed(raw: &str) -> ParsedMarkup {
        let mut parsed = ParsedMarkup::default();
        let mut pending = String::new();
        let mut cursor = 0;

        while let Some(rel) = raw[cursor..].find('<') {
            let start = cursor + rel;
            pending.push_str(&raw[cursor..start]);

            match match_tag(&raw[start..]) {
                TagMatch::Anchor {
                    url,
                    label,
                    consumed,
                } => {
                    flush_plain(&mut pending, &mut parsed.runs);
                    parsed.runs.push(Run::hyperlink(label, url.into_owned()));
                    cursor = start + consumed;
                }
                TagMatch::NotATag => {
                    pending.push('<');
                    cursor = start + 1;
                }
                TagMatch::Malformed(kind) => {
                    tracing::debug!(offset = start, ?kind, "hyperlink markup kept as literal text");
                    parsed.degradations.push(Degradation {
                        offset: start,
                        kind,
                    });
                    pending.push('<');
                    cursor = start + 1;
                }
            }
        }

        pending.push_str(&raw[cursor..]);
        flush_plain(&mut pending, &mut parsed.runs);
        parsed
    }
}

fn flush_plain(pending: &mut String, runs: &mut Vec<Run>) {
    if !pending.is_empty() {
        runs.push(Run::plain(std::mem::take(pending)));
    }
}

enum TagMatch<'a> {
    Anchor {
        url: Cow<'a, str>,
        label: &'a str,
        consumed: usize,
    },
    NotATag,
    Malformed(DegradationKind),
}

/// Try to match a complete anchor at the start of `s` (which begins with `<`)
fn match_tag(s: &str) -> TagMatch<'_> {
    let bytes = s.as_bytes();

    if close_tag_len(bytes).is_some() {
        return TagMatch::Malformed(DegradationKind::UnmatchedCloseTag);
    }
    if bytes.len() < 2 || !bytes[1].eq_ignore_ascii_case(&b'a') {
        return TagMatch::NotATag;
    }
    match bytes.get(2) {
        None => return TagMatch::Malformed(DegradationKind::UnterminatedOpenTag),
        Some(b'>') => return TagMatch::Malformed(DegradationKind::MissingHref),
        Some(b) if b.is_ascii_whitespace() => {}
        // `<abbr>`, `<a1` and friends are not anchors
        Some(_) => return TagMatch::NotATag,
    }

    let (href, open_len) = match scan_open_tag(s) {
        Ok(found) => found,
        Err(kind) => return TagMatch::Malformed(kind),
    };
    let href = match href.map(str::trim) {
        Some(h) if !h.is_empty() => h,
        Some(_) => return TagMatch::Malformed(DegradationKind::EmptyHref),
        None => return TagMatch::Malformed(DegradationKind::MissingHref),
    };

    let rest = &s[open_len..];
    let Some((label_len, close_len)) = find_close_tag(rest) else {
        return TagMatch::Malformed(DegradationKind::MissingCloseTag);
    };
    let label = &rest[..label_len];
    if label.is_empty() {
        return TagMatch::Malformed(DegradationKind::EmptyLabel);
    }

    let url = quick_xml::escape::unescape(href).unwrap_or(Cow::Borrowed(href));
    TagMatch::Anchor {
        url,
        label,
        consumed: open_len + label_len + close_len,
    }
}

/// Scan the attributes of `<a ...>` starting after `<a`
///
/// Returns the first quoted `href` value and the byte length of the open tag.
fn scan_open_tag(s: &str) -> Result<(Option<&str>, usize), DegradationKind> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut href = None;
    let mut i = 2;

    loop {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            return Err(DegradationKind::UnterminatedOpenTag);
        }
        match bytes[i] {
            b'>' => return Ok((href, i + 1)),
            b'/' => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let name_start = i;
        while i < len && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = &s[name_start..i];

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len || bytes[i] != b'=' {
            // valueless attribute
            continue;
        }
        i += 1;
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            return Err(DegradationKind::UnterminatedOpenTag);
        }

        let value = match bytes[i] {
            quote @ (b'\'' | b'"') => {
                let value_start = i + 1;
                let Some(end) = s[value_start..].find(quote as char) else {
                    return Err(DegradationKind::UnterminatedOpenTag);
                };
                i = value_start + end + 1;
                Some(&s[value_start..value_start + end])
            }
            _ => {
                // unquoted values are skipped and never count as an href
                while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                None
            }
        };

        if href.is_none() && name.eq_ignore_ascii_case("href") {
            href = value;
        }
    }
}

/// Length of a closing anchor tag (`</a>`, `</A >`) at the start of `s`
fn close_tag_len(s: &[u8]) -> Option<usize> {
    if s.len() < 3 || s[0] != b'<' || s[1] != b'/' || !s[2].eq_ignore_ascii_case(&b'a') {
        return None;
    }
    let mut i = 3;
    while i < s.len() && s[i].is_ascii_whitespace() {
        i += 1;
    }
    (s.get(i) == Some(&b'>')).then_some(i + 1)
}

/// Find the first closing anchor tag: (offset, length)
fn find_close_tag(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut from = 0;
    while let Some(pos) = s[from..].find("</") {
        let at = from + pos;
        if let Some(len) = close_tag_len(&bytes[at..]) {
            return Some((at, len));
        }
        from = at + 2;
    }
    None
}
