//! Placeholder substitution for plain-text templates
//!
//! Two placeholder forms are recognized within a single line:
//! - named `{word}` or `{a phrase mentioning word}`, matched by keyword
//!   containment against the caller's keys;
//! - bare `{}`, filled with the caller's default value when one is given.
//!
//! Substitution is a single left-to-right pass: inserted values are never
//! re-scanned.

/// Replace placeholders in `content`.
///
/// For a named placeholder the first key in `values` whose text occurs inside
/// the placeholder wins. Placeholders with no matching key, and bare `{}`
/// without a `default`, are copied verbatim.
pub fn substitute(content: &str, values: &[(&str, &str)], default: Option<&str>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find(['}', '{', '\n']) else {
            out.push('{');
            rest = after_open;
            continue;
        };
        if !after_open[close..].starts_with('}') {
            out.push('{');
            rest = after_open;
            continue;
        }

        let inner = &after_open[..close];
        let replacement = if inner.is_empty() {
            default
        } else {
            values
                .iter()
                .find(|(key, _)| !key.is_empty() && inner.contains(key))
                .map(|(_, value)| *value)
        };

        match replacement {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(inner);
                out.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Replace every `# {...}` placeholder heading with `# title`.
///
/// The placeholder must close on the same line; text after it is kept.
pub fn retitle_headings(content: &str, title: &str) -> String {
    const MARKER: &str = "# {";
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find(MARKER) {
        let after_marker = &rest[start + MARKER.len()..];
        match after_marker.find(['}', '\n']) {
            Some(end) if after_marker[end..].starts_with('}') => {
                out.push_str(&rest[..start]);
                out.push_str("# ");
                out.push_str(title);
                rest = &after_marker[end + 1..];
            }
            _ => {
                out.push_str(&rest[..start + MARKER.len()]);
                rest = after_marker;
            }
        }
    }

    out.push_str(rest);
    out
}
