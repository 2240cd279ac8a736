//! Display conversion for the suggestion markup subset.
//!
//! Generated descriptions may use `**bold**` and `- ` bullet lines. The
//! description field stores plain text, so this module renders that subset
//! into display form: bold markers are stripped, bullets become `• `.

/// Convert a generated description into plain display text.
pub fn to_display_text(markup: &str) -> String {
    markup
        .lines()
        .map(|line| {
            let line = strip_bold(line);
            match line.trim_start().strip_prefix("- ") {
                Some(rest) => format!("• {}", rest),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove paired `**` markers from a line. An unmatched marker is kept
/// verbatim.
fn strip_bold(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        match rest[open + 2..].find("**") {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str(&rest[open + 2..open + 2 + close]);
                rest = &rest[open + 2 + close + 2..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
