use std::path::MAIN_SEPARATOR;

/// Number of indent units making up one nesting level (`"│   "`, `"├── "`, `"    "`)
pub const INDENT_WIDTH: usize = 4;

/// Prefixes stripped once each, in this order, from the text left after indentation
const DRAWING_PREFIXES: [&str; 11] = [
    "── ", "-- ", "─ ", "- ", "└──", "├──", "│", "└─", "├─", "└", "├",
];

/// Characters repeatedly stripped from the front of a name afterwards
const DRAWING_CHARS: [char; 6] = ['├', '└', '│', '─', '|', '-'];

/// Result of classifying one non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub level: usize,
    pub name: String,
    pub is_dir: bool,
}

/// Whether `c` counts as one indent unit when it leads a line
pub fn is_tree_symbol(c: char) -> bool {
    matches!(
        c,
        ' ' | '│' | '├' | '└' | '─' | '|' | '-' | '+' | '\\' | '/' | '>' | ':' | '\''
    )
}

/// Cuts the line at the first `#`. Comments cannot be escaped.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Classifies a line into its level, name and kind.
///
/// Returns `None` when nothing nameable is left once the comment and the
/// drawing characters are removed.
pub fn parse_line(line: &str) -> Option<ClassifiedLine> {
    let line = strip_comment(line).trim_end_matches(' ');
    if line.trim().is_empty() {
        return None;
    }

    let indent_units = line.chars().take_while(|c| is_tree_symbol(*c)).count();
    let remaining = line.trim_start_matches(is_tree_symbol);

    let name = extract_name(remaining);
    if name.is_empty() {
        return None;
    }

    let (name, is_dir) = classify(name);
    Some(ClassifiedLine {
        level: indent_units / INDENT_WIDTH,
        name,
        is_dir,
    })
}

/// Strips drawing prefixes, leftover drawing characters and a trailing comment.
pub fn extract_name(text: &str) -> String {
    let mut name = text.trim();
    for prefix in DRAWING_PREFIXES {
        name = name.strip_prefix(prefix).unwrap_or(name);
    }
    name = name.trim();

    while let Some(rest) = name.strip_prefix(&DRAWING_CHARS[..]) {
        name = rest.trim();
    }

    strip_comment(name).trim().to_string()
}

/// A trailing `/` forces a directory. Otherwise a name without an extension
/// or separator is taken for a directory, so `Makefile` becomes one too.
fn classify(name: String) -> (String, bool) {
    if let Some(stripped) = name.strip_suffix('/') {
        return (stripped.to_string(), true);
    }

    let is_dir = !name.contains('.') && !name.contains(MAIN_SEPARATOR);
    (name, is_dir)
}
