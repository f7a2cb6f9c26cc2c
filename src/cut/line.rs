/// Per-line field selection.
use super::config::Config;

/// Cut one line according to `config`.
///
/// Returns an empty string when the line is suppressed by separated-only mode
/// or when no selected field exists on the line; callers treat both as
/// "print nothing". Indices past the last column are skipped.
#[must_use]
pub fn cut_line(line: &str, config: &Config) -> String {
    if config.separated_only && !line.contains(config.delimiter.as_str()) {
        return String::new();
    }

    let columns: Vec<&str> = line.split(config.delimiter.as_str()).collect();
    let selected: Vec<&str> = config
        .fields
        .indices_within(columns.len())
        .map(|idx| columns[idx - 1])
        .collect();

    selected.join(&config.delimiter)
}

/// Cut every line, keeping only the non-empty results in input order.
#[must_use]
pub fn cut_lines<S: AsRef<str>>(lines: &[S], config: &Config) -> Vec<String> {
    lines
        .iter()
        .map(|line| cut_line(line.as_ref(), config))
        .filter(|out| !out.is_empty())
        .collect()
}
