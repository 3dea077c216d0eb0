//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod demo;
pub mod hist_vol;
pub mod history;
pub mod price;
pub mod stdev;

/// Renders two-column rows as a box-drawn table.
pub(crate) fn render_table(header: (&str, &str), rows: &[(String, String)]) -> String {
    let left = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(header.0.chars().count()))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(header.1.chars().count()))
        .max()
        .unwrap_or(0);

    let rule = |l: char, m: char, r: char| {
        format!(
            "{}{}{}{}{}\n",
            l,
            "─".repeat(left + 2),
            m,
            "─".repeat(right + 2),
            r
        )
    };
    let line = |k: &str, v: &str| format!("│ {:<left$} │ {:>right$} │\n", k, v);

    let mut out = rule('┌', '┬', '┐');
    out.push_str(&line(header.0, header.1));
    out.push_str(&rule('├', '┼', '┤'));
    for (k, v) in rows {
        out.push_str(&line(k, v));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}
