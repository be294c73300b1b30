use crate::domain::model::{Selection, Suggestion};
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Format the rendered candidate list for the terminal: primary name,
/// uid, and the joined gloss line underneath each row.
pub fn format_suggestions(items: &[Suggestion], theme: &Theme) -> String {
    let mut output = String::new();

    if items.is_empty() {
        writeln!(output, "  {}", (theme.line)("(no matches)")).ok();
        return output;
    }

    for (i, item) in items.iter().enumerate() {
        writeln!(
            output,
            "  {} {}  {}",
            (theme.idx)(&format!("{}.", i + 1)),
            (theme.name)(item.display_name()),
            (theme.uid)(&item.uid)
        )
        .ok();
        writeln!(output, "     {}", (theme.gloss)(&item.gloss_line())).ok();
    }

    output
}

pub fn format_selection(selection: &Selection, theme: &Theme) -> String {
    format!(
        "{} {}  {}\n",
        (theme.title)(&selection.display_name),
        (theme.uid)(&selection.uid),
        (theme.line)(&format!("(id {})", selection.id))
    )
}
