//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::{OutputMode, UiContext};
use super::theme::{styled, styles, Badge, BAR_EMPTY, BAR_FILL, DOT};

/// Render a header line for a command.
///
/// Pretty mode: "Spendy · command (context)"
/// Plain mode: "spendy command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Spendy", styles::bold(), ctx.color);
            let dot = DOT.get(ctx.unicode);
            match context {
                Some(c) => format!("{} {} {} ({})", title, dot, command, c),
                None => format!("{} {} {}", title, dot, command),
            }
        }
        OutputMode::Plain => format!("spendy {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    /// Right-aligned column, for amounts and percentages.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a borderless table.
///
/// Pretty mode: dim headers, padded columns
/// Plain mode: tab-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = ctx.width {
            table.set_width(width.min(u16::MAX as usize) as u16);
        }

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for row in rows {
            table.add_row(row);
        }

        for (i, col) in columns.iter().enumerate() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
                if col.align_right {
                    column.set_cell_alignment(CellAlignment::Right);
                }
            }
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a proportional bar for a percentage in `[0, 100]`.
pub fn bar(ctx: &UiContext, percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let fill = BAR_FILL.get(ctx.unicode).repeat(filled);
    let empty = BAR_EMPTY.get(ctx.unicode).repeat(width - filled);
    format!("{}{}", styled(&fill, styles::info(), ctx.color), empty)
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain and JSON modes: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: Some(80),
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: Some(80),
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "summary", Some("this month"));
        assert!(h.contains("Spendy"));
        assert!(h.contains("summary"));
        assert!(h.contains("(this month)"));
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "list", None), "spendy list");
    }

    #[test]
    fn test_badge_ok() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert_eq!(b, "[OK] Done");
    }

    #[test]
    fn test_kv_pretty() {
        let line = kv(&pretty_ctx(), "Total", "$10.00");
        assert_eq!(line, "Total: $10.00");
    }

    #[test]
    fn test_kv_plain() {
        let line = kv(&plain_ctx(), "This Month", "10.00");
        assert_eq!(line, "this_month=10.00");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Added", &[("ID", "abc"), ("Amount", "5.00")]);
        assert_eq!(r, "status=ok\nid=abc\namount=5.00");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(&pretty_ctx(), "Added", &[("ID", "abc")]);
        assert!(r.starts_with("[\u{2713}] Added"));
        assert!(r.contains("  ID: abc"));
    }

    #[test]
    fn test_simple_table_plain() {
        let columns = [Column::new("ID"), Column::numeric("Amount")];
        let rows = vec![
            vec!["abc".to_string(), "1.00".to_string()],
            vec!["def".to_string(), "2.50".to_string()],
        ];
        let t = simple_table(&plain_ctx(), &columns, &rows);
        assert_eq!(t, "abc\t1.00\ndef\t2.50");
    }

    #[test]
    fn test_simple_table_pretty() {
        let columns = [Column::new("Category"), Column::numeric("Amount")];
        let rows = vec![vec!["Food & Drinks".to_string(), "$12.00".to_string()]];
        let t = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Category"));
        assert!(t.contains("Amount"));
        assert!(t.contains("Food & Drinks"));
        assert!(t.contains("$12.00"));
    }

    #[test]
    fn test_bar_ascii() {
        assert_eq!(bar(&plain_ctx(), 50.0, 10), "#####.....");
        assert_eq!(bar(&plain_ctx(), 0.0, 4), "....");
        assert_eq!(bar(&plain_ctx(), 120.0, 4), "####");
    }

    #[test]
    fn test_error_message_plain() {
        let msg = error_message(&plain_ctx(), "Something failed", Some("Try again"));
        assert_eq!(msg, "error=Something failed\nhint=Try again");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "Something failed", None);
        assert!(msg.contains("Something failed"));
        assert!(msg.contains("[\u{2717}]"));
    }
}
