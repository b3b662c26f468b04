/// Lays out pre-formatted items as an indented, delimiter-wrapped block.
///
/// An empty `items` slice collapses to `open` immediately followed by
/// `close` (`{}`, `[]`, `Point()`). Otherwise each item lands on its own
/// line indented by `(indent + 2) * 2` spaces, items are joined with
/// `",\n"`, and the closing delimiter sits on a final line indented by
/// `indent * 2` spaces. No trailing comma is emitted.
pub fn render_block(items: &[String], indent: usize, open: &str, close: &str) -> String {
    if items.is_empty() {
        return format!("{open}{close}");
    }
    let outer = " ".repeat(indent * 2);
    let inner = " ".repeat((indent + 2) * 2);
    let body = items
        .iter()
        .map(|item| format!("{inner}{item}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{open}\n{body}\n{outer}{close}")
}
