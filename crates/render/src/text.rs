//! Plain-text writer for the document tree, used for terminal previews.
//!
//! Block elements start a new line, table cells are joined with ` | `, and
//! anything inside `head`/`style` is skipped.

use crate::document::{Element, Node};

const BLOCK_TAGS: &[&str] = &[
    "div", "p", "section", "h1", "h2", "h3", "table", "thead", "tbody", "tr", "footer", "header",
];
const SKIPPED_TAGS: &[&str] = &["head", "style", "title", "meta"];

pub fn write(node: &Node) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    walk(node, &mut current, &mut lines);
    flush(&mut current, &mut lines);
    lines.join("\n")
}

fn walk(node: &Node, current: &mut String, lines: &mut Vec<String>) {
    match node {
        Node::Text(text) => current.push_str(text),
        Node::Element(element) => walk_element(element, current, lines),
    }
}

fn walk_element(element: &Element, current: &mut String, lines: &mut Vec<String>) {
    if SKIPPED_TAGS.contains(&element.tag) {
        return;
    }
    if element.tag == "tr" {
        flush(current, lines);
        let cells: Vec<String> = element
            .children
            .iter()
            .map(|cell| cell.text_content().trim().to_string())
            .collect();
        lines.push(cells.join(" | "));
        return;
    }

    let block = BLOCK_TAGS.contains(&element.tag);
    if block {
        flush(current, lines);
    }
    // Spans inside a row read "Subtotal: $20.00", not "Subtotal:$20.00".
    if element.tag == "span" && !current.is_empty() && !current.ends_with(' ') {
        current.push(' ');
    }
    for child in &element.children {
        walk(child, current, lines);
    }
    if block {
        flush(current, lines);
    }
}

fn flush(current: &mut String, lines: &mut Vec<String>) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::el;

    #[test]
    fn blocks_become_lines() {
        let node: Node = el("div")
            .child(el("h3").text("Client"))
            .child(el("p").child(el("strong").text("Name:")).text(" Bob"))
            .into();
        assert_eq!(write(&node), "Client\nName: Bob");
    }

    #[test]
    fn table_rows_join_cells() {
        let node: Node = el("table")
            .child(el("tr").child(el("th").text("Qty")).child(el("th").text("Total")))
            .child(el("tr").child(el("td").text("2")).child(el("td").text("$20.00")))
            .into();
        assert_eq!(write(&node), "Qty | Total\n2 | $20.00");
    }

    #[test]
    fn spans_are_separated_and_styles_skipped() {
        let node: Node = el("div")
            .child(el("style").text("body {}"))
            .child(
                el("div")
                    .child(el("span").text("Total:"))
                    .child(el("span").text("$16.50")),
            )
            .into();
        assert_eq!(write(&node), "Total: $16.50");
    }
}
