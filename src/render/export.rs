use minijinja::HtmlEscape;

use crate::error::Result;

use super::tree::Node;

const VOID_TAGS: [&str; 3] = ["img", "br", "hr"];
const BLOCK_TAGS: [&str; 12] = [
    "article", "header", "footer", "section", "div", "h1", "h2", "table", "thead", "tbody", "tr",
    "p",
];

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(s) => out.push_str(&HtmlEscape(s).to_string()),
        Node::Element {
            tag,
            class,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            if !class.is_empty() {
                out.push_str(&format!(" class=\"{}\"", HtmlEscape(class)));
            }
            for (name, value) in attrs {
                out.push_str(&format!(" {}=\"{}\"", name, HtmlEscape(value)));
            }
            out.push('>');
            if VOID_TAGS.contains(&tag.as_str()) {
                return;
            }
            for child in children {
                write_html(child, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
    }
}

/// Serialize the tree as an HTML fragment
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

/// Pretty JSON of the tree, for export tooling that rasterizes it elsewhere
pub fn to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

fn write_text(node: &Node, line: &mut String, lines: &mut Vec<String>) {
    match node {
        Node::Text(s) => line.push_str(s),
        Node::Element { tag, children, .. } => {
            let is_block = BLOCK_TAGS.contains(&tag.as_str());
            let is_cell = tag == "td" || tag == "th" || tag == "span";
            if is_cell && !line.is_empty() {
                line.push_str(if tag == "span" { " " } else { " | " });
            }
            for child in children {
                write_text(child, line, lines);
            }
            if is_block && !line.is_empty() {
                lines.push(std::mem::take(line));
            }
        }
    }
}

/// Plain-text rendering: one line per block, table cells joined by " | "
pub fn to_text(node: &Node) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    write_text(node, &mut line, &mut lines);
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_text_and_attributes() {
        let tree = Node::el("div", "a\"b", vec![Node::text("Tom & <Jerry>")])
            .with_attr("title", "x'y");
        assert_eq!(
            to_html(&tree),
            "<div class=\"a&quot;b\" title=\"x&#x27;y\">Tom &amp; &lt;Jerry&gt;</div>"
        );
    }

    #[test]
    fn metadata_cannot_inject_markup() {
        let tree = Node::leaf("div", "", "</div><script>alert(\"x\")</script>")
            .with_attr("data-item-id", "\" onclick=\"boom");
        let html = to_html(&tree);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("\" onclick"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let tree = Node::el("img", "", vec![]).with_attr("src", "logo.png");
        assert_eq!(to_html(&tree), "<img src=\"logo.png\">");
    }

    #[test]
    fn text_joins_cells() {
        let row = Node::el(
            "tr",
            "",
            vec![Node::leaf("td", "", "Design"), Node::leaf("td", "", "$10.00")],
        );
        let tree = Node::el("table", "", vec![row, Node::leaf("div", "", "after")]);
        assert_eq!(to_text(&tree), "Design | $10.00\nafter");
    }

    #[test]
    fn json_is_tagged_by_variant() {
        let json = to_json(&Node::leaf("h1", "big", "Acme")).unwrap();
        assert!(json.contains("\"Element\""));
        assert!(json.contains("\"Text\": \"Acme\""));
    }
}
