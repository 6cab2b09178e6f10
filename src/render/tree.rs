use serde::Serialize;

/// Renderable document tree handed to preview and export tooling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Element {
        tag: String,
        class: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn el(tag: &str, class: &str, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.to_string(),
            class: class.to_string(),
            attrs: Vec::new(),
            children,
        }
    }

    /// Element holding a single text child
    pub fn leaf(tag: &str, class: &str, s: impl Into<String>) -> Self {
        Self::el(tag, class, vec![Node::text(s)])
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name.to_string(), value.into()));
        }
        self
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Text leaves in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Text(s) => out.push(s),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
        }
    }

    pub fn text_content(&self) -> String {
        self.texts().concat()
    }

    /// True if any text leaf equals `needle` exactly
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// First element (depth-first) with the given tag
    pub fn find_tag(&self, wanted: &str) -> Option<&Node> {
        match self {
            Node::Element { tag, .. } if tag == wanted => Some(self),
            Node::Element { children, .. } => children.iter().find_map(|c| c.find_tag(wanted)),
            Node::Text(_) => None,
        }
    }
}
