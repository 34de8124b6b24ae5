//! Minimal XML element tree for the rendering demonstrations.
//!
//! Output is compact (no declaration, no indentation) so it can be compared
//! verbatim.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        if self.text.is_none() && self.children.is_empty() {
            out.push_str(&format!("<{}/>", self.name));
            return;
        }
        out.push_str(&format!("<{}>", self.name));
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str(&format!("</{}>", self.name));
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements_and_escapes_text() {
        let doc = Element::new("CD")
            .child(Element::with_text("TITLE", "Rock & <Roll>"))
            .child(Element::new("TRACKS"));
        assert_eq!(
            doc.render(),
            "<CD><TITLE>Rock &amp; &lt;Roll&gt;</TITLE><TRACKS/></CD>"
        );
    }
}
