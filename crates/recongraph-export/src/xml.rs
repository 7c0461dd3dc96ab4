//! Minimal XML writing utilities for GraphML output.

use std::fmt::Write;

/// Escape character data for an XML text node.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use inside a double-quoted XML attribute.
pub fn escape_attr(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// An XML document builder for constructing well-formed output.
pub struct XmlBuilder {
    output: String,
    open_tags: Vec<&'static str>,
}

impl XmlBuilder {
    /// Create a new document with an XML declaration (UTF-8).
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        Self {
            output,
            open_tags: Vec::new(),
        }
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (key, value) in attrs {
            let _ = write!(self.output, " {}=\"{}\"", key, escape_attr(value));
        }
    }

    /// Open an element; it stays open until the matching [`Self::close`].
    pub fn open(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.open_tags.len());
        let _ = write!(self.output, "<{tag}");
        self.write_attrs(attrs);
        self.output.push_str(">\n");
        self.open_tags.push(tag);
        self
    }

    /// Write a self-closing element.
    pub fn leaf(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.open_tags.len());
        let _ = write!(self.output, "<{tag}");
        self.write_attrs(attrs);
        self.output.push_str("/>\n");
        self
    }

    /// Write an element with character data content.
    pub fn text_element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        write_indent(&mut self.output, self.open_tags.len());
        let _ = write!(self.output, "<{tag}");
        self.write_attrs(attrs);
        let _ = write!(self.output, ">{}</{}>", escape_text(text), tag);
        self.output.push('\n');
        self
    }

    /// Close the most recently opened element.
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open_tags.pop() {
            write_indent(&mut self.output, self.open_tags.len());
            let _ = writeln!(self.output, "</{tag}>");
        }
        self
    }

    /// Finish building and return the document.
    pub fn build(mut self) -> String {
        while !self.open_tags.is_empty() {
            self.close();
        }
        self.output
    }
}

impl Default for XmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
