//! Indentation-aware writer for emitting Swift source text.

use indexmap::IndexSet;

use crate::{
    attribute::AttributeSpec,
    code_block::{CodeBlock, Segment},
    modifier::Modifier,
};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Xcode default).
    pub const SWIFT: Self = Self::Spaces(4);

    /// 2-space indentation (swift-format default).
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}

/// Buffered writer that tracks indentation depth.
///
/// Indentation is written lazily, at the first non-newline character of each
/// line, so blank lines stay free of trailing whitespace. [`indent`] and
/// [`unindent`] are consumed in matched pairs around body blocks.
///
/// [`indent`]: CodeWriter::indent
/// [`unindent`]: CodeWriter::unindent
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent: Indent,
    level: usize,
    buffer: String,
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Create a new writer with 4-space indentation.
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn unindent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Emit literal text. Text may span multiple lines; every line restarts
    /// at the current indentation.
    pub fn emit(&mut self, s: &str) -> &mut Self {
        for ch in s.chars() {
            if ch == '\n' {
                self.buffer.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    self.write_indent();
                    self.at_line_start = false;
                }
                self.buffer.push(ch);
            }
        }
        self
    }

    /// Play back a code block's segments.
    pub fn emit_code(&mut self, block: &CodeBlock) -> &mut Self {
        for segment in block.segments() {
            match segment {
                Segment::Text(text) => {
                    self.emit(text);
                }
                Segment::Indent => {
                    self.indent();
                }
                Segment::Unindent => {
                    self.unindent();
                }
            }
        }
        self
    }

    /// Emit a doc block as `///` comment lines. No-op when the block is empty.
    pub fn emit_doc(&mut self, doc: &CodeBlock) -> &mut Self {
        if doc.is_empty() {
            return self;
        }
        let text = doc.to_string();
        for line in text.trim_end_matches('\n').split('\n') {
            if line.is_empty() {
                self.emit("///\n");
            } else {
                self.emit("/// ");
                self.emit(line);
                self.emit("\n");
            }
        }
        self
    }

    /// Emit attributes, one per line.
    pub fn emit_attributes(&mut self, attributes: &[AttributeSpec]) -> &mut Self {
        for attribute in attributes {
            attribute.emit(self);
            self.emit("\n");
        }
        self
    }

    /// Emit the explicit modifiers not already implied by the enclosing
    /// context, in canonical keyword order, each followed by a space.
    pub fn emit_modifiers(
        &mut self,
        modifiers: &IndexSet<Modifier>,
        implicit: &IndexSet<Modifier>,
    ) -> &mut Self {
        let mut ordered: Vec<Modifier> = modifiers
            .iter()
            .copied()
            .filter(|modifier| !implicit.contains(modifier))
            .collect();
        ordered.sort();
        for modifier in ordered {
            self.emit(modifier.keyword());
            self.emit(" ");
        }
        self
    }

    /// Get a reference to the emitted text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the emitted text.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::swift()
    }
}
