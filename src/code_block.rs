//! Immutable code blocks and their fluent builder.
//!
//! A [`CodeBlock`] is the unit of body and documentation text carried by the
//! declaration specs. Blocks record indentation shifts alongside text so the
//! writer can replay them at any nesting depth.

use std::fmt;

use indexmap::IndexMap;

use crate::writer::CodeWriter;

/// One piece of a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Segment {
    /// Literal text; may span multiple lines.
    Text(String),
    /// Increase indentation for the following segments.
    Indent,
    /// Decrease indentation.
    Unindent,
}

/// An immutable fragment of Swift code or documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeBlock {
    segments: Vec<Segment>,
}

impl CodeBlock {
    /// Start building a block.
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// A block holding a single fragment of code.
    pub fn of(code: impl Into<String>) -> Self {
        Self::builder().add(code).build()
    }

    /// Whether this block holds no content at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Derive a builder preloaded with this block's content.
    pub fn to_builder(&self) -> CodeBlockBuilder {
        CodeBlockBuilder {
            segments: self.segments.clone(),
        }
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::default();
        writer.emit_code(self);
        f.write_str(writer.as_str())
    }
}

/// Fluent builder for [`CodeBlock`].
///
/// The control-flow helpers pair a brace-opening head with an indentation
/// shift, so nested statements land one level deeper:
///
/// ```
/// use swiftspec::CodeBlock;
///
/// let block = CodeBlock::builder()
///     .begin_control_flow("if items.isEmpty")
///     .add_statement("return nil")
///     .end_control_flow()
///     .build();
///
/// assert_eq!(block.to_string(), "if items.isEmpty {\n    return nil\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    segments: Vec<Segment>,
}

impl CodeBlockBuilder {
    /// Add a raw fragment of code.
    pub fn add(mut self, code: impl Into<String>) -> Self {
        self.push_text(code.into());
        self
    }

    /// Add a fragment terminated by a newline.
    pub fn add_statement(mut self, code: impl Into<String>) -> Self {
        let mut text = code.into();
        text.push('\n');
        self.push_text(text);
        self
    }

    /// Expand `{key}` placeholders in `template` from `arguments`, then add
    /// the result. Keys missing from the map are left verbatim.
    pub fn add_named(mut self, template: &str, arguments: &IndexMap<String, String>) -> Self {
        let mut text = template.to_string();
        for (key, value) in arguments {
            text = text.replace(&format!("{{{key}}}"), value);
        }
        self.push_text(text);
        self
    }

    /// Add a `// text` comment line.
    pub fn add_comment(mut self, text: impl Into<String>) -> Self {
        self.push_text(format!("// {}\n", text.into()));
        self
    }

    /// Open a control-flow block: `head {` plus one level of indentation.
    pub fn begin_control_flow(mut self, head: impl Into<String>) -> Self {
        self.push_text(format!("{} {{\n", head.into()));
        self.segments.push(Segment::Indent);
        self
    }

    /// Continue a control-flow block: `} head {` at the enclosing level.
    pub fn next_control_flow(mut self, head: impl Into<String>) -> Self {
        self.segments.push(Segment::Unindent);
        self.push_text(format!("}} {} {{\n", head.into()));
        self.segments.push(Segment::Indent);
        self
    }

    /// Close a control-flow block.
    pub fn end_control_flow(mut self) -> Self {
        self.segments.push(Segment::Unindent);
        self.push_text("}\n".to_string());
        self
    }

    /// Append another block's content.
    pub fn add_block(mut self, block: &CodeBlock) -> Self {
        self.segments.extend(block.segments.iter().cloned());
        self
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Freeze into an immutable [`CodeBlock`].
    pub fn build(self) -> CodeBlock {
        CodeBlock {
            segments: self.segments,
        }
    }

    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        self.segments.push(Segment::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block() {
        assert!(CodeBlock::default().is_empty());
        assert!(CodeBlock::builder().add("").build().is_empty());
        assert_eq!(CodeBlock::default().to_string(), "");
    }

    #[test]
    fn test_statement_appends_newline() {
        let block = CodeBlock::builder().add_statement("let x = 1").build();
        assert_eq!(block.to_string(), "let x = 1\n");
    }

    #[test]
    fn test_control_flow_nesting() {
        let block = CodeBlock::builder()
            .begin_control_flow("if count > 0")
            .add_statement("total += count")
            .next_control_flow("else")
            .add_statement("total = 0")
            .end_control_flow()
            .build();

        assert_eq!(
            block.to_string(),
            "if count > 0 {\n    total += count\n} else {\n    total = 0\n}\n"
        );
    }

    #[test]
    fn test_named_template_expansion() {
        let mut arguments = IndexMap::new();
        arguments.insert("name".to_string(), "user".to_string());
        let block = CodeBlock::builder()
            .add_named("print({name}) // {missing}\n", &arguments)
            .build();
        assert_eq!(block.to_string(), "print(user) // {missing}\n");
    }

    #[test]
    fn test_comment_line() {
        let block = CodeBlock::builder().add_comment("fast path").build();
        assert_eq!(block.to_string(), "// fast path\n");
    }

    #[test]
    fn test_to_builder_round_trip() {
        let block = CodeBlock::builder().add_statement("return 1").build();
        let extended = block.to_builder().add_statement("return 2").build();
        assert_eq!(extended.to_string(), "return 1\nreturn 2\n");
        // the source block is unchanged
        assert_eq!(block.to_string(), "return 1\n");
    }

    #[test]
    fn test_add_block_concatenates() {
        let first = CodeBlock::of("a\n");
        let block = CodeBlock::builder().add_block(&first).add("b\n").build();
        assert_eq!(block.to_string(), "a\nb\n");
    }
}
