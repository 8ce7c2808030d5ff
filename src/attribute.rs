//! Attribute specifications and the attributed-spec base.

use indexmap::IndexMap;

use crate::writer::CodeWriter;

/// A Swift attribute, e.g. `@discardableResult` or `@available(iOS 15, *)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSpec {
    name: String,
    arguments: Vec<String>,
}

impl AttributeSpec {
    /// Create a new attribute without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Add multiple arguments.
    pub fn arguments(mut self, arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Attribute name, without the `@`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn emit(&self, writer: &mut CodeWriter) {
        writer.emit("@");
        writer.emit(&self.name);
        if !self.arguments.is_empty() {
            writer.emit("(");
            writer.emit(&self.arguments.join(", "));
            writer.emit(")");
        }
    }
}

/// Common surface of every attributed spec: ordered attributes plus
/// arbitrary keyed metadata.
pub trait Attributed {
    /// Attributes, in declaration order.
    fn attributes(&self) -> &[AttributeSpec];

    /// Arbitrary keyed metadata carried through unchanged; never rendered.
    fn tags(&self) -> &IndexMap<String, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_attribute() {
        let attribute = AttributeSpec::new("discardableResult");
        let mut writer = CodeWriter::swift();
        attribute.emit(&mut writer);
        assert_eq!(writer.as_str(), "@discardableResult");
    }

    #[test]
    fn test_attribute_with_arguments() {
        let attribute = AttributeSpec::new("available").arguments(["iOS 15", "*"]);
        let mut writer = CodeWriter::swift();
        attribute.emit(&mut writer);
        assert_eq!(writer.as_str(), "@available(iOS 15, *)");
    }
}
