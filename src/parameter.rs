//! Function parameter specifications.

use crate::{code_block::CodeBlock, types::TypeName, writer::CodeWriter};

/// A parameter of a function-like declaration.
///
/// Renders as `label name: Type` in full parameter lists and as the bare
/// `name` in accessor parameter lists (`set(newValue)`), which take no type
/// annotations in Swift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    argument_label: Option<String>,
    name: String,
    type_name: TypeName,
    inout: bool,
    variadic: bool,
    default_value: Option<CodeBlock>,
}

impl ParameterSpec {
    /// Create a parameter whose argument label is its name.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            argument_label: None,
            name: name.into(),
            type_name: type_name.into(),
            inout: false,
            variadic: false,
            default_value: None,
        }
    }

    /// Set an external argument label (`with value: Int`).
    pub fn argument_label(mut self, label: impl Into<String>) -> Self {
        self.argument_label = Some(label.into());
        self
    }

    /// Suppress the external label (`_ value: Int`).
    pub fn unlabeled(self) -> Self {
        self.argument_label("_")
    }

    /// Mark as `inout`.
    pub fn inout(mut self) -> Self {
        self.inout = true;
        self
    }

    /// Mark as variadic (`Int...`).
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Set a default value expression.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(CodeBlock::of(value));
        self
    }

    /// Internal parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type.
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub(crate) fn emit(&self, writer: &mut CodeWriter, include_type: bool) {
        if !include_type {
            writer.emit(&self.name);
            return;
        }
        if let Some(label) = &self.argument_label {
            writer.emit(label);
            writer.emit(" ");
        }
        writer.emit(&self.name);
        writer.emit(": ");
        if self.inout {
            writer.emit("inout ");
        }
        self.type_name.emit(writer);
        if self.variadic {
            writer.emit("...");
        }
        if let Some(default_value) = &self.default_value {
            writer.emit(" = ");
            writer.emit_code(default_value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(parameter: &ParameterSpec, include_type: bool) -> String {
        let mut writer = CodeWriter::swift();
        parameter.emit(&mut writer, include_type);
        writer.finish()
    }

    #[test]
    fn test_basic_parameter() {
        let parameter = ParameterSpec::new("count", "Int");
        assert_eq!(render(&parameter, true), "count: Int");
    }

    #[test]
    fn test_argument_label() {
        let parameter = ParameterSpec::new("url", "URL").argument_label("from");
        assert_eq!(render(&parameter, true), "from url: URL");
    }

    #[test]
    fn test_unlabeled() {
        let parameter = ParameterSpec::new("value", "Int").unlabeled();
        assert_eq!(render(&parameter, true), "_ value: Int");
    }

    #[test]
    fn test_inout_variadic_default() {
        let parameter = ParameterSpec::new("buffer", "Data").inout();
        assert_eq!(render(&parameter, true), "buffer: inout Data");

        let parameter = ParameterSpec::new("items", "Int").variadic();
        assert_eq!(render(&parameter, true), "items: Int...");

        let parameter = ParameterSpec::new("retries", "Int").default_value("3");
        assert_eq!(render(&parameter, true), "retries: Int = 3");
    }

    #[test]
    fn test_accessor_style_is_bare_name() {
        let parameter = ParameterSpec::new("newValue", "Int").argument_label("with");
        assert_eq!(render(&parameter, false), "newValue");
    }
}
