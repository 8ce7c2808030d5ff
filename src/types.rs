//! Type references and generic type variables.

use std::fmt;

use indexmap::IndexSet;

use crate::writer::CodeWriter;

/// A reference to a Swift type, e.g. `Int`, `Array<Element>?`,
/// `Swift.Result<Value, Failure>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    name: String,
    type_arguments: Vec<TypeName>,
    optional: bool,
}

impl TypeName {
    /// A plain type reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_arguments: Vec::new(),
            optional: false,
        }
    }

    /// A generic type reference, e.g. `parameterized("Array", [element])`.
    pub fn parameterized(
        name: impl Into<String>,
        type_arguments: impl IntoIterator<Item = TypeName>,
    ) -> Self {
        Self {
            name: name.into(),
            type_arguments: type_arguments.into_iter().collect(),
            optional: false,
        }
    }

    /// Wrap in optional sugar (`T?`).
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Base name, without generic arguments or optional sugar.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn emit(&self, writer: &mut CodeWriter) {
        writer.emit(&self.to_string());
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, argument) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{argument}")?;
            }
            write!(f, ">")?;
        }
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A generic type variable with optional bounds, e.g. `T: Comparable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    name: String,
    bounds: Vec<TypeName>,
}

impl TypeVariable {
    /// An unbounded type variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Add a bound; multiple bounds render as `T: A & B`.
    pub fn bound(mut self, bound: impl Into<TypeName>) -> Self {
        self.bounds.push(bound.into());
        self
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, bound) in self.bounds.iter().enumerate() {
            if i == 0 {
                write!(f, ": {bound}")?;
            } else {
                write!(f, " & {bound}")?;
            }
        }
        Ok(())
    }
}

/// Emit a `<T, U: Bound>` generic clause. No-op when the set is empty.
pub(crate) fn emit_type_variables(writer: &mut CodeWriter, type_variables: &IndexSet<TypeVariable>) {
    if type_variables.is_empty() {
        return;
    }
    writer.emit("<");
    for (i, type_variable) in type_variables.iter().enumerate() {
        if i > 0 {
            writer.emit(", ");
        }
        writer.emit(&type_variable.to_string());
    }
    writer.emit(">");
}
