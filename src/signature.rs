//! The signature sub-model: type variables, parameters, effects, return type.

use indexmap::IndexSet;

use crate::{
    parameter::ParameterSpec,
    types::{self, TypeName, TypeVariable},
    writer::CodeWriter,
};

/// The type-parameter/parameter/return-type/effect bundle of a declaration.
///
/// Owned exclusively by one [`FunctionSpec`]; the builder stages mutations
/// into it and `build()` snapshots a copy, so spec values never alias.
///
/// [`FunctionSpec`]: crate::function::FunctionSpec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSignature {
    pub(crate) type_variables: IndexSet<TypeVariable>,
    pub(crate) parameters: Vec<ParameterSpec>,
    pub(crate) return_type: Option<TypeName>,
    pub(crate) throws: bool,
    pub(crate) is_async: bool,
    pub(crate) failable: bool,
}

impl FunctionSignature {
    /// An empty signature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generic type variables, unique, in declaration order.
    pub fn type_variables(&self) -> &IndexSet<TypeVariable> {
        &self.type_variables
    }

    /// Parameters, in declaration order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Return type, if any.
    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    /// Whether the declaration is marked `throws`.
    pub fn throws(&self) -> bool {
        self.throws
    }

    /// Whether the declaration is marked `async`.
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// Whether the declaration is a failable initializer (`init?`).
    pub fn is_failable(&self) -> bool {
        self.failable
    }

    /// Emit the signature: printed name, failable marker, generic clause,
    /// parameter list, effect markers, return clause.
    ///
    /// With `include_empty_parameter_list`, a parenthesis pair is printed
    /// even when there are no parameters and parameters carry full
    /// `label name: Type` syntax. Without it (the accessor and deinitializer
    /// grammar), empty lists vanish and parameters print as bare names.
    pub(crate) fn emit(
        &self,
        writer: &mut CodeWriter,
        printed_name: &str,
        include_empty_parameter_list: bool,
    ) {
        writer.emit(printed_name);
        if self.failable {
            writer.emit("?");
        }
        types::emit_type_variables(writer, &self.type_variables);
        if include_empty_parameter_list || !self.parameters.is_empty() {
            writer.emit("(");
            for (i, parameter) in self.parameters.iter().enumerate() {
                if i > 0 {
                    writer.emit(", ");
                }
                parameter.emit(writer, include_empty_parameter_list);
            }
            writer.emit(")");
        }
        if self.is_async {
            writer.emit(" async");
        }
        if self.throws {
            writer.emit(" throws");
        }
        if let Some(return_type) = &self.return_type {
            writer.emit(" -> ");
            return_type.emit(writer);
        }
    }
}
