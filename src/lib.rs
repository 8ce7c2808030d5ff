//! Declarative Swift source code generation.
//!
//! This crate models Swift declarations as immutable specs, built through
//! validating builders and rendered to formatted source text through an
//! indentation-aware writer.
//!
//! # Module Organization
//!
//! - [`function`] - Function-like declaration specs (functions, initializers,
//!   accessors, observers, operators) and their emission
//! - [`signature`] - The type-variable/parameter/effect signature sub-model
//! - [`parameter`] - Parameter specs with argument labels and defaults
//! - [`type_spec`] - Nested type declarations
//! - [`code_block`] - Immutable body/doc blocks and their fluent builder
//! - [`writer`] - Indentation-aware source writer
//! - [`attribute`] - Attribute specs and the attributed-spec base
//! - [`modifier`] - Swift declaration modifiers
//! - [`types`] - Type references and generic type variables
//! - [`naming`] - Reserved-word escaping
//! - [`error`] - Grammar-violation errors
//!
//! # Example
//!
//! ```
//! use swiftspec::{FunctionSpec, Modifier, ParameterSpec};
//!
//! let mut builder = FunctionSpec::builder("greet");
//! builder
//!     .add_modifier(Modifier::Public)?
//!     .add_parameter(ParameterSpec::new("name", "String"))?
//!     .add_statement("print(\"Hello, \\(name)!\")")?;
//! let spec = builder.build()?;
//!
//! assert_eq!(
//!     spec.to_string(),
//!     "public func greet(name: String) {\n    print(\"Hello, \\(name)!\")\n}\n"
//! );
//! # Ok::<(), Box<swiftspec::Error>>(())
//! ```

pub mod attribute;
pub mod code_block;
pub mod error;
pub mod function;
pub mod modifier;
pub mod naming;
pub mod parameter;
pub mod signature;
pub mod type_spec;
pub mod types;
pub mod writer;

pub use attribute::{AttributeSpec, Attributed};
pub use code_block::{CodeBlock, CodeBlockBuilder};
pub use error::{Error, Result};
pub use function::{DeclarationKind, FunctionBody, FunctionSpec, FunctionSpecBuilder};
pub use modifier::Modifier;
pub use parameter::ParameterSpec;
pub use signature::FunctionSignature;
pub use type_spec::{TypeSpec, TypeSpecBuilder, TypeSpecKind};
pub use types::{TypeName, TypeVariable};
pub use writer::{CodeWriter, Indent};
