//! Function-like declaration specs.
//!
//! This module is the heart of the crate: [`FunctionSpec`] models an
//! ordinary function, initializer, deinitializer, property accessor,
//! property observer, or operator declaration. A spec is assembled through
//! [`FunctionSpecBuilder`], which validates every mutation against the
//! grammar of the declaration's [`DeclarationKind`], and is rendered through
//! [`FunctionSpec::emit`].

use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use indexmap::{IndexMap, IndexSet};

use crate::{
    attribute::{AttributeSpec, Attributed},
    code_block::{CodeBlock, CodeBlockBuilder},
    error::{Error, Result},
    modifier::Modifier,
    naming,
    parameter::ParameterSpec,
    signature::FunctionSignature,
    type_spec::TypeSpec,
    types::{TypeName, TypeVariable},
    writer::CodeWriter,
};

const CONSTRUCTOR: &str = "init";
const DEINITIALIZER: &str = "deinit";
const GETTER: &str = "get";
const SETTER: &str = "set";
const WILL_SET: &str = "willSet";
const DID_SET: &str = "didSet";

/// Internal prefix distinguishing operator declarations from ordinary names.
/// Never printed; the display name strips it.
const OPERATOR_MARKER: &str = "operator:";

/// Classification of a function-like declaration, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A named function, declared with the `func` keyword.
    Ordinary,
    /// An initializer (`init`).
    Constructor,
    /// A deinitializer (`deinit`).
    Deinitializer,
    /// A property getter (`get`).
    Getter,
    /// A property setter (`set`).
    Setter,
    /// A `willSet` property observer.
    WillObserve,
    /// A `didSet` property observer.
    DidObserve,
    /// An operator declaration, e.g. `func +`.
    Operator,
}

impl DeclarationKind {
    /// Classify a declaration name. Total over all strings: names that are
    /// not one of the sentinel names and carry no operator marker are
    /// [`Ordinary`](Self::Ordinary).
    pub fn classify(name: &str) -> Self {
        if name.starts_with(OPERATOR_MARKER) {
            return Self::Operator;
        }
        match name {
            CONSTRUCTOR => Self::Constructor,
            DEINITIALIZER => Self::Deinitializer,
            GETTER => Self::Getter,
            SETTER => Self::Setter,
            WILL_SET => Self::WillObserve,
            DID_SET => Self::DidObserve,
            _ => Self::Ordinary,
        }
    }

    /// Whether this is a property accessor (`get`/`set`).
    pub fn is_accessor(self) -> bool {
        matches!(self, Self::Getter | Self::Setter)
    }

    /// Whether this is a property observer (`willSet`/`didSet`).
    pub fn is_observer(self) -> bool {
        matches!(self, Self::WillObserve | Self::DidObserve)
    }
}

/// Body of a built declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionBody {
    /// Statements emitted inside a brace block.
    Concrete(CodeBlock),
    /// No body at all: the declaration ends after its signature, as in a
    /// protocol requirement. Distinct from an empty concrete body, which
    /// still renders its braces.
    Abstract,
}

impl FunctionBody {
    /// Whether this is the abstract marker.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Abstract)
    }
}

/// An immutable function-like declaration.
///
/// Built through [`FunctionSpecBuilder`]; safe to share and render from any
/// number of threads. Equality, ordering-free hashing, and [`Display`] are
/// all defined over the rendered source text: two specs are equal exactly
/// when they emit identical text under a default writer.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    name: String,
    kind: DeclarationKind,
    doc: CodeBlock,
    attributes: Vec<AttributeSpec>,
    tags: IndexMap<String, String>,
    modifiers: IndexSet<Modifier>,
    signature: FunctionSignature,
    local_types: Vec<TypeSpec>,
    body: FunctionBody,
}

impl FunctionSpec {
    /// Start building a declaration. The name decides the kind: `init`,
    /// `deinit`, `get`, `set`, `willSet`, and `didSet` are recognized as
    /// their respective kinds, everything else is an ordinary function.
    pub fn builder(name: impl Into<String>) -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(name.into())
    }

    /// Builder for an initializer (`init`).
    pub fn constructor_builder() -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(CONSTRUCTOR.to_string())
    }

    /// Builder for a deinitializer (`deinit`).
    pub fn deinitializer_builder() -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(DEINITIALIZER.to_string())
    }

    /// Builder for a property getter (`get`).
    pub fn getter_builder() -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(GETTER.to_string())
    }

    /// Builder for a property setter (`set`).
    pub fn setter_builder() -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(SETTER.to_string())
    }

    /// Builder for a `willSet` observer.
    pub fn will_set_builder() -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(WILL_SET.to_string())
    }

    /// Builder for a `didSet` observer.
    pub fn did_set_builder() -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(DID_SET.to_string())
    }

    /// Builder for an operator declaration, e.g. `operator_builder("+")`.
    pub fn operator_builder(operator: impl AsRef<str>) -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(format!("{OPERATOR_MARKER}{}", operator.as_ref()))
    }

    /// Declaration name as printed; for operators this is the bare operator
    /// symbol.
    pub fn name(&self) -> &str {
        self.name.strip_prefix(OPERATOR_MARKER).unwrap_or(&self.name)
    }

    /// The declaration's kind.
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Documentation block.
    pub fn doc(&self) -> &CodeBlock {
        &self.doc
    }

    /// Explicit modifiers. Unordered; emission sorts them canonically.
    pub fn modifiers(&self) -> &IndexSet<Modifier> {
        &self.modifiers
    }

    /// The full signature sub-model.
    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    /// Generic type variables, proxied from the signature.
    pub fn type_variables(&self) -> &IndexSet<TypeVariable> {
        self.signature.type_variables()
    }

    /// Parameters, proxied from the signature.
    pub fn parameters(&self) -> &[ParameterSpec] {
        self.signature.parameters()
    }

    /// Return type, proxied from the signature.
    pub fn return_type(&self) -> Option<&TypeName> {
        self.signature.return_type()
    }

    /// Whether the declaration is marked `throws`.
    pub fn throws(&self) -> bool {
        self.signature.throws()
    }

    /// Whether the declaration is marked `async`.
    pub fn is_async(&self) -> bool {
        self.signature.is_async()
    }

    /// Whether this is a failable initializer.
    pub fn is_failable(&self) -> bool {
        self.signature.is_failable()
    }

    /// Nested type declarations emitted ahead of the body statements.
    pub fn local_types(&self) -> &[TypeSpec] {
        &self.local_types
    }

    /// The body, concrete or abstract.
    pub fn body(&self) -> &FunctionBody {
        &self.body
    }

    /// Whether the declaration has no body block.
    pub fn is_abstract(&self) -> bool {
        self.body.is_abstract()
    }

    /// Derive a builder seeded with this declaration's name, doc,
    /// attributes, tags, modifiers, signature, and body.
    ///
    /// Local type declarations are not carried over; a derived builder that
    /// wants them must add them again explicitly.
    pub fn to_builder(&self) -> FunctionSpecBuilder {
        FunctionSpecBuilder {
            name: self.name.clone(),
            kind: self.kind,
            doc: self.doc.to_builder(),
            attributes: self.attributes.clone(),
            tags: self.tags.clone(),
            modifiers: self.modifiers.clone(),
            signature: self.signature.clone(),
            local_types: Vec::new(),
            body: match &self.body {
                FunctionBody::Concrete(block) => block.to_builder(),
                FunctionBody::Abstract => CodeBlock::builder(),
            },
            is_abstract: self.body.is_abstract(),
        }
    }

    /// Render this declaration into `writer`.
    ///
    /// `implicit_modifiers` are the modifiers already implied by the
    /// enclosing context; they are suppressed from the output. With
    /// `concise_getter`, a getter carrying no doc, attributes, or modifiers
    /// is emitted as its bare statements (no keyword, braces, or signature),
    /// the inline form of a single-expression computed property.
    pub fn emit(
        &self,
        writer: &mut CodeWriter,
        implicit_modifiers: &IndexSet<Modifier>,
        concise_getter: bool,
    ) {
        if concise_getter
            && self.kind == DeclarationKind::Getter
            && self.doc.is_empty()
            && self.attributes.is_empty()
            && self.modifiers.is_empty()
        {
            self.emit_local_types(writer);
            if let FunctionBody::Concrete(body) = &self.body {
                writer.emit_code(body);
            }
            return;
        }

        writer.emit_doc(&self.doc);
        writer.emit_attributes(&self.attributes);
        writer.emit_modifiers(&self.modifiers, implicit_modifiers);

        let bare_name_kind = self.kind == DeclarationKind::Constructor
            || self.kind == DeclarationKind::Deinitializer
            || self.kind.is_accessor()
            || self.kind.is_observer();
        if !bare_name_kind {
            writer.emit("func ");
        }

        let printed_name: Cow<'_, str> = match self.kind {
            DeclarationKind::Ordinary => naming::escape_if_reserved(&self.name),
            DeclarationKind::Operator => Cow::Borrowed(self.name()),
            _ => Cow::Borrowed(self.name.as_str()),
        };

        let include_empty_parameter_list = !(self.kind == DeclarationKind::Deinitializer
            || self.kind.is_accessor()
            || self.kind.is_observer());
        self.signature
            .emit(writer, &printed_name, include_empty_parameter_list);

        if self.body.is_abstract() {
            writer.emit("\n");
            return;
        }

        writer.emit(" {\n");
        writer.indent();
        self.emit_local_types(writer);
        if let FunctionBody::Concrete(body) = &self.body {
            writer.emit_code(body);
        }
        writer.unindent();
        writer.emit("}\n");
    }

    fn emit_local_types(&self, writer: &mut CodeWriter) {
        for local_type in &self.local_types {
            writer.emit("\n");
            local_type.emit(writer);
            writer.emit("\n");
        }
    }

    /// Rendered text under a default writer; the basis of equality, hashing,
    /// and [`Display`](fmt::Display).
    fn render_default(&self) -> String {
        let mut writer = CodeWriter::default();
        self.emit(&mut writer, &IndexSet::new(), false);
        writer.finish()
    }
}

impl fmt::Display for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_default())
    }
}

impl PartialEq for FunctionSpec {
    fn eq(&self, other: &Self) -> bool {
        self.render_default() == other.render_default()
    }
}

impl Eq for FunctionSpec {}

impl Hash for FunctionSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render_default().hash(state);
    }
}

impl Attributed for FunctionSpec {
    fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    fn tags(&self) -> &IndexMap<String, String> {
        &self.tags
    }
}

/// Mutable staging area for a [`FunctionSpec`].
///
/// Created through the kind factories on [`FunctionSpec`]; the name, and
/// with it the kind, is fixed for the builder's lifetime. Fallible mutators
/// take `&mut self` and return `Result<&mut Self>` so calls chain with `?`;
/// a failed call performs no mutation and leaves the builder exactly as it
/// was. [`build`](Self::build) snapshots a fresh [`FunctionSpec`] and the
/// builder stays usable.
#[derive(Debug, Clone)]
pub struct FunctionSpecBuilder {
    name: String,
    kind: DeclarationKind,
    doc: CodeBlockBuilder,
    attributes: Vec<AttributeSpec>,
    tags: IndexMap<String, String>,
    modifiers: IndexSet<Modifier>,
    signature: FunctionSignature,
    local_types: Vec<TypeSpec>,
    body: CodeBlockBuilder,
    is_abstract: bool,
}

impl FunctionSpecBuilder {
    fn new(name: String) -> Self {
        let kind = DeclarationKind::classify(&name);
        Self {
            name,
            kind,
            doc: CodeBlock::builder(),
            attributes: Vec::new(),
            tags: IndexMap::new(),
            modifiers: IndexSet::new(),
            signature: FunctionSignature::new(),
            local_types: Vec::new(),
            body: CodeBlock::builder(),
            is_abstract: false,
        }
    }

    /// Declaration name as it will be printed.
    pub fn name(&self) -> &str {
        self.name.strip_prefix(OPERATOR_MARKER).unwrap_or(&self.name)
    }

    /// The kind this builder was created for.
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    fn invalid(&self, message: &str) -> Box<Error> {
        Error::invalid_state(self.name(), message)
    }

    /// Append documentation text.
    pub fn add_doc(&mut self, doc: impl Into<String>) -> &mut Self {
        self.doc = mem::take(&mut self.doc).add(doc);
        self
    }

    /// Add an attribute.
    pub fn attribute(&mut self, attribute: AttributeSpec) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    /// Attach keyed metadata. Tags are carried on the built spec but never
    /// rendered.
    pub fn tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add a modifier. Observers take no modifiers.
    pub fn add_modifier(&mut self, modifier: Modifier) -> Result<&mut Self> {
        if self.kind.is_observer() {
            return Err(self.invalid("observers cannot have modifiers"));
        }
        self.modifiers.insert(modifier);
        Ok(self)
    }

    /// Add several modifiers.
    pub fn add_modifiers(
        &mut self,
        modifiers: impl IntoIterator<Item = Modifier>,
    ) -> Result<&mut Self> {
        for modifier in modifiers {
            self.add_modifier(modifier)?;
        }
        Ok(self)
    }

    /// Add a generic type variable. Accessors take no generic clause.
    pub fn add_type_variable(&mut self, type_variable: TypeVariable) -> Result<&mut Self> {
        if self.kind.is_accessor() {
            return Err(self.invalid("accessors cannot have type variables"));
        }
        self.signature.type_variables.insert(type_variable);
        Ok(self)
    }

    /// Add several generic type variables.
    pub fn add_type_variables(
        &mut self,
        type_variables: impl IntoIterator<Item = TypeVariable>,
    ) -> Result<&mut Self> {
        for type_variable in type_variables {
            self.add_type_variable(type_variable)?;
        }
        Ok(self)
    }

    /// Set the return type. Constructors and accessors cannot declare one.
    pub fn returns(&mut self, return_type: impl Into<TypeName>) -> Result<&mut Self> {
        if self.kind == DeclarationKind::Constructor {
            return Err(self.invalid("constructors cannot have a return type"));
        }
        if self.kind.is_accessor() {
            return Err(self.invalid("accessors cannot have a return type"));
        }
        self.signature.return_type = Some(return_type.into());
        Ok(self)
    }

    /// Add a parameter. Getters take none; setters and observers take at
    /// most one.
    pub fn add_parameter(&mut self, parameter: ParameterSpec) -> Result<&mut Self> {
        match self.kind {
            DeclarationKind::Getter => {
                return Err(self.invalid("getters cannot have parameters"));
            }
            DeclarationKind::Setter if !self.signature.parameters.is_empty() => {
                return Err(self.invalid("setters can have only one parameter"));
            }
            DeclarationKind::WillObserve | DeclarationKind::DidObserve
                if !self.signature.parameters.is_empty() =>
            {
                return Err(self.invalid("observers can have only one parameter"));
            }
            _ => {}
        }
        self.signature.parameters.push(parameter);
        Ok(self)
    }

    /// Add several parameters.
    pub fn add_parameters(
        &mut self,
        parameters: impl IntoIterator<Item = ParameterSpec>,
    ) -> Result<&mut Self> {
        for parameter in parameters {
            self.add_parameter(parameter)?;
        }
        Ok(self)
    }

    /// Mark the declaration abstract: it will end after its signature, with
    /// no body block. Fails once body code has been added.
    pub fn abstract_(&mut self, is_abstract: bool) -> Result<&mut Self> {
        if is_abstract && !self.body.is_empty() {
            return Err(self.invalid("a function with code cannot be abstract"));
        }
        self.is_abstract = is_abstract;
        Ok(self)
    }

    /// Set the failable flag (`init?`). Only constructors can be failable.
    pub fn failable(&mut self, failable: bool) -> Result<&mut Self> {
        if self.kind != DeclarationKind::Constructor {
            return Err(self.invalid("only constructors can be failable"));
        }
        self.signature.failable = failable;
        Ok(self)
    }

    /// Set the `throws` flag.
    pub fn throws(&mut self, throws: bool) -> &mut Self {
        self.signature.throws = throws;
        self
    }

    /// Set the `async` flag.
    pub fn async_(&mut self, is_async: bool) -> &mut Self {
        self.signature.is_async = is_async;
        self
    }

    /// Add a nested type declaration, emitted ahead of the body statements.
    pub fn add_local_type(&mut self, local_type: TypeSpec) -> Result<&mut Self> {
        if self.is_abstract {
            return Err(self.invalid("abstract functions cannot have local types"));
        }
        self.local_types.push(local_type);
        Ok(self)
    }

    /// Add several nested type declarations.
    pub fn add_local_types(
        &mut self,
        local_types: impl IntoIterator<Item = TypeSpec>,
    ) -> Result<&mut Self> {
        for local_type in local_types {
            self.add_local_type(local_type)?;
        }
        Ok(self)
    }

    /// Add a raw fragment of body code.
    pub fn add_code(&mut self, code: impl Into<String>) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).add(code);
        Ok(self)
    }

    /// Add body code with `{key}` placeholders expanded from `arguments`.
    pub fn add_named_code(
        &mut self,
        template: &str,
        arguments: &IndexMap<String, String>,
    ) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).add_named(template, arguments);
        Ok(self)
    }

    /// Add a body statement terminated by a newline.
    pub fn add_statement(&mut self, statement: impl Into<String>) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).add_statement(statement);
        Ok(self)
    }

    /// Add a `// comment` line to the body.
    pub fn add_comment(&mut self, comment: impl Into<String>) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).add_comment(comment);
        Ok(self)
    }

    /// Open a control-flow block in the body.
    pub fn begin_control_flow(&mut self, head: impl Into<String>) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).begin_control_flow(head);
        Ok(self)
    }

    /// Continue a control-flow block (`} else {`).
    pub fn next_control_flow(&mut self, head: impl Into<String>) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).next_control_flow(head);
        Ok(self)
    }

    /// Close a control-flow block.
    pub fn end_control_flow(&mut self) -> Result<&mut Self> {
        self.guard_code()?;
        self.body = mem::take(&mut self.body).end_control_flow();
        Ok(self)
    }

    fn guard_code(&self) -> Result<()> {
        if self.is_abstract {
            return Err(self.invalid("abstract functions cannot have code"));
        }
        Ok(())
    }

    /// Snapshot the staged fields into an immutable [`FunctionSpec`],
    /// re-checking the cross-field setter-arity invariant. The builder
    /// stays usable; every call produces a fresh snapshot.
    pub fn build(&self) -> Result<FunctionSpec> {
        if self.kind == DeclarationKind::Setter && self.signature.parameters.len() > 1 {
            return Err(self.invalid("setters can have only one parameter"));
        }
        Ok(FunctionSpec {
            name: self.name.clone(),
            kind: self.kind,
            doc: self.doc.clone().build(),
            attributes: self.attributes.clone(),
            tags: self.tags.clone(),
            modifiers: self.modifiers.clone(),
            signature: self.signature.clone(),
            local_types: self.local_types.clone(),
            body: if self.is_abstract {
                FunctionBody::Abstract
            } else {
                FunctionBody::Concrete(self.body.clone().build())
            },
        })
    }
}
