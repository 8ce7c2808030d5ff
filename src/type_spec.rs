//! Nested type declarations emitted inside function bodies.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::{
    attribute::{AttributeSpec, Attributed},
    code_block::CodeBlock,
    function::FunctionSpec,
    modifier::Modifier,
    types::{self, TypeName, TypeVariable},
    writer::CodeWriter,
};

/// The declaration keyword of a [`TypeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSpecKind {
    Struct,
    Class,
    Enum,
    Actor,
    Extension,
}

impl TypeSpecKind {
    /// The Swift keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Actor => "actor",
            Self::Extension => "extension",
        }
    }
}

/// A Swift type declaration: raw member blocks (stored properties, cases)
/// followed by function members.
///
/// Like [`FunctionSpec`], equality and [`Display`](fmt::Display) are defined
/// over the rendered text.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    kind: TypeSpecKind,
    name: String,
    doc: CodeBlock,
    attributes: Vec<AttributeSpec>,
    tags: IndexMap<String, String>,
    modifiers: IndexSet<Modifier>,
    type_variables: IndexSet<TypeVariable>,
    supertypes: Vec<TypeName>,
    members: Vec<CodeBlock>,
    functions: Vec<FunctionSpec>,
}

impl TypeSpec {
    /// Start building a type declaration.
    pub fn builder(kind: TypeSpecKind, name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder {
            kind,
            name: name.into(),
            doc: CodeBlock::default(),
            attributes: Vec::new(),
            tags: IndexMap::new(),
            modifiers: IndexSet::new(),
            type_variables: IndexSet::new(),
            supertypes: Vec::new(),
            members: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaration keyword kind.
    pub fn kind(&self) -> TypeSpecKind {
        self.kind
    }

    /// Function members, in declaration order.
    pub fn functions(&self) -> &[FunctionSpec] {
        &self.functions
    }

    /// Render this declaration into `writer`.
    pub fn emit(&self, writer: &mut CodeWriter) {
        writer.emit_doc(&self.doc);
        writer.emit_attributes(&self.attributes);
        writer.emit_modifiers(&self.modifiers, &IndexSet::new());
        writer.emit(self.kind.keyword());
        writer.emit(" ");
        writer.emit(&self.name);
        types::emit_type_variables(writer, &self.type_variables);
        for (i, supertype) in self.supertypes.iter().enumerate() {
            writer.emit(if i == 0 { ": " } else { ", " });
            supertype.emit(writer);
        }
        writer.emit(" {\n");
        writer.indent();
        let mut first = true;
        for member in &self.members {
            if !first {
                writer.emit("\n");
            }
            first = false;
            writer.emit_code(member);
        }
        for function in &self.functions {
            if !first {
                writer.emit("\n");
            }
            first = false;
            function.emit(writer, &IndexSet::new(), false);
        }
        writer.unindent();
        writer.emit("}\n");
    }

    fn render_default(&self) -> String {
        let mut writer = CodeWriter::default();
        self.emit(&mut writer);
        writer.finish()
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_default())
    }
}

impl PartialEq for TypeSpec {
    fn eq(&self, other: &Self) -> bool {
        self.render_default() == other.render_default()
    }
}

impl Eq for TypeSpec {}

impl Attributed for TypeSpec {
    fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    fn tags(&self) -> &IndexMap<String, String> {
        &self.tags
    }
}

/// Builder for [`TypeSpec`]. Type declarations have no kind-dependent
/// grammar constraints, so every method is infallible and chains by value.
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    kind: TypeSpecKind,
    name: String,
    doc: CodeBlock,
    attributes: Vec<AttributeSpec>,
    tags: IndexMap<String, String>,
    modifiers: IndexSet<Modifier>,
    type_variables: IndexSet<TypeVariable>,
    supertypes: Vec<TypeName>,
    members: Vec<CodeBlock>,
    functions: Vec<FunctionSpec>,
}

impl TypeSpecBuilder {
    /// Set documentation.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = CodeBlock::of(doc);
        self
    }

    /// Add an attribute.
    pub fn attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Attach keyed metadata.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add a modifier.
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Add a generic type variable.
    pub fn add_type_variable(mut self, type_variable: TypeVariable) -> Self {
        self.type_variables.insert(type_variable);
        self
    }

    /// Add a supertype or protocol conformance.
    pub fn add_supertype(mut self, supertype: impl Into<TypeName>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// Add a raw member block (stored property, enum case, ...).
    pub fn add_member(mut self, member: CodeBlock) -> Self {
        self.members.push(member);
        self
    }

    /// Add a function member.
    pub fn add_function(mut self, function: FunctionSpec) -> Self {
        self.functions.push(function);
        self
    }

    /// Freeze into an immutable [`TypeSpec`].
    pub fn build(self) -> TypeSpec {
        TypeSpec {
            kind: self.kind,
            name: self.name,
            doc: self.doc,
            attributes: self.attributes,
            tags: self.tags,
            modifiers: self.modifiers,
            type_variables: self.type_variables,
            supertypes: self.supertypes,
            members: self.members,
            functions: self.functions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(spec: &TypeSpec) -> String {
        let mut writer = CodeWriter::swift();
        spec.emit(&mut writer);
        writer.finish()
    }

    #[test]
    fn test_empty_struct() {
        let spec = TypeSpec::builder(TypeSpecKind::Struct, "Point").build();
        assert_eq!(render(&spec), "struct Point {\n}\n");
    }

    #[test]
    fn test_members_and_supertypes() {
        let spec = TypeSpec::builder(TypeSpecKind::Struct, "Point")
            .add_modifier(Modifier::Private)
            .add_supertype("Hashable")
            .add_supertype("Codable")
            .add_member(CodeBlock::of("var x: Double\n"))
            .add_member(CodeBlock::of("var y: Double\n"))
            .build();
        assert_eq!(
            render(&spec),
            "private struct Point: Hashable, Codable {\n    var x: Double\n\n    var y: Double\n}\n"
        );
    }

    #[test]
    fn test_generic_class_with_function() {
        let mut function = FunctionSpec::builder("first");
        function.returns(TypeName::new("Element").optional()).unwrap();
        function.add_statement("return storage.first").unwrap();
        let spec = TypeSpec::builder(TypeSpecKind::Class, "Stack")
            .add_type_variable(TypeVariable::new("Element"))
            .add_member(CodeBlock::of("var storage: [Element] = []\n"))
            .add_function(function.build().unwrap())
            .build();
        assert_eq!(
            render(&spec),
            "class Stack<Element> {\n    var storage: [Element] = []\n\n    func first() -> Element? {\n        return storage.first\n    }\n}\n"
        );
    }

    #[test]
    fn test_equality_by_rendered_text() {
        let a = TypeSpec::builder(TypeSpecKind::Enum, "State").build();
        let b = TypeSpec::builder(TypeSpecKind::Enum, "State").tag("k", "v").build();
        assert_eq!(a, b);
    }
}
