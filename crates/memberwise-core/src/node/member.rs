///
/// Member
///
/// One entry of a record's member list. Classification is by variant; only
/// `Stored` declarations take part in synthesis.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Member<T> {
    Stored(VariableDecl<T>),
    Computed(ComputedProperty<T>),
    Method(Method),
    NestedType(NestedType),
    Other,
}

impl<T> From<VariableDecl<T>> for Member<T> {
    fn from(decl: VariableDecl<T>) -> Self {
        Self::Stored(decl)
    }
}

impl<T> From<ComputedProperty<T>> for Member<T> {
    fn from(prop: ComputedProperty<T>) -> Self {
        Self::Computed(prop)
    }
}

impl<T> From<Method> for Member<T> {
    fn from(method: Method) -> Self {
        Self::Method(method)
    }
}

impl<T> From<NestedType> for Member<T> {
    fn from(nested: NestedType) -> Self {
        Self::NestedType(nested)
    }
}

///
/// Mutability
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mutability {
    #[default]
    Immutable,
    Mutable,
}

///
/// VariableDecl
///
/// A single stored-property declaration. One keyword may introduce several
/// bindings (`var a: Int, b: String`), kept here in left-to-right order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableDecl<T> {
    pub mutability: Mutability,
    pub bindings: Vec<PatternBinding<T>>,
}

impl<T> VariableDecl<T> {
    #[must_use]
    pub const fn new(mutability: Mutability) -> Self {
        Self {
            mutability,
            bindings: Vec::new(),
        }
    }

    /// Declaration holding exactly one binding.
    pub fn single(mutability: Mutability, binding: PatternBinding<T>) -> Self {
        Self {
            mutability,
            bindings: vec![binding],
        }
    }

    #[must_use]
    pub fn with_binding(mut self, binding: PatternBinding<T>) -> Self {
        self.bindings.push(binding);
        self
    }
}

///
/// PatternBinding
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternBinding<T> {
    pub name: String,

    /// Explicit type annotation, if the source carries one.
    pub ty: Option<T>,

    /// Source text of the default value (`= 0`), if any.
    pub initializer: Option<String>,
}

impl<T> PatternBinding<T> {
    pub fn typed(name: impl Into<String>, ty: T) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            initializer: None,
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            initializer: None,
        }
    }

    #[must_use]
    pub fn with_initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }
}

///
/// ComputedProperty
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComputedProperty<T> {
    pub name: String,
    pub ty: Option<T>,
}

///
/// Method
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Method {
    pub name: String,
}

///
/// NestedType
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NestedType {
    pub name: String,
}
