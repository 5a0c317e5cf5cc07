use crate::node::{Access, Mutability};

///
/// StoredBinding
///
/// A typed stored field, as yielded by extraction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredBinding<T> {
    pub name: String,
    pub declared_type: T,

    /// Whether the source declares a default value. Informational only.
    pub has_initializer: bool,

    /// Informational only.
    pub mutability: Mutability,
}

///
/// SynthesizedParameter
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SynthesizedParameter<T> {
    pub name: String,
    pub ty: T,

    /// Set on every parameter except the last one; separators are never
    /// inferred by joining.
    pub trailing_comma: bool,
}

///
/// SynthesizedAssignment
///
/// `self.<target> = <source>`. Both sides name the same field.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SynthesizedAssignment {
    pub target: String,
    pub source: String,
}

impl SynthesizedAssignment {
    pub fn same(name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            target: name.clone(),
            source: name,
        }
    }
}

///
/// SynthesizedInitializer
///
/// Finished public constructor. Parameters and body are index-aligned.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SynthesizedInitializer<T> {
    parameters: Vec<SynthesizedParameter<T>>,
    body: Vec<SynthesizedAssignment>,
}

impl<T> SynthesizedInitializer<T> {
    pub(crate) const fn from_parts(
        parameters: Vec<SynthesizedParameter<T>>,
        body: Vec<SynthesizedAssignment>,
    ) -> Self {
        Self { parameters, body }
    }

    /// Synthesized constructors are always public, whatever the record's own
    /// access level is.
    #[must_use]
    pub const fn access(&self) -> Access {
        Access::Public
    }

    #[must_use]
    pub fn parameters(&self) -> &[SynthesizedParameter<T>] {
        &self.parameters
    }

    #[must_use]
    pub fn body(&self) -> &[SynthesizedAssignment] {
        &self.body
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }
}
