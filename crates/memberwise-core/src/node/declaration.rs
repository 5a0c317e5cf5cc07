use crate::node::Member;
use std::fmt::{self, Display};

///
/// Declaration
///
/// The annotated declaration handed over by the host. Only records are
/// eligible for synthesis; every other kind expands to nothing.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Declaration<T> {
    Record(RecordDeclaration<T>),
    Other { name: String, kind: DeclarationKind },
}

impl<T> Declaration<T> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Record(record) => &record.name,
            Self::Other { name, .. } => name,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordDeclaration<T>> {
        match self {
            Self::Record(record) => Some(record),
            Self::Other { .. } => None,
        }
    }
}

impl<T> From<RecordDeclaration<T>> for Declaration<T> {
    fn from(record: RecordDeclaration<T>) -> Self {
        Self::Record(record)
    }
}

///
/// DeclarationKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeclarationKind {
    Enum,
    Union,
    TupleStruct,
    Trait,
    Function,
    Other,
}

impl Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Enum => "enum",
            Self::Union => "union",
            Self::TupleStruct => "tuple struct",
            Self::Trait => "trait",
            Self::Function => "function",
            Self::Other => "declaration",
        };

        f.write_str(label)
    }
}

///
/// RecordDeclaration
///
/// Product-type declaration with zero or more named members, in source order.
/// `access` is carried for the host and never consulted by synthesis.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordDeclaration<T> {
    pub name: String,
    pub access: Access,
    pub members: Vec<Member<T>>,
}

impl<T> RecordDeclaration<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: Access::default(),
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<Member<T>>) -> Self {
        self.members.push(member.into());
        self
    }
}

///
/// Access
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Access {
    Public,
    Crate,
    Restricted(String),
    #[default]
    Private,
}

impl Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("pub"),
            Self::Crate => f.write_str("pub(crate)"),
            Self::Restricted(path) => write!(f, "pub(in {path})"),
            Self::Private => Ok(()),
        }
    }
}
