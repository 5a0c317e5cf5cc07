use memberwise_core::node::{
    Access, Declaration, DeclarationKind, Member, Mutability, PatternBinding, RecordDeclaration,
    VariableDecl,
};
use quote::ToTokens;
use syn::{Data, DeriveInput, Fields, Type, Visibility};

// Lower a derive input into the declaration model.
//
// Named-field and unit structs are records. Every named field carries its type,
// so nothing is ever skipped here.
pub fn lower(input: &DeriveInput) -> Declaration<Type> {
    let name = input.ident.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Some(&named.named),
            Fields::Unit => None,
            Fields::Unnamed(_) => {
                return Declaration::Other {
                    name,
                    kind: DeclarationKind::TupleStruct,
                };
            }
        },
        Data::Enum(_) => {
            return Declaration::Other {
                name,
                kind: DeclarationKind::Enum,
            };
        }
        Data::Union(_) => {
            return Declaration::Other {
                name,
                kind: DeclarationKind::Union,
            };
        }
    };

    let mut record = RecordDeclaration::new(name).with_access(lower_access(&input.vis));

    for field in fields.into_iter().flatten() {
        let Some(ident) = &field.ident else {
            continue;
        };
        let binding = PatternBinding::typed(ident.to_string(), field.ty.clone());

        record
            .members
            .push(Member::Stored(VariableDecl::single(Mutability::Mutable, binding)));
    }

    Declaration::Record(record)
}

fn lower_access(vis: &Visibility) -> Access {
    match vis {
        Visibility::Public(_) => Access::Public,
        Visibility::Restricted(restricted) if restricted.path.is_ident("crate") => Access::Crate,
        Visibility::Restricted(restricted) => {
            Access::Restricted(restricted.path.to_token_stream().to_string())
        }
        Visibility::Inherited => Access::Private,
    }
}

///
/// TESTS
///
