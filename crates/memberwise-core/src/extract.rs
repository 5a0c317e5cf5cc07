use crate::{
    node::{Member, PatternBinding, RecordDeclaration, StoredBinding, VariableDecl},
    trace::TraceScope,
};

/// Collect the typed stored bindings of `record`, in declaration order.
#[must_use]
pub fn extract<T: Clone>(record: &RecordDeclaration<T>) -> Vec<StoredBinding<T>> {
    extract_scoped(record, None)
}

pub(crate) fn extract_scoped<'a, T: Clone>(
    record: &'a RecordDeclaration<T>,
    trace: Option<&TraceScope<'a>>,
) -> Vec<StoredBinding<T>> {
    let mut out = Vec::with_capacity(record.members.len());

    for member in &record.members {
        let decl = match member {
            Member::Stored(decl) => decl,
            Member::Computed(_) | Member::Method(_) | Member::NestedType(_) | Member::Other => {
                continue;
            }
        };

        for binding in &decl.bindings {
            match stored_binding(decl, binding) {
                Some(stored) => out.push(stored),
                None => {
                    if let Some(trace) = trace {
                        trace.skipped_untyped(&binding.name);
                    }
                }
            }
        }
    }

    if let Some(trace) = trace {
        trace.extracted(out.len());
    }

    out
}

// Bindings without an explicit annotation are skipped rather than inferred.
// This is provisional until a type-inference pass exists upstream.
fn stored_binding<T: Clone>(
    decl: &VariableDecl<T>,
    binding: &PatternBinding<T>,
) -> Option<StoredBinding<T>> {
    let ty = binding.ty.as_ref()?;

    Some(StoredBinding {
        name: binding.name.clone(),
        declared_type: ty.clone(),
        has_initializer: binding.initializer.is_some(),
        mutability: decl.mutability,
    })
}

///
/// TESTS
///
