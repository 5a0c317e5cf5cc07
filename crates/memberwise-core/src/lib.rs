//! Memberwise initializer synthesis.
//!
//! The host lowers an annotated declaration into [`node::Declaration`]; this
//! crate extracts the typed stored bindings, synthesizes one parameter and one
//! assignment per binding, and emits a public constructor. Every stage is a
//! pure function of its input.

pub mod emit;
pub mod error;
pub mod extract;
pub mod node;
pub mod render;
pub mod synth;
pub mod tokens;
pub mod trace;

pub use error::Error;

use crate::{
    node::{Declaration, SynthesizedInitializer},
    trace::{ExpansionTraceSink, TraceScope},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        emit::{InitializerBuilder, emit},
        error::Error,
        expand, expand_traced,
        extract::extract,
        node::*,
        render::DEFAULT_CONSTRUCTOR,
        synth::{Synthesis, synthesize},
        trace::{ExpansionEvent, ExpansionTraceSink},
    };
}

/// Expand `decl` into its memberwise constructor.
///
/// Returns `None` when the declaration is not a record.
#[must_use]
pub fn expand<T: Clone>(decl: &Declaration<T>) -> Option<SynthesizedInitializer<T>> {
    expand_traced(decl, None)
}

/// Like [`expand`], reporting each stage to `sink` when one is given.
#[must_use]
pub fn expand_traced<T: Clone>(
    decl: &Declaration<T>,
    sink: Option<&dyn ExpansionTraceSink>,
) -> Option<SynthesizedInitializer<T>> {
    let record = match decl {
        Declaration::Record(record) => record,
        Declaration::Other { name, kind } => {
            trace::trace_inapplicable(sink, name, *kind);
            return None;
        }
    };

    let scope = TraceScope::start(sink, &record.name, record.members.len());
    let bindings = extract::extract_scoped(record, scope.as_ref());
    let init = emit::emit(synth::synthesize(&bindings));

    if let Some(scope) = scope {
        scope.emitted(init.len());
    }

    Some(init)
}

///
/// TESTS
///
