//! Expansion tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect expansion
//! output. There is no global sink.

use crate::node::DeclarationKind;

///
/// ExpansionTraceSink
///

pub trait ExpansionTraceSink: Send + Sync {
    fn on_event(&self, event: ExpansionEvent<'_>);
}

///
/// ExpansionEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpansionEvent<'a> {
    Start {
        record: &'a str,
        members: usize,
    },
    SkippedUntyped {
        record: &'a str,
        binding: &'a str,
    },
    Extracted {
        record: &'a str,
        bindings: usize,
    },
    Emitted {
        record: &'a str,
        parameters: usize,
    },
    Inapplicable {
        name: &'a str,
        kind: DeclarationKind,
    },
}

///
/// TraceScope
///
/// Per-record handle; a scope is only created when a sink was injected.
///

pub(crate) struct TraceScope<'a> {
    sink: &'a dyn ExpansionTraceSink,
    record: &'a str,
}

impl<'a> TraceScope<'a> {
    pub(crate) fn start(
        sink: Option<&'a dyn ExpansionTraceSink>,
        record: &'a str,
        members: usize,
    ) -> Option<Self> {
        let sink = sink?;
        sink.on_event(ExpansionEvent::Start { record, members });

        Some(Self { sink, record })
    }

    pub(crate) fn skipped_untyped(&self, binding: &'a str) {
        self.sink.on_event(ExpansionEvent::SkippedUntyped {
            record: self.record,
            binding,
        });
    }

    pub(crate) fn extracted(&self, bindings: usize) {
        self.sink.on_event(ExpansionEvent::Extracted {
            record: self.record,
            bindings,
        });
    }

    pub(crate) fn emitted(self, parameters: usize) {
        self.sink.on_event(ExpansionEvent::Emitted {
            record: self.record,
            parameters,
        });
    }
}

pub(crate) fn trace_inapplicable(
    sink: Option<&dyn ExpansionTraceSink>,
    name: &str,
    kind: DeclarationKind,
) {
    if let Some(sink) = sink {
        sink.on_event(ExpansionEvent::Inapplicable { name, kind });
    }
}

///
/// TESTS
///
