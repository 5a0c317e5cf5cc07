use crate::{
    node::{SynthesizedAssignment, SynthesizedInitializer, SynthesizedParameter},
    synth::Synthesis,
};

/// Assemble the public constructor from a finished synthesis.
#[must_use]
pub fn emit<T>(synthesis: Synthesis<T>) -> SynthesizedInitializer<T> {
    let Synthesis { parameters, body } = synthesis;
    let mut builder = InitializerBuilder::with_capacity(parameters.len());

    for param in parameters {
        builder.push_parameter(param);
    }
    for assign in body {
        builder.push_assignment(assign);
    }

    builder.build()
}

///
/// InitializerBuilder
///
/// Accumulates parameters and statements. Nothing is observable until
/// `build` hands back the immutable initializer.
///

#[derive(Debug)]
pub struct InitializerBuilder<T> {
    parameters: Vec<SynthesizedParameter<T>>,
    body: Vec<SynthesizedAssignment>,
}

impl<T> InitializerBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parameters: Vec::with_capacity(capacity),
            body: Vec::with_capacity(capacity),
        }
    }

    pub fn push_parameter(&mut self, param: SynthesizedParameter<T>) -> &mut Self {
        self.parameters.push(param);
        self
    }

    pub fn push_assignment(&mut self, assign: SynthesizedAssignment) -> &mut Self {
        self.body.push(assign);
        self
    }

    #[must_use]
    pub fn build(self) -> SynthesizedInitializer<T> {
        SynthesizedInitializer::from_parts(self.parameters, self.body)
    }
}

impl<T> Default for InitializerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
