use crate::node::{StoredBinding, SynthesizedAssignment, SynthesizedParameter};

///
/// Synthesis
///
/// Parameters and assignments built in lockstep from the same bindings, so
/// index `i` of both lists always refers to the same field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Synthesis<T> {
    pub parameters: Vec<SynthesizedParameter<T>>,
    pub body: Vec<SynthesizedAssignment>,
}

impl<T> Synthesis<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// Project stored bindings onto constructor parameters and assignments.
///
/// Declared types are copied verbatim. Default values on the source field are
/// ignored, so every binding becomes a required parameter, optional types
/// included.
#[must_use]
pub fn synthesize<T: Clone>(bindings: &[StoredBinding<T>]) -> Synthesis<T> {
    let count = bindings.len();
    let mut parameters = Vec::with_capacity(count);
    let mut body = Vec::with_capacity(count);

    for (index, binding) in bindings.iter().enumerate() {
        parameters.push(SynthesizedParameter {
            name: binding.name.clone(),
            ty: binding.declared_type.clone(),
            trailing_comma: index + 1 < count,
        });
        body.push(SynthesizedAssignment::same(&*binding.name));
    }

    Synthesis { parameters, body }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Mutability;

    fn binding(name: &str, ty: &'static str, has_initializer: bool) -> StoredBinding<&'static str> {
        StoredBinding {
            name: name.to_string(),
            declared_type: ty,
            has_initializer,
            mutability: Mutability::Mutable,
        }
    }

    #[test]
    fn parameters_and_body_are_index_aligned() {
        let bindings = [
            binding("id", "Uuid", false),
            binding("name", "Option<String>", false),
            binding("age", "u32", true),
        ];

        let synthesis = synthesize(&bindings);

        assert_eq!(synthesis.parameters.len(), bindings.len());
        assert_eq!(synthesis.body.len(), bindings.len());

        for ((binding, param), assign) in bindings
            .iter()
            .zip(&synthesis.parameters)
            .zip(&synthesis.body)
        {
            assert_eq!(param.name, binding.name);
            assert_eq!(param.ty, binding.declared_type);
            assert_eq!(assign.target, binding.name);
            assert_eq!(assign.source, binding.name);
        }
    }

    #[test]
    fn optional_types_are_not_stripped() {
        let synthesis = synthesize(&[binding("nickname", "String?", false)]);

        assert_eq!(synthesis.parameters[0].ty, "String?");
    }

    #[test]
    fn trailing_comma_follows_position() {
        let bindings = [
            binding("a", "i32", false),
            binding("b", "String", false),
            binding("c", "bool", false),
        ];

        let commas: Vec<bool> = synthesize(&bindings)
            .parameters
            .iter()
            .map(|p| p.trailing_comma)
            .collect();

        assert_eq!(commas, [true, true, false]);
    }

    #[test]
    fn single_binding_has_no_trailing_comma() {
        let synthesis = synthesize(&[binding("only", "u8", false)]);

        assert!(!synthesis.parameters[0].trailing_comma);
    }

    #[test]
    fn zero_bindings_yield_empty_synthesis() {
        let synthesis = synthesize::<&str>(&[]);

        assert_eq!(synthesis, Synthesis::empty());
    }

    #[test]
    fn synthesis_is_deterministic() {
        let bindings = [binding("x", "f64", false), binding("y", "f64", true)];

        assert_eq!(synthesize(&bindings), synthesize(&bindings));
    }
}
