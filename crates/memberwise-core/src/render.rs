use crate::node::SynthesizedInitializer;
use std::fmt::{self, Display, Write};

/// Constructor name used when the host does not pick one.
pub const DEFAULT_CONSTRUCTOR: &str = "new";

const INDENT: &str = "    ";

///
/// Rendered
///
/// Source-text view of an initializer under a chosen constructor name.
///

pub struct Rendered<'a, T> {
    init: &'a SynthesizedInitializer<T>,
    constructor: &'a str,
}

impl<T> SynthesizedInitializer<T> {
    #[must_use]
    pub const fn render<'a>(&'a self, constructor: &'a str) -> Rendered<'a, T> {
        Rendered {
            init: self,
            constructor,
        }
    }
}

impl<T: Display> Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fn {}(", self.init.access(), self.constructor)?;
        for param in self.init.parameters() {
            write!(f, "{}: {}", param.name, param.ty)?;
            if param.trailing_comma {
                f.write_str(", ")?;
            }
        }
        f.write_str(") -> Self {\n")?;

        if self.init.body().is_empty() {
            writeln!(f, "{INDENT}Self {{}}")?;
        } else {
            writeln!(f, "{INDENT}Self {{")?;
            for assign in self.init.body() {
                writeln!(f, "{INDENT}{INDENT}{}: {},", assign.target, assign.source)?;
            }
            writeln!(f, "{INDENT}}}")?;
        }

        f.write_char('}')
    }
}

impl<T: Display> Display for SynthesizedInitializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(DEFAULT_CONSTRUCTOR).fmt(f)
    }
}

///
/// TESTS
///
