mod declaration;
mod initializer;
mod member;

pub use self::declaration::*;
pub use self::initializer::*;
pub use self::member::*;
