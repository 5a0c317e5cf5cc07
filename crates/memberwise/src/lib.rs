//! Public memberwise constructors for record types.
//!
//! ```
//! use memberwise::PubliclyInitializable;
//!
//! #[derive(PubliclyInitializable)]
//! pub struct Profile {
//!     pub id: u64,
//!     pub name: Option<String>,
//!     pub age: u32,
//! }
//!
//! let profile = Profile::new(7, None, 30);
//! assert_eq!(profile.age, 30);
//! ```

pub use memberwise_core::{
    Error, emit, expand, expand_traced, extract, node, render, synth, tokens, trace,
};
pub use memberwise_derive::PubliclyInitializable;

///
/// Prelude
///

pub mod prelude {
    pub use crate::PubliclyInitializable;
    pub use memberwise_core::prelude::*;
}
