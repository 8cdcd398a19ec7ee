//! # fpgen
//!
//! Source generator for the functional-programming boilerplate that Rust
//! cannot express with a single definition.
//!
//! ## Overview
//!
//! Rust has no variadic generics, so families such as `Tuple1..TupleN`,
//! `pipe0..pipeN` or `curry1..curryN` need one definition per arity. This
//! crate emits those definitions as plain Rust modules:
//!
//! - **Arity families**: tuples, pipe/flow/curry, applicative sequencing,
//!   parameter binding, dependency-injection providers and reader helpers
//! - **Lens scanner**: reads annotated structs and enums from a source tree
//!   and emits lens, optional and prism accessors for them
//! - **Combinatorics**: the position subsets behind the `bind` family
//!
//! ## Feature Flags
//!
//! - `arity`: the arity families and their driver
//! - `lens`: the lens/prism scanner
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpgen::prelude::*;
//!
//! let config = GeneratorConfig::new(3, "tuple.rs");
//! let source = render(FamilyKind::Tuple.family().as_ref(), &config).unwrap();
//! assert!(source.contains("pub struct Tuple3<T1, T2, T3>"));
//! assert!(!source.contains("Tuple4"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the configuration types, the driver entry points and the
/// family selectors.
///
/// # Usage
///
/// ```rust
/// use fpgen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinatorics::*;
    pub use crate::error::*;
    pub use crate::header::*;

    #[cfg(feature = "arity")]
    pub use crate::driver::*;

    #[cfg(feature = "arity")]
    pub use crate::families::*;

    #[cfg(feature = "lens")]
    pub use crate::lens::*;
}

pub mod combinatorics;
pub mod error;
pub mod header;

#[cfg(feature = "arity")]
pub mod driver;

#[cfg(feature = "arity")]
pub mod families;

#[cfg(feature = "arity")]
pub mod template;

#[cfg(feature = "lens")]
pub mod lens;

pub use error::{GenerateError, ScanError};

#[cfg(feature = "arity")]
pub use driver::{EmitContext, Family, GenerationReport, GeneratorConfig, generate, render};

#[cfg(feature = "arity")]
pub use families::{ApplyKind, FamilyKind};

#[cfg(feature = "lens")]
pub use lens::{LensConfig, LensReport, LensTemplates, generate_lenses};
