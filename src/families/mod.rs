//! The arity families.
//!
//! Each family formats one shape of definition (a tuple type, a pipe, a
//! curried function, ...) for a single arity; the driver runs it across the
//! configured arity range.
//!
//! | Family            | Arities        | Emits                                              |
//! |-------------------|----------------|----------------------------------------------------|
//! | `tuple`           | `1..=count`    | `TupleN` and its constructors and combinators      |
//! | `pipe`            | `0..=count`    | `pipeN`, `flowN`, `curryN`, `uncurryN`, variadics  |
//! | `apply`           | `1..=count`    | `sequence_tN`, `sequence_tupleN`, `traverse_tupleN`|
//! | `bind`            | `1..count`     | `bind_*_of_N`, `ignore_*_of_N`                     |
//! | `di`              | `1..=count`    | `make_provider_factoryN`, `make_providerN`         |
//! | `readerioeither`  | `0..=count`    | `fromN`, `eitherizeN`, `uneitherizeN`              |

mod apply;
mod bind;
mod di;
mod pipe;
mod reader_io_either;
mod tuple;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::driver::Family;

pub use apply::{ApplyFamily, ApplyKind};
pub use bind::BindFamily;
pub use di::DiFamily;
pub use pipe::PipeFamily;
pub use reader_io_either::{ReaderIoEitherFamily, ReaderIoEitherGenericFamily};
pub use tuple::TupleFamily;

/// Selects a family by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    /// `Tuple1..TupleN`.
    Tuple,
    /// `pipe`, `flow`, `curry`, `uncurry` and the variadic adapters.
    Pipe,
    /// Applicative sequencing for the given kind.
    Apply(ApplyKind),
    /// Parameter binding and ignoring.
    Bind,
    /// Dependency-injection providers.
    Di,
    /// Context-threading reader helpers.
    ReaderIoEither,
}

impl FamilyKind {
    /// Every family, with `apply` over `Option`.
    pub const ALL: [Self; 6] = [
        Self::Tuple,
        Self::Pipe,
        Self::Apply(ApplyKind::Option),
        Self::Bind,
        Self::Di,
        Self::ReaderIoEither,
    ];

    /// Instantiates the family.
    pub fn family(self) -> Box<dyn Family> {
        match self {
            Self::Tuple => Box::new(TupleFamily),
            Self::Pipe => Box::new(PipeFamily),
            Self::Apply(kind) => Box::new(ApplyFamily::new(kind)),
            Self::Bind => Box::new(BindFamily),
            Self::Di => Box::new(DiFamily),
            Self::ReaderIoEither => Box::new(ReaderIoEitherFamily),
        }
    }

    /// The command-line name of the family.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tuple => "tuple",
            Self::Pipe => "pipe",
            Self::Apply(_) => "apply",
            Self::Bind => "bind",
            Self::Di => "di",
            Self::ReaderIoEither => "readerioeither",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// An unrecognised family or applicative kind name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {what} `{name}`, expected one of: {expected}")]
pub struct UnknownNameError {
    what: &'static str,
    name: String,
    expected: &'static str,
}

impl UnknownNameError {
    pub(crate) fn new(what: &'static str, name: &str, expected: &'static str) -> Self {
        Self {
            what,
            name: name.to_string(),
            expected,
        }
    }
}

impl FromStr for FamilyKind {
    type Err = UnknownNameError;

    /// Parses a family name; `apply` selects the `Option` kind.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "tuple" => Ok(Self::Tuple),
            "pipe" => Ok(Self::Pipe),
            "apply" => Ok(Self::Apply(ApplyKind::Option)),
            "bind" => Ok(Self::Bind),
            "di" => Ok(Self::Di),
            "readerioeither" => Ok(Self::ReaderIoEither),
            _ => Err(UnknownNameError::new(
                "family",
                name,
                "tuple, pipe, apply, bind, di, readerioeither",
            )),
        }
    }
}
