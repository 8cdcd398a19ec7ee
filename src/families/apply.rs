//! Applicative sequencing over `Option` or `Result`.

use std::fmt;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::driver::{EmitContext, Family};
use crate::families::UnknownNameError;
use crate::template::{FnTemplate, join_range, tuple_of, type_list};

/// The applicative the `apply` family is emitted for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApplyKind {
    /// `Option<T>`: short-circuits on the first `None`.
    #[default]
    Option,
    /// `Result<T, E>`: short-circuits on the first `Err`.
    Result,
}

impl ApplyKind {
    /// The wrapped type of `inner`.
    fn wrap(self, inner: &str) -> String {
        match self {
            Self::Option => format!("Option<{inner}>"),
            Self::Result => format!("Result<{inner}, E>"),
        }
    }

    const fn success(self) -> &'static str {
        match self {
            Self::Option => "Some",
            Self::Result => "Ok",
        }
    }

    /// Extra generic parameters the kind needs.
    const fn extra_generics(self) -> &'static str {
        match self {
            Self::Option => "",
            Self::Result => "E",
        }
    }

    const fn short_circuit(self) -> &'static str {
        match self {
            Self::Option => "`None`",
            Self::Result => "`Err`",
        }
    }

    /// The command-line name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::Result => "result",
        }
    }
}

impl fmt::Display for ApplyKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for ApplyKind {
    type Err = UnknownNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "option" => Ok(Self::Option),
            "result" => Ok(Self::Result),
            _ => Err(UnknownNameError::new("applicative kind", name, "option, result")),
        }
    }
}

/// Emits `sequence_tN`, `sequence_tupleN` and `traverse_tupleN` for one
/// [`ApplyKind`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ApplyFamily {
    kind: ApplyKind,
}

impl ApplyFamily {
    /// Creates the family for `kind`.
    pub const fn new(kind: ApplyKind) -> Self {
        Self { kind }
    }

    fn sequence_t(&self, arity: usize) -> FnTemplate {
        let kind = self.kind;
        let params = join_range(1..=arity, ", ", |index| {
            format!("t{index}: {}", kind.wrap(&format!("T{index}")))
        });
        FnTemplate::new(format!("sequence_t{arity}"))
            .doc(format!(
                "Collects {arity} wrapped values into one wrapped tuple, stopping at the first {}.",
                kind.short_circuit()
            ))
            .generics(type_list("T", 1..=arity))
            .generics(kind.extra_generics())
            .params(params)
            .output(kind.wrap(&native_tuple("T", arity)))
            .body(format!(
                "{}({})",
                kind.success(),
                tuple_of(&unwrapped(arity, |index| format!("t{index}")))
            ))
    }

    fn sequence_tuple(&self, arity: usize) -> FnTemplate {
        let kind = self.kind;
        let wrapped: Vec<String> = (1..=arity)
            .map(|index| kind.wrap(&format!("T{index}")))
            .collect();
        FnTemplate::new(format!("sequence_tuple{arity}"))
            .doc(format!(
                "Turns a tuple of {arity} wrapped values inside out, stopping at the first {}.",
                kind.short_circuit()
            ))
            .generics(type_list("T", 1..=arity))
            .generics(kind.extra_generics())
            .params(format!("t: {}", tuple_of(&wrapped)))
            .output(kind.wrap(&native_tuple("T", arity)))
            .body(format!(
                "{}({})",
                kind.success(),
                tuple_of(&unwrapped(arity, |index| format!("t.{}", index - 1)))
            ))
    }

    fn traverse_tuple(&self, arity: usize) -> FnTemplate {
        let kind = self.kind;
        let output = kind.wrap(&native_tuple("T", arity));
        let input = native_tuple("A", arity);
        FnTemplate::new(format!("traverse_tuple{arity}"))
            .doc(format!(
                "Applies one effectful function per tuple component, stopping at the first {}.",
                kind.short_circuit()
            ))
            .generics(type_list("A", 1..=arity))
            .generics(type_list("T", 1..=arity))
            .generics(kind.extra_generics())
            .generics(type_list("F", 1..=arity))
            .params(join_range(1..=arity, ", ", |index| format!("f{index}: F{index}")))
            .output(format!("impl Fn({input}) -> {output}"))
            .bounds((1..=arity).map(|index| {
                format!("F{index}: Fn(A{index}) -> {}", kind.wrap(&format!("T{index}")))
            }))
            .body(format!(
                "move |a: {input}| -> {output} {{ {}({}) }}",
                kind.success(),
                tuple_of(&unwrapped(arity, |index| format!(
                    "f{index}(a.{})",
                    index - 1
                )))
            ))
    }
}

fn native_tuple(prefix: &str, arity: usize) -> String {
    let items: Vec<String> = (1..=arity).map(|index| format!("{prefix}{index}")).collect();
    tuple_of(&items)
}

/// Each rendered expression followed by `?`.
fn unwrapped<F>(arity: usize, render: F) -> Vec<String>
where
    F: Fn(usize) -> String,
{
    (1..=arity).map(|index| format!("{}?", render(index))).collect()
}

impl Family for ApplyFamily {
    fn name(&self) -> &'static str {
        "apply"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        1..=count
    }

    fn imports(&self, _context: &EmitContext) -> Vec<String> {
        Vec::new()
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        self.sequence_t(arity).write(out)?;
        self.sequence_tuple(arity).write(out)?;
        self.traverse_tuple(arity).write(out)
    }
}
