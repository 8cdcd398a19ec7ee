//! Dependency-injection providers.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::driver::{EmitContext, Family};
use crate::template::{FnTemplate, join_range, type_list, typed_params, value_list};

const PROVIDER: &str = r#"/// A named factory that resolves an `R` from an injector `I`.
pub struct Provider<I, R, E> {
    /// Name the provider is registered under.
    pub name: &'static str,
    factory: Box<dyn Fn(&I) -> Result<R, E>>,
}

impl<I, R, E> Provider<I, R, E> {
    /// Creates a provider from a name and a factory.
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: Fn(&I) -> Result<R, E> + 'static,
    {
        Self {
            name,
            factory: Box::new(factory),
        }
    }

    /// Resolves the provided value from `injector`.
    pub fn provide(&self, injector: &I) -> Result<R, E> {
        (self.factory)(injector)
    }
}

impl<I, R, E> fmt::Debug for Provider<I, R, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Provider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
"#;

/// Emits `Provider` and the `make_provider*` helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiFamily;

impl Family for DiFamily {
    fn name(&self) -> &'static str {
        "di"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        1..=count
    }

    fn imports(&self, _context: &EmitContext) -> Vec<String> {
        vec!["std::fmt".to_string()]
    }

    fn write_preamble(&self, out: &mut dyn Write, _context: &EmitContext) -> io::Result<()> {
        writeln!(out, "{PROVIDER}")
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        make_provider_factory(arity).write(out)?;
        make_provider(arity).write(out)
    }
}

fn dependency_bounds(arity: usize) -> impl Iterator<Item = String> {
    (1..=arity).map(|index| format!("D{index}: Fn(&I) -> Result<T{index}, E>"))
}

fn make_provider_factory(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("make_provider_factory{arity}"))
        .doc(format!(
            "Resolves {arity} dependencies in order and passes them to `factory`."
        ))
        .doc("")
        .doc("The first failing dependency short-circuits; `factory` is not called.")
        .generics("I")
        .generics(type_list("T", 1..=arity))
        .generics("R, E")
        .generics(type_list("D", 1..=arity))
        .generics("F")
        .params(typed_params("d", "D", 1..=arity))
        .params("factory: F")
        .output("impl Fn(&I) -> Result<R, E>")
        .bounds(dependency_bounds(arity))
        .bound(format!("F: Fn({}) -> Result<R, E>", type_list("T", 1..=arity)))
        .body(format!(
            "move |injector: &I| factory({})",
            join_range(1..=arity, ", ", |index| format!("d{index}(injector)?"))
        ))
}

fn make_provider(arity: usize) -> FnTemplate {
    let statics = std::iter::once("I".to_string())
        .chain((1..=arity).map(|index| format!("T{index}")))
        .chain(["R".to_string(), "E".to_string()])
        .map(|name| format!("{name}: 'static"));
    let dependencies = dependency_bounds(arity).map(|bound| format!("{bound} + 'static"));

    FnTemplate::new(format!("make_provider{arity}"))
        .doc(format!(
            "Creates a [`Provider`] named `name` with {arity} dependencies."
        ))
        .generics("I")
        .generics(type_list("T", 1..=arity))
        .generics("R, E")
        .generics(type_list("D", 1..=arity))
        .generics("F")
        .params("name: &'static str")
        .params(typed_params("d", "D", 1..=arity))
        .params("factory: F")
        .output("Provider<I, R, E>")
        .bounds(statics)
        .bounds(dependencies)
        .bound(format!(
            "F: Fn({}) -> Result<R, E> + 'static",
            type_list("T", 1..=arity)
        ))
        .body(format!(
            "Provider::new(\n    name,\n    make_provider_factory{arity}({}, factory),\n)",
            value_list("d", 1..=arity)
        ))
}
