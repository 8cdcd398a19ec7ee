//! Context-threading reader helpers.
//!
//! Two files are produced. The generic file works for any reader
//! representation `GR` that can be built from a boxed
//! `Fn(&C) -> Result<R, E>`; the primary file pins `GR` to the
//! `ReaderIoEither` alias and delegates every function to its generic
//! counterpart.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::driver::{EmitContext, Family, GENERIC_DIRECTORY};
use crate::template::{FnTemplate, comma_join, type_list, typed_params, value_list};

const READER: &str = "ReaderIoEither<C, R, E>";
const BOXED_READER: &str = "Box<dyn Fn(&C) -> Result<R, E>>";

/// Emits the primary `ReaderIoEither` file.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReaderIoEitherFamily;

/// Emits the `generic/` file that the primary file delegates to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReaderIoEitherGenericFamily;

/// What each generated function accepts.
#[derive(Clone, Copy)]
enum Shape {
    /// `F: Fn(&C, T..) -> G` with `G: FnOnce() -> Result<R, E>`.
    From,
    /// `F: Fn(&C, T..) -> Result<R, E>`.
    Eitherize,
    /// `F: Fn(T..) -> GR`.
    Uneitherize,
}

impl Shape {
    const ALL: [Self; 3] = [Self::From, Self::Eitherize, Self::Uneitherize];

    fn name(self, arity: usize) -> String {
        match self {
            Self::From => format!("from{arity}"),
            Self::Eitherize => format!("eitherize{arity}"),
            Self::Uneitherize => format!("uneitherize{arity}"),
        }
    }

    fn doc(self, arity: usize) -> String {
        match self {
            Self::From => format!(
                "Lifts a function of the context and {arity} arguments that returns a deferred computation into a reader."
            ),
            Self::Eitherize => format!(
                "Lifts a fallible function of the context and {arity} arguments into a reader."
            ),
            Self::Uneitherize => format!(
                "Turns a function of {arity} arguments returning a reader back into a fallible function of the context."
            ),
        }
    }

    /// Generic parameters after `GR`.
    fn generics(self, arity: usize) -> String {
        let extra = match self {
            Self::From => "F, G",
            Self::Eitherize | Self::Uneitherize => "F",
        };
        comma_join(&[
            "C".to_string(),
            type_list("T", 1..=arity),
            "R, E".to_string(),
            extra.to_string(),
        ])
    }

    fn output(self, arity: usize, reader: &str) -> String {
        let arguments = type_list("T", 1..=arity);
        match self {
            Self::From | Self::Eitherize => format!("impl Fn({arguments}) -> {reader}"),
            Self::Uneitherize => format!(
                "impl Fn({}) -> Result<R, E>",
                comma_join(&["&C".to_string(), arguments])
            ),
        }
    }

    fn bounds(self, arity: usize, reader: &str) -> Vec<String> {
        let with_context = comma_join(&["&C".to_string(), type_list("T", 1..=arity)]);
        match self {
            Self::From => {
                let mut bounds = vec![
                    format!("F: Fn({with_context}) -> G + 'static"),
                    "G: FnOnce() -> Result<R, E>".to_string(),
                ];
                bounds.extend(captured_bounds(arity));
                bounds
            }
            Self::Eitherize => {
                let mut bounds = vec![format!("F: Fn({with_context}) -> Result<R, E> + 'static")];
                bounds.extend(captured_bounds(arity));
                bounds
            }
            Self::Uneitherize => vec![format!(
                "F: Fn({}) -> {reader}",
                type_list("T", 1..=arity)
            )],
        }
    }
}

/// Arguments are captured by the reader and cloned on every run.
fn captured_bounds(arity: usize) -> impl Iterator<Item = String> {
    (1..=arity)
        .map(|index| format!("T{index}: Clone + 'static"))
        .chain(["C: 'static", "R: 'static", "E: 'static"].map(String::from))
}

fn generic_body(shape: Shape, arity: usize) -> String {
    let arguments = typed_params("t", "T", 1..=arity);
    let cloned = comma_join(&[
        "context".to_string(),
        (1..=arity)
            .map(|index| format!("t{index}.clone()"))
            .collect::<Vec<_>>()
            .join(", "),
    ]);
    let run = match shape {
        Shape::From => format!("f({cloned})()"),
        Shape::Eitherize => format!("f({cloned})"),
        Shape::Uneitherize => {
            return format!(
                "move |{}| f({})(context)",
                comma_join(&["context: &C".to_string(), arguments]),
                value_list("t", 1..=arity)
            );
        }
    };
    format!(
        "let f = Rc::new(f);\nmove |{arguments}| {{\n    let f = Rc::clone(&f);\n    let reader: {BOXED_READER} =\n        Box::new(move |context: &C| {run});\n    GR::from(reader)\n}}"
    )
}

fn generic_function(shape: Shape, arity: usize) -> FnTemplate {
    let reader_bound = match shape {
        Shape::From | Shape::Eitherize => format!("GR: From<{BOXED_READER}>"),
        Shape::Uneitherize => "GR: Fn(&C) -> Result<R, E>".to_string(),
    };
    FnTemplate::new(shape.name(arity))
        .doc(shape.doc(arity))
        .generics("GR")
        .generics(shape.generics(arity))
        .params("f: F")
        .output(shape.output(arity, "GR"))
        .bound(reader_bound)
        .bounds(shape.bounds(arity, "GR"))
        .body(generic_body(shape, arity))
}

fn primary_function(shape: Shape, arity: usize) -> FnTemplate {
    FnTemplate::new(shape.name(arity))
        .doc(shape.doc(arity))
        .generics(shape.generics(arity))
        .params("f: F")
        .output(shape.output(arity, READER))
        .bounds(shape.bounds(arity, READER))
        .body(format!(
            "generic::{}::<{READER}, {}>(f)",
            shape.name(arity),
            shape.generics(arity)
        ))
}

impl Family for ReaderIoEitherFamily {
    fn name(&self) -> &'static str {
        "readerioeither"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        0..=count
    }

    fn imports(&self, context: &EmitContext) -> Vec<String> {
        vec![format!(
            "super::{GENERIC_DIRECTORY}::{} as generic",
            context.module_ident()
        )]
    }

    fn write_preamble(&self, out: &mut dyn Write, _context: &EmitContext) -> io::Result<()> {
        writeln!(
            out,
            "/// A computation that reads a context `C` and either fails with `E` or produces `R`."
        )?;
        writeln!(out, "pub type {READER} = {BOXED_READER};")?;
        writeln!(out)
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        for shape in Shape::ALL {
            primary_function(shape, arity).write(out)?;
        }
        Ok(())
    }

    fn generic_variant(&self) -> Option<Box<dyn Family>> {
        Some(Box::new(ReaderIoEitherGenericFamily))
    }
}

impl Family for ReaderIoEitherGenericFamily {
    fn name(&self) -> &'static str {
        "readerioeither-generic"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        0..=count
    }

    fn imports(&self, _context: &EmitContext) -> Vec<String> {
        vec!["std::rc::Rc".to_string()]
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        for shape in Shape::ALL {
            generic_function(shape, arity).write(out)?;
        }
        Ok(())
    }
}
