//! Binding and ignoring subsets of parameters.
//!
//! For a function of arity `i`, every non-empty subset of its parameter
//! positions yields one `bind_*_of_i` and one `ignore_*_of_i`. The subset is
//! spelled out in the name (`bind_1_3_of_3` fixes the first and third
//! parameter).

use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::combinatorics::Combination;
use crate::driver::{EmitContext, Family};
use crate::template::{FnTemplate, join_positions, type_list};

/// Emits `bind_*_of_N` and `ignore_*_of_N` for every position subset.
#[derive(Clone, Copy, Debug, Default)]
pub struct BindFamily;

impl Family for BindFamily {
    fn name(&self) -> &'static str {
        "bind"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        1..=count.saturating_sub(1)
    }

    fn imports(&self, _context: &EmitContext) -> Vec<String> {
        vec!["std::rc::Rc".to_string()]
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        for combination in Combination::all(arity) {
            bind(&combination).write(out)?;
            ignore(&combination).write(out)?;
        }
        Ok(())
    }
}

fn typed(positions: &[usize]) -> String {
    join_positions(positions, ", ", |position| format!("t{position}: T{position}"))
}

fn types(positions: &[usize]) -> String {
    join_positions(positions, ", ", |position| format!("T{position}"))
}

fn described(positions: &[usize]) -> String {
    join_positions(positions, ", ", |position| position.to_string())
}

fn bind(combination: &Combination) -> FnTemplate {
    let arity = combination.arity();
    let bound = combination.positions();
    let free = combination.complement();
    let remaining = format!("Box<dyn Fn({}) -> R>", types(&free));

    let arguments = (1..=arity)
        .map(|position| {
            if combination.contains(position) {
                format!("t{position}.clone()")
            } else {
                format!("t{position}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let bounds = std::iter::once(format!(
        "F: Fn({}) -> R + 'static",
        type_list("T", 1..=arity)
    ))
    .chain(
        bound
            .iter()
            .map(|position| format!("T{position}: Clone + 'static")),
    )
    .chain(free.iter().map(|position| format!("T{position}: 'static")))
    .chain(std::iter::once("R: 'static".to_string()));

    FnTemplate::new(format!("bind_{}_of_{arity}", combination.label()))
        .doc(format!(
            "Fixes parameters {} of a {arity}-argument function; the returned function takes the rest.",
            described(bound)
        ))
        .generics(type_list("T", 1..=arity))
        .generics("R, F")
        .params("f: F")
        .output(format!("impl Fn({}) -> {remaining}", types(bound)))
        .bounds(bounds)
        .body(format!(
            "let f = Rc::new(f);\nmove |{}| -> {remaining} {{\n    let f = Rc::clone(&f);\n    Box::new(move |{}| f({arguments}))\n}}",
            typed(bound),
            typed(&free)
        ))
}

fn ignore(combination: &Combination) -> FnTemplate {
    let arity = combination.arity();
    let free = combination.complement();
    let params = (1..=arity)
        .map(|position| {
            if combination.contains(position) {
                format!("_t{position}: T{position}")
            } else {
                format!("t{position}: T{position}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    FnTemplate::new(format!("ignore_{}_of_{arity}", combination.label()))
        .doc(format!(
            "Lifts a function of the other parameters to a {arity}-argument function that ignores parameters {}.",
            described(combination.positions())
        ))
        .generics(type_list("T", 1..=arity))
        .generics("R, F")
        .params("f: F")
        .output(format!("impl Fn({}) -> R", type_list("T", 1..=arity)))
        .bound(format!("F: Fn({}) -> R", types(&free)))
        .body(format!(
            "move |{params}| f({})",
            join_positions(&free, ", ", |position| format!("t{position}"))
        ))
}
