//! `pipe`, `flow`, `curry`, `uncurry` and the variadic adapters.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::driver::{EmitContext, Family};
use crate::template::{
    FnTemplate, comma_join, indent_tail, join_range, nested_calls, type_list, typed_params,
    value_list,
};

/// Emits function composition and currying helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipeFamily;

impl Family for PipeFamily {
    fn name(&self) -> &'static str {
        "pipe"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        0..=count
    }

    fn imports(&self, _context: &EmitContext) -> Vec<String> {
        vec!["std::rc::Rc".to_string()]
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        pipe(arity).write(out)?;
        if arity >= 1 {
            flow(arity).write(out)?;
            curry(arity).write(out)?;
            uncurry(arity).write(out)?;
        }
        variadic(arity).write(out)?;
        unvariadic(arity).write(out)?;
        unsliced(arity).write(out)
    }
}

/// `F1: FnOnce(T0) -> T1, F2: FnOnce(T1) -> T2, ...`
fn step_bounds(arity: usize, trait_name: &str) -> impl Iterator<Item = String> + '_ {
    (1..=arity).map(move |index| format!("F{index}: {trait_name}(T{}) -> T{index}", index - 1))
}

fn pipe(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("pipe{arity}"))
        .doc(format!(
            "Passes `t0` through {arity} functions, left to right."
        ))
        .generics(type_list("T", 0..=arity))
        .generics(type_list("F", 1..=arity))
        .params("t0: T0")
        .params(typed_params("f", "F", 1..=arity))
        .output(format!("T{arity}"))
        .bounds(step_bounds(arity, "FnOnce"))
        .body(nested_calls("f", "t0", 1..=arity))
}

fn flow(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("flow{arity}"))
        .doc(format!("Composes {arity} functions, left to right."))
        .generics(type_list("T", 0..=arity))
        .generics(type_list("F", 1..=arity))
        .params(typed_params("f", "F", 1..=arity))
        .output(format!("impl Fn(T0) -> T{arity}"))
        .bounds(step_bounds(arity, "Fn"))
        .body(format!(
            "move |t0: T0| {}",
            nested_calls("f", "t0", 1..=arity)
        ))
}

/// The boxed type returned after `taken` arguments of an `arity`-argument
/// curried function have been supplied.
fn curried_type(arity: usize, taken: usize) -> String {
    ((taken + 1)..=arity)
        .rev()
        .fold("R".to_string(), |inner, index| {
            format!("Box<dyn Fn(T{index}) -> {inner}>")
        })
}

/// One closure level of a curried function: level `level` receives
/// `t{level}`; every earlier argument is shared through `Rc` and cloned on
/// use.
fn curry_level(arity: usize, level: usize) -> String {
    if level == arity {
        let arguments: Vec<String> = (1..level)
            .map(|index| format!("Rc::unwrap_or_clone(Rc::clone(&t{index}))"))
            .chain(std::iter::once(format!("t{level}")))
            .collect();
        return format!(
            "move |t{level}: T{level}| {{\n    f({})\n}}",
            arguments.join(", ")
        );
    }

    let mut body = String::from("let f = Rc::clone(&f);\n");
    for index in 1..level {
        body.push_str(&format!("let t{index} = Rc::clone(&t{index});\n"));
    }
    body.push_str(&format!("let t{level} = Rc::new(t{level});\n"));
    body.push_str(&format!("Box::new({})", curry_level(arity, level + 1)));

    format!(
        "move |t{level}: T{level}| -> {} {{\n    {}\n}}",
        curried_type(arity, level),
        indent_tail(&body, 1)
    )
}

fn curry(arity: usize) -> FnTemplate {
    let template = FnTemplate::new(format!("curry{arity}"))
        .doc(format!(
            "Turns a function of {arity} arguments into a chain of one-argument functions."
        ))
        .generics(type_list("T", 1..=arity))
        .generics("R, F")
        .params("f: F");

    if arity == 1 {
        return template
            .output("impl Fn(T1) -> R")
            .bound("F: Fn(T1) -> R")
            .body("move |t1: T1| f(t1)");
    }

    let bounds = std::iter::once(format!(
        "F: Fn({}) -> R + 'static",
        type_list("T", 1..=arity)
    ))
    .chain((1..arity).map(|index| format!("T{index}: Clone + 'static")))
    .chain([format!("T{arity}: 'static"), "R: 'static".to_string()]);

    template
        .doc("")
        .doc("Arguments supplied to an outer level are cloned for every call of an inner level.")
        .output(format!("impl Fn(T1) -> {}", curried_type(arity, 1)))
        .bounds(bounds)
        .body(format!("let f = Rc::new(f);\n{}", curry_level(arity, 1)))
}

fn uncurry(arity: usize) -> FnTemplate {
    let result_of = |index: usize| {
        if index == arity {
            "R".to_string()
        } else {
            format!("G{}", index + 1)
        }
    };
    let bounds = std::iter::once(format!("F: Fn(T1) -> {}", result_of(1))).chain(
        (2..=arity).map(|index| format!("G{index}: Fn(T{index}) -> {}", result_of(index))),
    );
    let applications = join_range(1..=arity, "", |index| format!("(t{index})"));

    FnTemplate::new(format!("uncurry{arity}"))
        .doc(format!(
            "Turns a chain of {arity} one-argument functions back into one function."
        ))
        .generics(type_list("T", 1..=arity))
        .generics("R, F")
        .generics(type_list("G", 2..=arity))
        .params("f: F")
        .output(format!("impl Fn({}) -> R", type_list("T", 1..=arity)))
        .bounds(bounds)
        .body(format!(
            "move |{}| f{applications}",
            typed_params("t", "T", 1..=arity)
        ))
}

/// `T1, T2, <last>` with the fixed parameters first.
fn with_fixed(arity: usize, last: &str) -> String {
    comma_join(&[type_list("T", 1..=arity), last.to_string()])
}

fn variadic(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("variadic{arity}"))
        .doc(format!(
            "Adapts a function taking {arity} fixed arguments and a `Vec` to take a slice instead."
        ))
        .generics(type_list("T", 1..=arity))
        .generics("V, R, F")
        .params("f: F")
        .output(format!("impl Fn({}) -> R", with_fixed(arity, "&[V]")))
        .bound(format!("F: Fn({}) -> R", with_fixed(arity, "Vec<V>")))
        .bound("V: Clone")
        .body(format!(
            "move |{}| f({})",
            comma_join(&[typed_params("t", "T", 1..=arity), "values: &[V]".to_string()]),
            comma_join(&[value_list("t", 1..=arity), "values.to_vec()".to_string()])
        ))
}

fn unvariadic(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("unvariadic{arity}"))
        .doc(format!(
            "Adapts a function taking {arity} fixed arguments and a slice to take a `Vec` instead."
        ))
        .generics(type_list("T", 1..=arity))
        .generics("V, R, F")
        .params("f: F")
        .output(format!("impl Fn({}) -> R", with_fixed(arity, "Vec<V>")))
        .bound(format!("F: Fn({}) -> R", with_fixed(arity, "&[V]")))
        .body(format!(
            "move |{}| f({})",
            comma_join(&[typed_params("t", "T", 1..=arity), "values: Vec<V>".to_string()]),
            comma_join(&[value_list("t", 1..=arity), "&values".to_string()])
        ))
}

fn unsliced(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("unsliced{arity}"))
        .doc(format!(
            "Adapts a function taking {arity} fixed arguments and a `Vec` to take a fixed-size array."
        ))
        .generics(type_list("T", 1..=arity))
        .generics("V, R, F, const N: usize")
        .params("f: F")
        .output(format!("impl Fn({}) -> R", with_fixed(arity, "[V; N]")))
        .bound(format!("F: Fn({}) -> R", with_fixed(arity, "Vec<V>")))
        .body(format!(
            "move |{}| f({})",
            comma_join(&[typed_params("t", "T", 1..=arity), "values: [V; N]".to_string()]),
            comma_join(&[value_list("t", 1..=arity), "Vec::from(values)".to_string()])
        ))
}
