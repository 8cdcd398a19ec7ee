//! `Tuple1..TupleN` and their combinators.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::driver::{EmitContext, Family};
use crate::template::{FnTemplate, indent_tail, join_range, tuple_of, type_list, typed_params};

/// Emits the named tuple types together with their constructors,
/// `tupled`/`untupled` adapters, semigroup, monoid, ordering and serde
/// support.
#[derive(Clone, Copy, Debug, Default)]
pub struct TupleFamily;

impl Family for TupleFamily {
    fn name(&self) -> &'static str {
        "tuple"
    }

    fn arities(&self, count: usize) -> RangeInclusive<usize> {
        1..=count
    }

    fn imports(&self, _context: &EmitContext) -> Vec<String> {
        vec!["std::cmp::Ordering".to_string(), "std::fmt".to_string()]
    }

    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()> {
        write_struct(out, arity)?;
        write_inherent_impl(out, arity)?;
        write_from_impl(out, arity)?;
        write_display_impl(out, arity)?;
        write_serialize_impl(out, arity)?;
        write_deserialize_impl(out, arity)?;

        make_tuple(arity).write(out)?;
        tupled(arity).write(out)?;
        untupled(arity).write(out)?;
        semigroup(arity).write(out)?;
        monoid(arity).write(out)?;
        ord(arity).write(out)
    }
}

fn tuple_type(arity: usize, prefix: &str) -> String {
    format!("Tuple{arity}<{}>", type_list(prefix, 1..=arity))
}

/// `Tuple3 { f1: t1, f2: t2, f3: t3 }` with `render` supplying each value.
fn construct<F>(arity: usize, render: F) -> String
where
    F: Fn(usize) -> String,
{
    format!(
        "Tuple{arity} {{ {} }}",
        join_range(1..=arity, ", ", |index| format!("f{index}: {}", render(index)))
    )
}

fn native_types(arity: usize) -> String {
    let items: Vec<String> = (1..=arity).map(|index| format!("T{index}")).collect();
    tuple_of(&items)
}

fn bounds_where(arity: usize, bound: &str) -> String {
    join_range(1..=arity, "\n", |index| format!("    T{index}: {bound},"))
}

fn write_struct(out: &mut dyn Write, arity: usize) -> io::Result<()> {
    writeln!(out, "/// A named product of {arity} values.")?;
    writeln!(
        out,
        "#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]"
    )?;
    writeln!(out, "pub struct {} {{", tuple_type(arity, "T"))?;
    for index in 1..=arity {
        writeln!(out, "    /// Component {index}.")?;
        writeln!(out, "    pub f{index}: T{index},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_inherent_impl(out: &mut dyn Write, arity: usize) -> io::Result<()> {
    let types = type_list("T", 1..=arity);
    let mapped = type_list("U", 1..=arity);
    let mappers = type_list("G", 1..=arity);

    writeln!(out, "impl<{types}> {} {{", tuple_type(arity, "T"))?;
    writeln!(out, "    /// Applies one function to each component.")?;
    writeln!(
        out,
        "    pub fn map<{mapped}, {mappers}>(self, {}) -> {}",
        typed_params("g", "G", 1..=arity),
        tuple_type(arity, "U")
    )?;
    writeln!(out, "    where")?;
    for index in 1..=arity {
        writeln!(out, "        G{index}: FnOnce(T{index}) -> U{index},")?;
    }
    writeln!(out, "    {{")?;
    writeln!(
        out,
        "        {}",
        construct(arity, |index| format!("g{index}(self.f{index})"))
    )?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    /// Converts into the equivalent native tuple.")?;
    writeln!(
        out,
        "    pub fn into_tuple(self) -> {} {{",
        native_types(arity)
    )?;
    let fields: Vec<String> = (1..=arity).map(|index| format!("self.f{index}")).collect();
    writeln!(out, "        {}", tuple_of(&fields))?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_from_impl(out: &mut dyn Write, arity: usize) -> io::Result<()> {
    let types = type_list("T", 1..=arity);
    let native = native_types(arity);

    writeln!(
        out,
        "impl<{types}> From<{native}> for {} {{",
        tuple_type(arity, "T")
    )?;
    writeln!(out, "    fn from(tuple: {native}) -> Self {{")?;
    writeln!(
        out,
        "        Self {{ {} }}",
        join_range(1..=arity, ", ", |index| format!("f{index}: tuple.{}", index - 1))
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_display_impl(out: &mut dyn Write, arity: usize) -> io::Result<()> {
    let types = type_list("T", 1..=arity);
    let placeholders = join_range(1..=arity, ", ", |_| "{}".to_string());
    let arguments = join_range(1..=arity, ", ", |index| format!("self.f{index}"));

    writeln!(
        out,
        "impl<{types}> fmt::Display for {}",
        tuple_type(arity, "T")
    )?;
    writeln!(out, "where")?;
    writeln!(out, "{}", bounds_where(arity, "fmt::Display"))?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(
        out,
        "        write!(formatter, \"Tuple{arity}[{placeholders}]\", {arguments})"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_serialize_impl(out: &mut dyn Write, arity: usize) -> io::Result<()> {
    let types = type_list("T", 1..=arity);

    writeln!(out, "#[cfg(feature = \"serde\")]")?;
    writeln!(
        out,
        "impl<{types}> ::serde::Serialize for {}",
        tuple_type(arity, "T")
    )?;
    writeln!(out, "where")?;
    writeln!(out, "{}", bounds_where(arity, "::serde::Serialize"))?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>"
    )?;
    writeln!(out, "    where")?;
    writeln!(out, "        S: ::serde::Serializer,")?;
    writeln!(out, "    {{")?;
    writeln!(out, "        use ::serde::ser::SerializeTuple;")?;
    writeln!(out)?;
    writeln!(
        out,
        "        let mut tuple = serializer.serialize_tuple({arity})?;"
    )?;
    for index in 1..=arity {
        writeln!(out, "        tuple.serialize_element(&self.f{index})?;")?;
    }
    writeln!(out, "        tuple.end()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_deserialize_impl(out: &mut dyn Write, arity: usize) -> io::Result<()> {
    let types = type_list("T", 1..=arity);
    let visitor = format!("Tuple{arity}Visitor");
    let deserialize_bounds = |indent: &str| {
        join_range(1..=arity, "\n", |index| {
            format!("{indent}T{index}: ::serde::Deserialize<'de>,")
        })
    };

    let mut visit_seq = String::new();
    for index in 1..=arity {
        visit_seq.push_str(&format!(
            "let f{index} = seq\n    .next_element()?\n    .ok_or_else(|| ::serde::de::Error::invalid_length({}, &self))?;\n",
            index - 1
        ));
    }
    visit_seq.push_str(&format!(
        "Ok({})",
        construct(arity, |index| format!("f{index}"))
    ));

    writeln!(out, "#[cfg(feature = \"serde\")]")?;
    writeln!(
        out,
        "impl<'de, {types}> ::serde::Deserialize<'de> for {}",
        tuple_type(arity, "T")
    )?;
    writeln!(out, "where")?;
    writeln!(out, "{}", deserialize_bounds("    "))?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>"
    )?;
    writeln!(out, "    where")?;
    writeln!(out, "        D: ::serde::Deserializer<'de>,")?;
    writeln!(out, "    {{")?;
    writeln!(
        out,
        "        struct {visitor}<{types}>(::std::marker::PhantomData<fn() -> {}>);",
        native_types(arity)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "        impl<'de, {types}> ::serde::de::Visitor<'de> for {visitor}<{types}>"
    )?;
    writeln!(out, "        where")?;
    writeln!(out, "{}", deserialize_bounds("            "))?;
    writeln!(out, "        {{")?;
    writeln!(out, "            type Value = {};", tuple_type(arity, "T"))?;
    writeln!(out)?;
    writeln!(
        out,
        "            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {{"
    )?;
    writeln!(
        out,
        "                formatter.write_str(\"a sequence of {arity} elements\")"
    )?;
    writeln!(out, "            }}")?;
    writeln!(out)?;
    writeln!(
        out,
        "            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>"
    )?;
    writeln!(out, "            where")?;
    writeln!(out, "                A: ::serde::de::SeqAccess<'de>,")?;
    writeln!(out, "            {{")?;
    for line in visit_seq.lines() {
        writeln!(out, "                {line}")?;
    }
    writeln!(out, "            }}")?;
    writeln!(out, "        }}")?;
    writeln!(out)?;
    writeln!(
        out,
        "        deserializer.deserialize_tuple({arity}, {visitor}(::std::marker::PhantomData))"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn make_tuple(arity: usize) -> FnTemplate {
    FnTemplate::new(format!("make_tuple{arity}"))
        .doc(format!("Creates a [`Tuple{arity}`] from its components."))
        .generics(type_list("T", 1..=arity))
        .params(typed_params("t", "T", 1..=arity))
        .output(tuple_type(arity, "T"))
        .body(construct(arity, |index| format!("t{index}")))
}

fn tupled(arity: usize) -> FnTemplate {
    let types = type_list("T", 1..=arity);
    FnTemplate::new(format!("tupled{arity}"))
        .doc(format!(
            "Turns a function of {arity} arguments into a function of one [`Tuple{arity}`]."
        ))
        .generics(format!("{types}, R, F"))
        .params("f: F")
        .output(format!("impl Fn({}) -> R", tuple_type(arity, "T")))
        .bound(format!("F: Fn({types}) -> R"))
        .body(format!(
            "move |t: {}| f({})",
            tuple_type(arity, "T"),
            join_range(1..=arity, ", ", |index| format!("t.f{index}"))
        ))
}

fn untupled(arity: usize) -> FnTemplate {
    let types = type_list("T", 1..=arity);
    FnTemplate::new(format!("untupled{arity}"))
        .doc(format!(
            "Turns a function of one [`Tuple{arity}`] into a function of {arity} arguments."
        ))
        .generics(format!("{types}, R, F"))
        .params("f: F")
        .output(format!("impl Fn({types}) -> R"))
        .bound(format!("F: Fn({}) -> R", tuple_type(arity, "T")))
        .body(format!(
            "move |{}| f({})",
            typed_params("t", "T", 1..=arity),
            construct(arity, |index| format!("t{index}"))
        ))
}

fn semigroup(arity: usize) -> FnTemplate {
    let tuple = tuple_type(arity, "T");
    let combined = construct(arity, |index| {
        format!("c{index}(left.f{index}, right.f{index})")
    });
    FnTemplate::new(format!("semigroup{arity}"))
        .doc(format!(
            "Combines two [`Tuple{arity}`] values component by component."
        ))
        .generics(type_list("T", 1..=arity))
        .generics(type_list("C", 1..=arity))
        .params(typed_params("c", "C", 1..=arity))
        .output(format!("impl Fn({tuple}, {tuple}) -> {tuple}"))
        .bounds((1..=arity).map(|index| format!("C{index}: Fn(T{index}, T{index}) -> T{index}")))
        .body(format!("move |left: {tuple}, right: {tuple}| {combined}"))
}

fn monoid(arity: usize) -> FnTemplate {
    let tuple = tuple_type(arity, "T");
    let params = join_range(1..=arity, ", ", |index| {
        format!("e{index}: T{index}, c{index}: C{index}")
    });
    FnTemplate::new(format!("monoid{arity}"))
        .doc(format!(
            "The empty [`Tuple{arity}`] and the component-wise combine of [`semigroup{arity}`]."
        ))
        .generics(type_list("T", 1..=arity))
        .generics(type_list("C", 1..=arity))
        .params(params)
        .output(format!("({tuple}, impl Fn({tuple}, {tuple}) -> {tuple})"))
        .bounds((1..=arity).map(|index| format!("C{index}: Fn(T{index}, T{index}) -> T{index}")))
        .body(format!(
            "(\n    {},\n    semigroup{arity}({}),\n)",
            construct(arity, |index| format!("e{index}")),
            join_range(1..=arity, ", ", |index| format!("c{index}"))
        ))
}

fn ord(arity: usize) -> FnTemplate {
    let tuple = tuple_type(arity, "T");
    let mut comparison = "o1(&left.f1, &right.f1)".to_string();
    for index in 2..=arity {
        comparison.push_str(&format!(
            "\n    .then_with(|| o{index}(&left.f{index}, &right.f{index}))"
        ));
    }
    FnTemplate::new(format!("ord{arity}"))
        .doc(format!(
            "Orders [`Tuple{arity}`] values lexicographically, one comparator per component."
        ))
        .generics(type_list("T", 1..=arity))
        .generics(type_list("O", 1..=arity))
        .params(typed_params("o", "O", 1..=arity))
        .output(format!("impl Fn(&{tuple}, &{tuple}) -> Ordering"))
        .bounds((1..=arity).map(|index| format!("O{index}: Fn(&T{index}, &T{index}) -> Ordering")))
        .body(format!(
            "move |left: &{tuple}, right: &{tuple}| {{\n    {}\n}}",
            indent_tail(&comparison, 1)
        ))
}
