//! Text helpers shared by the arity emitters.
//!
//! Every emitted function follows the same shape: doc comment, attributes,
//! `pub fn name<generics>(params) -> output`, an optional `where` clause, and
//! a body. [`FnTemplate`] renders that shape; the free functions build the
//! comma-separated lists that go into it.

use std::io::{self, Write};
use std::ops::RangeInclusive;

const INDENT: &str = "    ";

/// Renders `render(i)` for each `i` in `range`, joined by `separator`.
pub fn join_range<F>(range: RangeInclusive<usize>, separator: &str, render: F) -> String
where
    F: Fn(usize) -> String,
{
    range.map(render).collect::<Vec<_>>().join(separator)
}

/// Renders `render(p)` for each position in `positions`, joined by `separator`.
pub fn join_positions<F>(positions: &[usize], separator: &str, render: F) -> String
where
    F: Fn(usize) -> String,
{
    positions
        .iter()
        .copied()
        .map(render)
        .collect::<Vec<_>>()
        .join(separator)
}

/// `T1, T2, T3` for `prefix = "T"` and `range = 1..=3`.
pub fn type_list(prefix: &str, range: RangeInclusive<usize>) -> String {
    join_range(range, ", ", |index| format!("{prefix}{index}"))
}

/// `t1, t2, t3` for `prefix = "t"` and `range = 1..=3`.
pub fn value_list(prefix: &str, range: RangeInclusive<usize>) -> String {
    join_range(range, ", ", |index| format!("{prefix}{index}"))
}

/// `t1: T1, t2: T2` for value prefix `t` and type prefix `T`.
pub fn typed_params(value_prefix: &str, type_prefix: &str, range: RangeInclusive<usize>) -> String {
    join_range(range, ", ", |index| {
        format!("{value_prefix}{index}: {type_prefix}{index}")
    })
}

/// Renders a tuple type or expression, adding the trailing comma that a
/// one-element tuple needs.
pub fn tuple_of(items: &[String]) -> String {
    match items {
        [single] => format!("({single},)"),
        _ => format!("({})", items.join(", ")),
    }
}

/// Nests applications of `function_prefix{i}` around `seed`:
/// `f3(f2(f1(t0)))` for `1..=3`.
pub fn nested_calls(function_prefix: &str, seed: &str, range: RangeInclusive<usize>) -> String {
    range.fold(seed.to_string(), |inner, index| {
        format!("{function_prefix}{index}({inner})")
    })
}

/// Joins the non-empty parts with `, `.
pub fn comma_join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Indents every line after the first by `levels` indentation steps, so a
/// multi-line expression can be spliced into an already indented line.
pub fn indent_tail(text: &str, levels: usize) -> String {
    let prefix = INDENT.repeat(levels);
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One emitted `pub fn` definition.
#[derive(Clone, Debug, Default)]
pub struct FnTemplate {
    docs: Vec<String>,
    attributes: Vec<String>,
    name: String,
    generics: Vec<String>,
    params: Vec<String>,
    output: Option<String>,
    bounds: Vec<String>,
    body: String,
}

impl FnTemplate {
    /// Starts a function named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a line of documentation.
    #[must_use]
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    /// Adds an outer attribute such as `#[must_use]`.
    #[must_use]
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Appends a generic parameter list fragment; empty fragments are dropped.
    #[must_use]
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        let generics = generics.into();
        if !generics.is_empty() {
            self.generics.push(generics);
        }
        self
    }

    /// Appends a value parameter list fragment; empty fragments are dropped.
    #[must_use]
    pub fn params(mut self, params: impl Into<String>) -> Self {
        let params = params.into();
        if !params.is_empty() {
            self.params.push(params);
        }
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Adds one `where` predicate.
    #[must_use]
    pub fn bound(mut self, bound: impl Into<String>) -> Self {
        self.bounds.push(bound.into());
        self
    }

    /// Adds several `where` predicates.
    #[must_use]
    pub fn bounds<I, S>(mut self, bounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bounds.extend(bounds.into_iter().map(Into::into));
        self
    }

    /// Sets the body; each line is indented one level when written.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Writes the definition followed by a blank line.
    pub fn write(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in &self.docs {
            if line.is_empty() {
                writeln!(out, "///")?;
            } else {
                writeln!(out, "/// {line}")?;
            }
        }
        for attribute in &self.attributes {
            writeln!(out, "{attribute}")?;
        }

        let generics = comma_join(&self.generics);
        let generics = if generics.is_empty() {
            String::new()
        } else {
            format!("<{generics}>")
        };
        write!(
            out,
            "pub fn {}{generics}({})",
            self.name,
            comma_join(&self.params)
        )?;
        if let Some(output) = &self.output {
            write!(out, " -> {output}")?;
        }

        if self.bounds.is_empty() {
            writeln!(out, " {{")?;
        } else {
            writeln!(out)?;
            writeln!(out, "where")?;
            for bound in &self.bounds {
                writeln!(out, "{INDENT}{bound},")?;
            }
            writeln!(out, "{{")?;
        }

        for line in self.body.lines() {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "{INDENT}{line}")?;
            }
        }
        writeln!(out, "}}")?;
        writeln!(out)
    }
}
