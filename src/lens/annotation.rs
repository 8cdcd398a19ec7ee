//! Reading the annotations the scanner branches on.
//!
//! Two kinds of annotation matter:
//!
//! - the marker that opts an item in, written either as a `//` comment in
//!   the comment block directly above the item (or between its attributes)
//!   or inside its doc comment;
//! - the serde field attributes `flatten` and `skip_serializing_if`.
//!
//! `syn` drops plain comments, so markers are looked up in the source text
//! using the line numbers of the item's tokens.

use syn::{Attribute, Expr, Lit, Meta};

/// The marker comments that opt items in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Marks a struct for lens generation.
    pub lens: String,
    /// Marks an enum for prism generation.
    pub prism: String,
}

impl Markers {
    /// Default struct marker.
    pub const DEFAULT_LENS: &'static str = "fpgen:lens";

    /// Default enum marker.
    pub const DEFAULT_PRISM: &'static str = "fpgen:prism";
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            lens: Self::DEFAULT_LENS.to_string(),
            prism: Self::DEFAULT_PRISM.to_string(),
        }
    }
}

/// Source lines of one file, for marker lookups.
pub(crate) struct SourceLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
        }
    }

    /// One-based line lookup.
    fn line(&self, number: usize) -> Option<&'a str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index).copied())
    }

    /// Whether `marker` appears in a line comment attached to an item whose
    /// first token is on `first_line` and whose keyword is on `keyword_line`.
    ///
    /// Attached means: in the unbroken run of comment lines directly above
    /// `first_line`, or on a comment line between `first_line` and
    /// `keyword_line`.
    pub(crate) fn has_comment_marker(
        &self,
        marker: &str,
        first_line: usize,
        keyword_line: usize,
    ) -> bool {
        let above = (1..first_line)
            .rev()
            .map_while(|number| self.line(number).and_then(line_comment));
        let between = (first_line..keyword_line)
            .filter_map(|number| self.line(number).and_then(line_comment));

        above.chain(between).any(|comment| comment.contains(marker))
    }
}

/// The text of a `//` comment line, `None` for anything else.
///
/// Doc comments are skipped here; they reach the item as `#[doc]` attributes.
fn line_comment(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let comment = trimmed.strip_prefix("//")?;
    if comment.starts_with('/') || comment.starts_with('!') {
        return None;
    }
    Some(comment)
}

/// Whether any `#[doc = "..."]` attribute mentions `marker`.
pub(crate) fn has_doc_marker(attributes: &[Attribute], marker: &str) -> bool {
    attributes.iter().any(|attribute| {
        let Meta::NameValue(name_value) = &attribute.meta else {
            return false;
        };
        if !name_value.path.is_ident("doc") {
            return false;
        }
        matches!(
            &name_value.value,
            Expr::Lit(expression) if matches!(&expression.lit, Lit::Str(text) if text.value().contains(marker))
        )
    })
}

/// Line of the first token of an item: its first attribute, else `fallback`.
pub(crate) fn first_line(attributes: &[Attribute], fallback: usize) -> usize {
    attributes
        .iter()
        .map(|attribute| attribute.pound_token.span.start().line)
        .chain(std::iter::once(fallback))
        .min()
        .unwrap_or(fallback)
}

/// What the serde attributes on one field say.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SerdeField {
    /// `#[serde(flatten)]`
    pub flatten: bool,
    /// `#[serde(skip_serializing_if = "...")]`
    pub omit_empty: bool,
}

impl SerdeField {
    /// Reads every `#[serde(...)]` attribute; unrelated keys are ignored and
    /// malformed attributes contribute nothing.
    pub(crate) fn from_attributes(attributes: &[Attribute]) -> Self {
        let mut field = Self::default();
        for attribute in attributes {
            if !attribute.path().is_ident("serde") {
                continue;
            }
            let parsed = attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("flatten") {
                    field.flatten = true;
                } else if meta.path.is_ident("skip_serializing_if") {
                    field.omit_empty = true;
                }
                skip_meta_value(&meta)
            });
            if let Err(error) = parsed {
                tracing::debug!(%error, "ignoring malformed serde attribute");
            }
        }
        field
    }
}

/// Consumes `= value` or `(...)` after a nested meta key so parsing can
/// continue with the next key.
fn skip_meta_value(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}
