//! Parsing of `#[seek(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, Meta, Result, Token,
};

/// How a field is exposed to conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekType {
    String,
    Number,
    Timestamp,
    /// Requires a `SeekerEnum` impl on the field type.
    Enum,
    Bool,
}

const EXPECTED_TYPES: &str = "String, Number, Timestamp, Enum, Bool";

impl SeekType {
    fn parse_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "text" => Ok(SeekType::String),
            "Number" | "number" => Ok(SeekType::Number),
            "Timestamp" | "timestamp" => Ok(SeekType::Timestamp),
            "Enum" | "enum" | "enumeration" => Ok(SeekType::Enum),
            "Bool" | "bool" | "boolean" => Ok(SeekType::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown seek type: '{}'. Expected one of: {}",
                    other, EXPECTED_TYPES
                ),
            )),
        }
    }

    pub fn from_ident(ident: &Ident) -> Result<Self> {
        SeekType::parse_name(&ident.to_string(), ident.span())
    }
}

/// Field-level attributes from `#[seek(...)]`.
#[derive(Debug, Clone, Default)]
pub struct SeekAttr {
    pub seek_type: Option<SeekType>,
    pub skip: bool,
    /// Field is an `Option<T>`; `None` reads as a missing value.
    pub optional: bool,
    /// Field name used by columns, tabs and filters (default: the Rust name).
    pub rename: Option<String>,
}

fn string_literal(value: &Expr, what: &str) -> Result<(String, Span)> {
    match value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok((s.value(), s.span())),
        other => Err(Error::new(
            other.span(),
            format!("{} must be a string literal", what),
        )),
    }
}

impl Parse for SeekAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SeekAttr::default();
        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("optional") => attr.optional = true,
                Meta::Path(p) => match p.get_ident() {
                    Some(ident) => attr.seek_type = Some(SeekType::from_ident(ident)?),
                    None => {
                        return Err(Error::new(
                            p.span(),
                            format!("expected seek type: {}, optional or skip", EXPECTED_TYPES),
                        ))
                    }
                },
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(string_literal(&nv.value, "rename")?.0);
                }
                // `ty = "enum"` for spellings that collide with keywords
                Meta::NameValue(nv) if nv.path.is_ident("ty") => {
                    let (name, span) = string_literal(&nv.value, "ty")?;
                    attr.seek_type = Some(SeekType::parse_name(&name, span)?);
                }
                Meta::NameValue(nv) => {
                    return Err(Error::new(
                        nv.path.span(),
                        "unknown attribute. Expected: rename or ty",
                    ));
                }
                Meta::List(_) => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown seek attribute. Expected a seek type, optional, skip, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[seek(...)]` attributes from a field's attributes.
pub fn parse_seek_attrs(attrs: &[Attribute]) -> Result<SeekAttr> {
    for attr in attrs {
        if attr.path().is_ident("seek") {
            return attr.parse_args::<SeekAttr>();
        }
    }
    Ok(SeekAttr::default())
}
