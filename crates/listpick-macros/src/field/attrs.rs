//! Attribute parsing for the FieldAccessible derive macro.
//!
//! This module provides parsers for the `#[pick(...)]` field attributes and
//! the inference of a field's declared type from its Rust type.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, GenericArgument, Ident, Lit, Meta, PathArguments, Result, Token, Type,
};

/// The declared type of a pickable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickType {
    /// Text field: `#[pick(Text)]`
    Text,
    /// 32-bit integer field: `#[pick(Int)]`
    Int,
    /// 64-bit integer field: `#[pick(Long)]`
    Long,
    /// Floating point field: `#[pick(Float)]`
    Float,
    /// Boolean field: `#[pick(Bool)]`
    Bool,
    /// Character field: `#[pick(Char)]`
    Char,
    /// Any `Display` type, never coerced: `#[pick(Opaque)]`
    Opaque,
}

const EXPECTED: &str = "Text, Int, Long, Float, Bool, Char, Opaque";

impl PickType {
    /// Parse a pick type from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::from_str(&ident.to_string(), ident.span())
    }

    /// Parse a pick type from a string.
    pub fn from_str(s: &str, span: Span) -> Result<Self> {
        match s {
            "Text" | "text" | "String" | "string" => Ok(PickType::Text),
            "Int" | "int" => Ok(PickType::Int),
            "Long" | "long" => Ok(PickType::Long),
            "Float" | "float" => Ok(PickType::Float),
            "Bool" | "bool" | "boolean" => Ok(PickType::Bool),
            "Char" | "char" => Ok(PickType::Char),
            "Opaque" | "opaque" => Ok(PickType::Opaque),
            other => Err(Error::new(
                span,
                format!("unknown pick type: '{}'. Expected one of: {}", other, EXPECTED),
            )),
        }
    }

    /// Name of the matching `listpick::FieldType` variant.
    pub fn variant(self) -> &'static str {
        match self {
            PickType::Text => "Text",
            PickType::Int => "Int",
            PickType::Long => "Long",
            PickType::Float => "Float",
            PickType::Bool => "Bool",
            PickType::Char => "Char",
            PickType::Opaque => "Opaque",
        }
    }

    /// Infers the pick type of a Rust type.
    ///
    /// `Option<T>`, `Box<T>` and references unwrap to `T`. Unknown types
    /// return `None`.
    pub fn infer(ty: &Type) -> Option<Self> {
        match ty {
            Type::Reference(reference) => Self::infer(&reference.elem),
            Type::Paren(paren) => Self::infer(&paren.elem),
            Type::Group(group) => Self::infer(&group.elem),
            Type::Path(path) if path.qself.is_none() => {
                let segment = path.path.segments.last()?;
                match segment.ident.to_string().as_str() {
                    "Option" | "Box" => Self::infer(first_type_argument(&segment.arguments)?),
                    "String" | "str" | "Cow" => Some(PickType::Text),
                    "i8" | "i16" | "i32" | "u8" | "u16" => Some(PickType::Int),
                    "i64" | "isize" | "u32" | "u64" | "usize" => Some(PickType::Long),
                    "f32" | "f64" => Some(PickType::Float),
                    "bool" => Some(PickType::Bool),
                    "char" => Some(PickType::Char),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        }),
        _ => None,
    }
}

/// Field-level attributes from `#[pick(...)]`.
#[derive(Debug, Clone)]
pub struct PickAttr {
    /// Explicit declared type, overriding inference.
    pub pick_type: Option<PickType>,
    /// Leave this field out of the descriptor table.
    pub skip: bool,
    /// Custom attribute name for queries (default: field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for PickAttr {
    fn default() -> Self {
        PickAttr {
            pick_type: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for PickAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = PickAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Type identifier: pick(Int), pick(Opaque), or pick(skip)
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.pick_type = Some(PickType::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            format!("expected pick type ({}) or skip", EXPECTED),
                        ));
                    }
                }

                // rename = "custom_name" or ty = "bool"
                Meta::NameValue(nv) => {
                    let text = match &nv.value {
                        syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) => s,
                        other => {
                            return Err(Error::new(
                                other.span(),
                                "expected a string literal",
                            ))
                        }
                    };

                    if nv.path.is_ident("rename") {
                        attr.rename = Some(text.value());
                    } else if nv.path.is_ident("ty") {
                        attr.pick_type = Some(PickType::from_str(&text.value(), text.span())?);
                        attr.span = text.span();
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown pick attribute. Expected a type, skip, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[pick(...)]` attributes from a field's attributes.
pub fn parse_pick_attrs(attrs: &[Attribute]) -> Result<PickAttr> {
    for attr in attrs {
        if attr.path().is_ident("pick") {
            return attr.parse_args::<PickAttr>();
        }
    }
    Ok(PickAttr::default())
}
