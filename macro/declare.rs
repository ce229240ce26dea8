use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::{abort, abort_if_dirty, emit_error};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::*;
use template_quote::quote;

use crate::common;

struct Entry {
    attrs: Vec<Attribute>,
    name: Ident,
    value: Option<Expr>,
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        if !input.peek(token::Paren) {
            return Ok(Self {
                attrs,
                name: input.parse()?,
                value: None,
            });
        }
        let content;
        parenthesized!(content in input);
        let name = content.parse()?;
        content.parse::<Token![,]>()?;
        let value = content.parse()?;
        content.parse::<Option<Token![,]>>()?;
        if !content.is_empty() {
            return Err(content.error("Unexpected token"));
        }
        Ok(Self {
            attrs,
            name,
            value: Some(value),
        })
    }
}

pub(crate) struct DeclareEnum {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    repr: Option<Ident>,
    entries: Vec<Entry>,
    krate: Option<Path>,
}

impl Parse for DeclareEnum {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let ident = input.parse()?;
        let repr = common::parse_repr(input)?;
        let mut entries = Vec::new();
        let mut krate = None;
        while !input.is_empty() {
            if input.peek(Token![@]) {
                krate = common::parse_crate_path(input)?;
                break;
            }
            input.parse::<Token![,]>()?;
            if !input.is_empty() && !input.peek(Token![@]) {
                entries.push(input.parse()?);
            }
        }
        Ok(Self {
            attrs,
            vis,
            ident,
            repr,
            entries,
            krate,
        })
    }
}

/// The value of an explicit entry as an `i128` constant expression.
fn value_i128(expr: &Expr) -> TokenStream2 {
    fn suffixed(lit: &LitInt) -> LitInt {
        LitInt::new(&format!("{}i128", lit.base10_digits()), lit.span())
    }
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => quote! { #{suffixed(lit)} },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match &**inner {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => quote! { -#{suffixed(lit)} },
            _ => quote! { (#expr) as ::core::primitive::i128 },
        },
        Expr::Path(_) => quote! { #expr as ::core::primitive::i128 },
        _ => quote! { (#expr) as ::core::primitive::i128 },
    }
}

fn check_unique(entries: &[Entry]) {
    let mut seen: Vec<String> = Vec::new();
    for entry in entries {
        let name = entry.name.unraw().to_string();
        if seen.contains(&name) {
            emit_error!(entry.name, "`{}` is declared more than once", name);
        } else {
            seen.push(name);
        }
    }
    abort_if_dirty();
}

pub(crate) fn expand(input: DeclareEnum) -> TokenStream2 {
    let DeclareEnum {
        attrs,
        vis,
        ident,
        repr,
        entries,
        krate,
    } = input;
    if entries.is_empty() {
        abort!(ident, "`{}` must declare at least one entry", ident);
    }
    check_unique(&entries);

    let krate = common::crate_path(krate);
    let repr = common::repr_or_default(repr);
    let type_name = ident.unraw().to_string();
    let schema = Ident::new(&format!("__RICH_ENUM_SCHEMA_{}", type_name), ident.span());
    let names: Vec<LitStr> = entries
        .iter()
        .map(|entry| LitStr::new(&entry.name.unraw().to_string(), entry.name.span()))
        .collect();
    let range_check = common::check_range(&krate, &quote! { #schema }, &repr);
    let binding = common::impl_rich_enum(
        &krate,
        &Path::from(ident.clone()),
        &type_name,
        &repr,
        &entries
            .iter()
            .enumerate()
            .map(|(n, entry)| {
                let name = &entry.name;
                (quote! { #schema[#n].name }, quote! { Self::#name })
            })
            .collect::<Vec<_>>(),
    );

    quote! {
        #[doc(hidden)]
        #[allow(non_upper_case_globals)]
        const #schema: [#krate::schema::Resolved; #{entries.len()}] =
            match #krate::schema::resolve([
                #(for (entry, name) in entries.iter().zip(&names)) {
                    #(if let Some(value) = &entry.value) {
                        #krate::schema::Item::Explicit(#name, #{value_i128(value)}),
                    }
                    #(else) {
                        #krate::schema::Item::Implicit(#name),
                    }
                }
            ]) {
                ::core::result::Result::Ok(resolved) => resolved,
                ::core::result::Result::Err(err) => err.abort(),
            };

        const _: () = #range_check;

        #(for attr in &attrs) { #attr }
        #[repr(#repr)]
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #vis enum #ident {
            #(for (n, entry) in entries.iter().enumerate()) {
                #(for attr in &entry.attrs) { #attr }
                #{&entry.name} = #schema[#n].value as #repr,
            }
        }

        #binding

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(match self {
                    #(for (n, entry) in entries.iter().enumerate()) {
                        Self::#{&entry.name} => #schema[#n].name,
                    }
                })
            }
        }

        impl ::core::str::FromStr for #ident {
            type Err = #krate::ParseError;

            fn from_str(s: &::core::primitive::str) -> ::core::result::Result<Self, Self::Err> {
                #krate::EnumTraits::<Self>::parse(s)
            }
        }
    }
}
