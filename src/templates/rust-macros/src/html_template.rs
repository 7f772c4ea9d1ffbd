/* src/templates/rust-macros/src/html_template.rs */

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Token};

pub(crate) struct TemplateInput {
  pub template: LitStr,
  pub args: Vec<Expr>,
}

impl Parse for TemplateInput {
  fn parse(input: ParseStream) -> syn::Result<Self> {
    let template: LitStr = input.parse()?;
    let mut args = Vec::new();
    while !input.is_empty() {
      input.parse::<Token![,]>()?;
      // allow a trailing comma
      if input.is_empty() {
        break;
      }
      args.push(input.parse::<Expr>()?);
    }
    Ok(TemplateInput { template, args })
  }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Slot {
  Positional,
  Named(String),
}

/// Literal fragments around the slots; always one more fragment than slots.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SplitTemplate {
  pub fragments: Vec<String>,
  pub slots: Vec<Slot>,
}

pub(crate) fn split_template(template: &str) -> Result<SplitTemplate, String> {
  let mut fragments = Vec::new();
  let mut slots = Vec::new();
  let mut current = String::new();
  let mut chars = template.chars().peekable();

  while let Some(ch) = chars.next() {
    match ch {
      '{' if chars.peek() == Some(&'{') => {
        chars.next();
        current.push('{');
      }
      '}' if chars.peek() == Some(&'}') => {
        chars.next();
        current.push('}');
      }
      '{' => {
        let mut name = String::new();
        loop {
          match chars.next() {
            Some('}') => break,
            Some(c) => name.push(c),
            None => return Err("unclosed `{` in template; use `{{` for a literal brace".to_string()),
          }
        }
        if name.is_empty() {
          slots.push(Slot::Positional);
        } else if is_identifier(&name) {
          slots.push(Slot::Named(name));
        } else {
          return Err(format!(
            "invalid placeholder `{{{name}}}`; expected `{{}}` or `{{identifier}}`"
          ));
        }
        fragments.push(std::mem::take(&mut current));
      }
      '}' => return Err("unmatched `}` in template; use `}}` for a literal brace".to_string()),
      c => current.push(c),
    }
  }
  fragments.push(current);

  Ok(SplitTemplate { fragments, slots })
}

fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn expand(input: TemplateInput) -> syn::Result<TokenStream> {
  let span = input.template.span();
  let split = split_template(&input.template.value()).map_err(|msg| syn::Error::new(span, msg))?;

  let mut positional = input.args.into_iter();
  let mut values = Vec::with_capacity(split.slots.len());
  for slot in &split.slots {
    match slot {
      Slot::Positional => {
        let arg = positional
          .next()
          .ok_or_else(|| syn::Error::new(span, "template has more `{}` placeholders than arguments"))?;
        values.push(quote! { #arg });
      }
      Slot::Named(name) => {
        // Spanned at the literal so the name resolves in the caller's scope
        let ident = Ident::new(name, span);
        values.push(quote! { #ident });
      }
    }
  }
  if let Some(extra) = positional.next() {
    return Err(syn::Error::new_spanned(extra, "argument never used"));
  }

  let fragments = &split.fragments;
  Ok(quote! {
    ::html_templates::compose(
      &[#(#fragments),*],
      &[#(::html_templates::ToPlaceholder::to_placeholder(&(#values))),*],
    )
  })
}
