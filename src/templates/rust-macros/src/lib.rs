/* src/templates/rust-macros/src/lib.rs */

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod html_template;

/// Compose markup from a format-style literal.
///
/// `{}` takes the next positional argument, `{name}` captures a variable in
/// scope and `{{` / `}}` are literal braces. Every interpolated value is
/// escaped unless it is `Markup`. A literal that starts with a newline has its
/// base indentation stripped.
#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as html_template::TemplateInput);
  html_template::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
