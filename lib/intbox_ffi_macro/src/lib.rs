use intbox_ffi_mangle::mangle_method;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

// Export this function under the C symbol of the given method name.
//
// ## Example
//
// ```rust
// #[intbox_method("Integer#fib")]
// pub extern "C" fn integer_fib(integer: Option<&IntegerBox>) -> c_int {
// ```
//
// is exported as `Integer_fib`.
#[proc_macro_attribute]
pub fn intbox_method(args: TokenStream, input: TokenStream) -> TokenStream {
    let method_name = parse_macro_input!(args as syn::LitStr);
    let function_definition = parse_macro_input!(input as syn::ItemFn);
    match expand(&method_name, &function_definition) {
        Ok(gen) => gen.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(
    method_name: &syn::LitStr,
    function_definition: &syn::ItemFn,
) -> syn::Result<proc_macro2::TokenStream> {
    check_c_abi(&function_definition.sig)?;
    let mangled_name = mangle_method(&method_name.value());
    Ok(quote! {
        #[export_name = #mangled_name]
        #function_definition
    })
}

/// Exported symbols are called from C, so anything but `extern "C"` is a mistake.
fn check_c_abi(sig: &syn::Signature) -> syn::Result<()> {
    let is_c = match &sig.abi {
        Some(abi) => abi.name.as_ref().map_or(true, |name| name.value() == "C"),
        None => false,
    };
    if is_c {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &sig.ident,
            "#[intbox_method] requires an `extern \"C\"` fn",
        ))
    }
}
