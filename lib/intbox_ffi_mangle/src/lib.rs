/// Returns the C symbol for a method name like `Integer#fib`.
///
/// ```
/// assert_eq!(intbox_ffi_mangle::mangle_method("Integer#fib"), "Integer_fib");
/// ```
pub fn mangle_method(method_name: &str) -> String {
    method_name
        // Replace '_' to use '_' as delimiter
        .replace('_', "__")
        .replace('#', "_")
}
