//! Type-parameter lists and stage types for `Contextk` declarations.

/// Comma-joined type parameters for a stage of the given arity.
///
/// The defining form is `T1, ..., Tk`. With `bare_last` the final slot is written as a
/// plain `T`, which is how the following stage is referenced from a `then` return type:
/// the value decoded so far becomes the newest accumulated element.
pub fn generic_list(arity: usize, bare_last: bool) -> String {
    let mut params: Vec<String> = (1..arity).map(|j| format!("T{}", j)).collect();
    if arity > 0 {
        if bare_last {
            params.push("T".to_string());
        } else {
            params.push(format!("T{}", arity));
        }
    }
    params.join(", ")
}

/// `Contextk` with its type arguments, or the bare `Context0`.
pub fn interface_type(arity: usize, generics: &str) -> String {
    if arity == 0 {
        "Context0".to_string()
    } else {
        format!("Context{}<{}>", arity, generics)
    }
}

/// Prefix used inside a function type-parameter list or lambda signature: `"T1, T2, "`.
pub(crate) fn leading(generics: &str) -> String {
    if generics.is_empty() {
        String::new()
    } else {
        format!("{}, ", generics)
    }
}
