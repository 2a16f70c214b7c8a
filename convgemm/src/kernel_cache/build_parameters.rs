use std::borrow::Cow;

/// Prefixes non-empty build parameters with a single space.
///
/// Some OpenCL compilers mis-parse option strings when options are joined
/// with more than one space, so parameters are always passed as
/// `" -opt ..."` and never padded further.
pub fn normalize_build_parameters(parameters: &str) -> Cow<'_, str> {
    if parameters.is_empty() || parameters.starts_with(' ') {
        Cow::Borrowed(parameters)
    } else {
        Cow::Owned(format!(" {parameters}"))
    }
}
