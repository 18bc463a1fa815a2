//! String case conversion and splitting.

/// Convert ASCII letters to lowercase in place
pub fn to_lowercase(s: &mut String) {
    s.make_ascii_lowercase();
}

/// Convert ASCII letters to uppercase in place
pub fn to_uppercase(s: &mut String) {
    s.make_ascii_uppercase();
}

/// Split `source` at every occurrence of `delimiter`.
///
/// Empty pieces are kept, so `"e be ce"` split by `"e"` gives
/// `["", " b", " c", ""]`. An empty delimiter yields `source` unchanged as
/// the only element.
pub fn split_string(source: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![source.to_string()];
    }
    source.split(delimiter).map(str::to_string).collect()
}

/// Split each of `sources` by `delimiter` and concatenate the pieces in order
pub fn split_strings<S: AsRef<str>>(sources: &[S], delimiter: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|source| split_string(source.as_ref(), delimiter))
        .collect()
}

/// Split `source` by every delimiter in `delimiters`, one after the other
pub fn split_string_by_any<'a, I>(source: &str, delimiters: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    delimiters
        .into_iter()
        .fold(vec![source.to_string()], |pieces, delimiter| {
            split_strings(&pieces, delimiter)
        })
}
