use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 query-allowed characters without general and sub delimiters
/// (`:#[]@!$&'()*+,;=`).
///
/// Only alphanumerics and `-._~/?` are left as is.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'?');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for escaping query keys and values.
pub fn url_encode(data: &str) -> String {
    utf8_percent_encode(data, QUERY_COMPONENT).to_string()
}
