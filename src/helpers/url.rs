//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encode one path segment (a slug, a locale)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Path of a page under a locale prefix
///
/// # Examples
/// ```ignore
/// localized_path("it", "")         // -> "/it"
/// localized_path("en", "/lineup")  // -> "/en/lineup"
/// ```
pub fn localized_path(locale: &str, page: &str) -> String {
    let page = page.trim_matches('/');
    if page.is_empty() {
        format!("/{}", encode_segment(locale))
    } else {
        format!("/{}/{}", encode_segment(locale), page)
    }
}

/// Path of a blog post page
pub fn blog_post_path(locale: &str, slug: &str) -> String {
    format!("{}/{}", localized_path(locale, "blog"), encode_segment(slug))
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url("https://example.com/", "/it/blog") // -> "https://example.com/it/blog"
/// ```
pub fn full_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
