use ammonia::{Builder, UrlRelative};

/// Strips unsafe HTML from user-authored content before it is stored.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

/// Escapes plain text for interpolation into an HTML email body.
pub fn escape_text(text: &str) -> String {
    ammonia::clean_text(text)
}
