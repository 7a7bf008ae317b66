use std::borrow::Cow;

/// Escaping policy for attribute values in emitted markup.
///
/// `Html` turns `&`, `<`, `>`, and `"` into entities. `Verbatim` escapes
/// nothing, for templates that rely on raw interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    #[default]
    Html,
    Verbatim,
}

/// Escape a string for use inside a double-quoted HTML attribute.
pub fn escape_attr(raw: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(raw)
}

/// The comment left behind when a field access comes up empty.
///
/// Visible only in page source. The field name is interpolated verbatim under
/// every policy; the exact text is part of the observable contract.
pub fn error_comment(field_name: &str) -> String {
    format!("<!-- An error occurred while accessing ACF field {field_name} -->")
}

/// Build the `<img>` element for an image field.
pub fn img_tag(alt: &str, url: &str, escaping: Escaping) -> String {
    match escaping {
        Escaping::Html => format!(
            r#"<img alt="{}" src="{}" />"#,
            escape_attr(alt),
            escape_attr(url)
        ),
        Escaping::Verbatim => format!(r#"<img alt="{alt}" src="{url}" />"#),
    }
}
