use std::io::Write;

use serde_json::{Map, Value};
use tracing::debug;

use crate::context::{PostId, RenderContext};
use crate::errors::Result;
use crate::markup::{error_comment, img_tag, Escaping};
use crate::provider::{FieldProvider, ValueFormat};
use crate::value::{is_blank, to_text, ImageField};

/// Null-safe facade over a [`FieldProvider`].
///
/// Every lookup degrades to a defined empty value instead of erroring:
/// `""` for simple fields, `{}` for image fields. The render variants go one
/// step further and substitute a diagnostic HTML comment so a template never
/// receives nothing at all.
#[derive(Debug, Clone)]
pub struct FieldAccessor<P> {
    provider: P,
    context: RenderContext,
    escaping: Escaping,
}

impl<P: FieldProvider> FieldAccessor<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            context: RenderContext::new(),
            escaping: Escaping::default(),
        }
    }

    pub fn with_context(mut self, context: RenderContext) -> Self {
        self.context = context;
        self
    }

    /// Shorthand for [`with_context`](Self::with_context) with a context whose
    /// current post is `post`.
    pub fn for_post(mut self, post: PostId) -> Self {
        self.context = RenderContext::for_post(post);
        self
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// The value of a simple field, or `""` when the provider is unavailable,
    /// no post resolves, or the stored value is blank.
    ///
    /// The value is passed through untouched otherwise. It is deliberately not
    /// shape-checked: a provider that hands back a mapping for a simple field
    /// hands it to the caller.
    pub fn get_simple_field(&self, field_name: &str, post: Option<PostId>) -> Value {
        self.get_simple_field_as(field_name, post, ValueFormat::Formatted)
    }

    pub fn get_simple_field_as(
        &self,
        field_name: &str,
        post: Option<PostId>,
        format: ValueFormat,
    ) -> Value {
        match self.lookup(field_name, post, format) {
            Some(value) if !is_blank(&value) => value,
            Some(_) => {
                debug!(field = field_name, "field value is blank");
                Value::String(String::new())
            }
            None => Value::String(String::new()),
        }
    }

    /// The value of an image field, or `{}` under the same fallbacks as
    /// [`get_simple_field`](Self::get_simple_field).
    ///
    /// A present value is expected to be a mapping carrying at least `url` and
    /// `alt`, but this getter does not enforce that; only the render path
    /// inspects the shape.
    pub fn get_image_field(&self, field_name: &str, post: Option<PostId>) -> Value {
        self.get_image_field_as(field_name, post, ValueFormat::Formatted)
    }

    pub fn get_image_field_as(
        &self,
        field_name: &str,
        post: Option<PostId>,
        format: ValueFormat,
    ) -> Value {
        match self.lookup(field_name, post, format) {
            Some(value) if !is_blank(&value) => value,
            Some(_) => {
                debug!(field = field_name, "field value is blank");
                Value::Object(Map::new())
            }
            None => Value::Object(Map::new()),
        }
    }

    /// Typed view of an image field. `None` when the resolved value is empty
    /// or not a mapping.
    pub fn image(&self, field_name: &str, post: Option<PostId>) -> Option<ImageField> {
        let value = self.get_image_field(field_name, post);
        if is_blank(&value) {
            return None;
        }
        ImageField::from_value(&value)
    }

    /// The simple field's value as display text, or the diagnostic comment
    /// when the resolved value is empty.
    ///
    /// Non-string values render as their compact JSON text, so `42` emits as
    /// `42` and `false` as `false`.
    pub fn render_simple_field(&self, field_name: &str, post: Option<PostId>) -> String {
        let text = to_text(&self.get_simple_field(field_name, post));
        if text.is_empty() {
            return error_comment(field_name);
        }
        text
    }

    /// An `<img alt=".." src=".." />` tag for the image field, or the
    /// diagnostic comment when the resolved value is empty.
    ///
    /// `alt` and `url` each default to `""` when absent or blank in the
    /// mapping. A present value of any other shape is treated as missing
    /// rather than rendered into a malformed tag.
    pub fn render_image_field(&self, field_name: &str, post: Option<PostId>) -> String {
        let value = self.get_image_field(field_name, post);
        match &value {
            Value::Object(map) if !map.is_empty() => {
                let alt = attr_value(map.get("alt"));
                let url = attr_value(map.get("url"));
                img_tag(&alt, &url, self.escaping)
            }
            value if !is_blank(value) => {
                debug!(field = field_name, "image field value is not a mapping");
                error_comment(field_name)
            }
            _ => error_comment(field_name),
        }
    }

    /// Writes [`render_simple_field`](Self::render_simple_field) to `out`.
    /// The only error that can surface is the writer failing; a failed field
    /// lookup never does.
    pub fn emit_simple_field<W: Write>(
        &self,
        out: &mut W,
        field_name: &str,
        post: Option<PostId>,
    ) -> Result<()> {
        let rendered = self.render_simple_field(field_name, post);
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Writes [`render_image_field`](Self::render_image_field) to `out`.
    pub fn emit_image_field<W: Write>(
        &self,
        out: &mut W,
        field_name: &str,
        post: Option<PostId>,
    ) -> Result<()> {
        let rendered = self.render_image_field(field_name, post);
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn lookup(&self, field_name: &str, post: Option<PostId>, format: ValueFormat) -> Option<Value> {
        if !self.provider.is_available() {
            debug!(field = field_name, "field provider unavailable");
            return None;
        }
        let post = match self.context.resolve(post) {
            Some(post) => post,
            None => {
                debug!(field = field_name, "no post to read from");
                return None;
            }
        };
        let value = self.provider.get(field_name, post, format);
        if value.is_none() {
            debug!(field = field_name, post = %post, "field not present on post");
        }
        value
    }
}

/// Attribute text for one key of an image mapping: blank or absent values
/// become `""`, non-string values their text rendering.
fn attr_value(value: Option<&Value>) -> String {
    match value {
        Some(value) if !is_blank(value) => to_text(value),
        _ => String::new(),
    }
}
