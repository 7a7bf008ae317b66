pub mod errors;
pub mod context;
pub mod value;
pub mod markup;
pub mod provider;   // capability interface + shipped implementations
pub mod accessor;

use serde_json::Value;

/// Re-export the everyday surface so callers rarely need the module paths.
pub use accessor::FieldAccessor;
pub use context::{PostId, RenderContext};
pub use errors::{FieldError, Result};
pub use markup::Escaping;
pub use provider::{FieldProvider, StaticFields, Unavailable, ValueFormat};
pub use value::ImageField;

/// Convenience: one-shot lookup of a simple field on `post`.
pub fn get_simple_field<P: FieldProvider>(provider: P, field_name: &str, post: PostId) -> Value {
    FieldAccessor::new(provider).get_simple_field(field_name, Some(post))
}

/// Convenience: one-shot render of an image field on `post`, default escaping.
pub fn render_image_field<P: FieldProvider>(
    provider: P,
    field_name: &str,
    post: PostId,
) -> String {
    FieldAccessor::new(provider).render_image_field(field_name, Some(post))
}
