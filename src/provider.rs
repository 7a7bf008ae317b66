use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;
use serde_json::{Map, Value};

use crate::context::PostId;
use crate::errors::{FieldError, Result};

/// Whether the provider should apply its own display formatting before
/// returning a value, or hand back the stored form untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    #[default]
    Formatted,
    Raw,
}

/// The external field-value capability.
///
/// Behind a WordPress site this is the ACF plugin; anything that can answer
/// "the value of field X on post Y" fits. `is_available` models the plugin
/// being installed and active: accessors check it before every lookup and
/// fall back to empty defaults when it reports false, without calling `get`
/// at all.
pub trait FieldProvider: Send + Sync {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, field_name: &str, post_id: PostId, format: ValueFormat) -> Option<Value>;
}

impl<P: FieldProvider + ?Sized> FieldProvider for &P {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, field_name: &str, post_id: PostId, format: ValueFormat) -> Option<Value> {
        (**self).get(field_name, post_id, format)
    }
}

impl<P: FieldProvider + ?Sized> FieldProvider for Box<P> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, field_name: &str, post_id: PostId, format: ValueFormat) -> Option<Value> {
        (**self).get(field_name, post_id, format)
    }
}

impl<P: FieldProvider + ?Sized> FieldProvider for Arc<P> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, field_name: &str, post_id: PostId, format: ValueFormat) -> Option<Value> {
        (**self).get(field_name, post_id, format)
    }
}

/// In-memory provider holding a map of field values per post.
///
/// Backs the `acfs` runner and doubles as the substitute provider used
/// throughout the tests. Static values carry no separate stored form, so the
/// format flag has no effect here.
#[derive(Debug, Clone, Default)]
pub struct StaticFields {
    posts: HashMap<PostId, Map<String, Value>>,
}

impl StaticFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON document shaped `{"<post id>": {"<field>": value, ...}}`.
    pub fn from_json(document: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(document)?;
        let entries = match root {
            Value::Object(entries) => entries,
            _ => {
                return Err(FieldError::Invalid(
                    "fields document must be a JSON object keyed by post id".into(),
                ))
            }
        };

        let mut posts = HashMap::new();
        for (key, fields) in entries {
            let id = key.parse::<u64>().map_err(|_| {
                FieldError::Invalid(format!("post id must be an unsigned integer, got `{key}`"))
            })?;
            let fields = match fields {
                Value::Object(fields) => fields,
                _ => {
                    return Err(FieldError::Invalid(format!(
                        "fields for post {id} must be a JSON object"
                    )))
                }
            };
            posts.insert(PostId(id), fields);
        }
        Ok(Self { posts })
    }

    pub fn insert(&mut self, post: PostId, field: impl Into<String>, value: Value) {
        self.posts.entry(post).or_default().insert(field.into(), value);
    }

    /// Post ids present in the store, in ascending order.
    pub fn posts(&self) -> Vec<PostId> {
        self.posts.keys().copied().sorted().collect()
    }

    /// The one post in the store, if there is exactly one.
    pub fn sole_post(&self) -> Option<PostId> {
        match self.posts.len() {
            1 => self.posts.keys().next().copied(),
            _ => None,
        }
    }

    pub fn has_post(&self, post: PostId) -> bool {
        self.posts.contains_key(&post)
    }

    /// Field names stored for `post`, in ascending order; empty when the
    /// post is unknown.
    pub fn field_names(&self, post: PostId) -> Vec<String> {
        self.posts
            .get(&post)
            .map(|fields| fields.keys().cloned().sorted().collect())
            .unwrap_or_default()
    }
}

impl FieldProvider for StaticFields {
    fn get(&self, field_name: &str, post_id: PostId, _format: ValueFormat) -> Option<Value> {
        self.posts
            .get(&post_id)
            .and_then(|fields| fields.get(field_name))
            .cloned()
    }
}

/// Models the external plugin being missing or inactive: reports itself
/// unavailable and never yields a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl FieldProvider for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _field_name: &str, _post_id: PostId, _format: ValueFormat) -> Option<Value> {
        None
    }
}
