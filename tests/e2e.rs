use acf_support as acf;

use acf::{FieldAccessor, PostId, StaticFields};
use serde_json::json;

fn site_fields() -> StaticFields {
    StaticFields::from_json(
        r#"{
            "7": {
                "hero_title": "Welcome to the launch",
                "hero_subtitle": "",
                "visit_count": 0,
                "hero_image": {"url": "/img/hero.png", "alt": "Launch hero"},
                "byline": {"name": "A. Writer"}
            },
            "9": {
                "hero_title": "Archive",
                "hero_image": {}
            }
        }"#,
    )
    .unwrap()
}

#[test]
fn test_simple_field_value() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    assert_eq!(
        acf.get_simple_field("hero_title", None),
        json!("Welcome to the launch")
    );
}

#[test]
fn test_missing_field_is_the_empty_string() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    assert_eq!(acf.get_simple_field("hero_caption", None), json!(""));
}

#[test]
fn test_blank_field_is_the_empty_string() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    assert_eq!(acf.get_simple_field("hero_subtitle", None), json!(""));
}

#[test]
fn test_zero_is_a_value_not_an_absence() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    assert_eq!(acf.get_simple_field("visit_count", None), json!(0));
    assert_eq!(acf.render_simple_field("visit_count", None), "0");
}

#[test]
fn test_simple_emit_writes_the_text() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    let mut out = Vec::new();
    acf.emit_simple_field(&mut out, "hero_title", None).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Welcome to the launch");
}

#[test]
fn test_simple_emit_falls_back_to_the_comment() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    let mut out = Vec::new();
    acf.emit_simple_field(&mut out, "hero_caption", None).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "<!-- An error occurred while accessing ACF field hero_caption -->"
    );
}

#[test]
fn test_image_emit_exact_tag() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    let mut out = Vec::new();
    acf.emit_image_field(&mut out, "hero_image", None).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        r#"<img alt="Launch hero" src="/img/hero.png" />"#
    );
}

#[test]
fn test_empty_image_mapping_renders_the_comment() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(9));
    assert_eq!(
        acf.render_image_field("hero_image", None),
        "<!-- An error occurred while accessing ACF field hero_image -->"
    );
}

#[test]
fn test_explicit_post_wins_over_the_context() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    assert_eq!(
        acf.get_simple_field("hero_title", Some(PostId(9))),
        json!("Archive")
    );
}

#[test]
fn test_simple_lookup_passes_mappings_through() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    assert_eq!(
        acf.get_simple_field("byline", None),
        json!({"name": "A. Writer"})
    );
}

#[test]
fn test_one_shot_helpers() {
    let fields = site_fields();
    assert_eq!(
        acf::get_simple_field(&fields, "hero_title", PostId(9)),
        json!("Archive")
    );
    assert_eq!(
        acf::render_image_field(&fields, "hero_image", PostId(7)),
        r#"<img alt="Launch hero" src="/img/hero.png" />"#
    );
}

// Repeated reads against an unchanged provider are identical.
#[test]
fn lookups_are_repeatable_smoke() {
    let acf = FieldAccessor::new(site_fields()).for_post(PostId(7));
    let first = acf.get_simple_field("hero_title", None);
    let second = acf.get_simple_field("hero_title", None);
    assert_eq!(first, second);
    assert_eq!(
        acf.render_image_field("hero_image", None),
        acf.render_image_field("hero_image", None)
    );
}
