use std::io::Write;

use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use acf_support::{Escaping, FieldAccessor, PostId, RenderContext, StaticFields};

/// Inspect and render custom fields from a static fields document.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Fields document: a JSON object keyed by post id, each value an object
    /// of field values. You can also pipe a file using shell quoting.
    document: String,
    /// Field name to look up
    #[arg(required_unless_present = "list")]
    field: Option<String>,
    /// Post id to read from (defaults to the document's sole post)
    #[arg(long)]
    post: Option<u64>,
    /// Treat the field as an image field
    #[arg(long)]
    image: bool,
    /// Print rendered markup instead of the JSON value
    #[arg(long)]
    emit: bool,
    /// Interpolate attribute values without HTML escaping
    #[arg(long)]
    verbatim: bool,
    /// List the field names stored for the post
    #[arg(long)]
    list: bool,
}

fn main() {
    // Warnings on stderr by default; RUST_LOG overrides.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Load the fields document.
    let fields = match StaticFields::from_json(&args.document) {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Pick the post to read from.
    let post = args.post.map(PostId::from).or_else(|| fields.sole_post());
    if let Some(post) = post {
        if !fields.has_post(post) {
            tracing::warn!(
                "post {post} is not in the document (available: {})",
                fields.posts().iter().join(", ")
            );
        }
    } else if !fields.posts().is_empty() {
        tracing::warn!(
            "no post selected; pass --post (available: {})",
            fields.posts().iter().join(", ")
        );
    }

    // List mode: show what the post carries and stop.
    if args.list {
        let post = match post {
            Some(post) => post,
            None => {
                eprintln!("--list needs a post; pass --post");
                std::process::exit(1);
            }
        };
        for name in fields.field_names(post) {
            println!("{name}");
        }
        return;
    }

    // clap requires the field argument unless --list was given.
    let field = match args.field.as_deref() {
        Some(field) => field,
        None => {
            eprintln!("a field name is required");
            std::process::exit(1);
        }
    };

    // Build the accessor.
    let context = match post {
        Some(post) => RenderContext::for_post(post),
        None => RenderContext::new(),
    };
    let escaping = if args.verbatim {
        Escaping::Verbatim
    } else {
        Escaping::Html
    };
    let acf = FieldAccessor::new(&fields)
        .with_context(context)
        .with_escaping(escaping);

    if args.emit {
        // Rendered markup straight to stdout.
        let out = std::io::stdout();
        let mut out = out.lock();
        let outcome = if args.image {
            acf.emit_image_field(&mut out, field, None)
        } else {
            acf.emit_simple_field(&mut out, field, None)
        };
        if let Err(e) = outcome {
            eprintln!("{e}");
            std::process::exit(1);
        }
        if let Err(e) = writeln!(out) {
            eprintln!("write error: {e}");
            std::process::exit(1);
        }
    } else {
        // The resolved value as pretty JSON.
        let value = if args.image {
            acf.get_image_field(field, None)
        } else {
            acf.get_simple_field(field, None)
        };
        println!("{}", serde_json::to_string_pretty(&value).unwrap());
    }
}
