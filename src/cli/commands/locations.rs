//! lg locations - Distance and similarity of the location columns in one pass

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::core::{locations, parse};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Input file (defaults to the configured path)
    pub file: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &LocationsArgs) -> Result<()> {
    let (path, reader) = super::open_input(ctx, args.file.as_deref())?;
    let parsed = parse::parse_pairs(reader)?;
    debug!(
        target: "locations",
        file = %path.display(),
        pairs = parsed.len(),
        issues = parsed.issues.len(),
        "input parsed"
    );

    let distance = locations::total_distance(&parsed.left, &parsed.right);
    let score = locations::similarity_score(&parsed.left, &parsed.right);

    match ctx.output_format {
        OutputFormat::Human => {
            if ctx.config.output.detail {
                super::print_issues(&parsed.issues, ctx.colors);
            }
            let mut layout = HumanLayout::new();
            layout.section("Location Analysis");
            layout.kv("pairs", &parsed.len().to_string());
            layout.kv("parse errors", &parsed.issues.len().to_string());
            layout.kv("total distance", &distance.to_string());
            layout.kv("similarity score", &score.to_string());
            output::emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => {
            let data = serde_json::json!({
                "file": path,
                "pairs": parsed.len(),
                "issues": parsed.issues,
                "total_distance": distance,
                "similarity_score": score,
            });
            output::emit_json(&output::envelope_ok(data))
        }
        OutputFormat::Jsonl => output::emit_json_line(&serde_json::json!({
            "pairs": parsed.len(),
            "total_distance": distance,
            "similarity_score": score,
        })),
    }
}
