//! lg similarity - Frequency-weighted similarity of the location columns

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::core::{locations, parse};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SimilarityArgs {
    /// Input file (defaults to the configured path)
    pub file: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &SimilarityArgs) -> Result<()> {
    let (path, reader) = super::open_input(ctx, args.file.as_deref())?;
    let parsed = parse::parse_pairs(reader)?;
    debug!(
        target: "similarity",
        file = %path.display(),
        pairs = parsed.len(),
        issues = parsed.issues.len(),
        "input parsed"
    );

    let score = locations::similarity_score(&parsed.left, &parsed.right);

    match ctx.output_format {
        OutputFormat::Human => {
            if ctx.config.output.detail {
                super::print_issues(&parsed.issues, ctx.colors);
            }
            let mut layout = HumanLayout::new();
            layout.section("Location Similarity");
            layout.kv("pairs", &parsed.len().to_string());
            layout.kv("parse errors", &parsed.issues.len().to_string());
            layout.kv("similarity score", &score.to_string());
            output::emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => {
            let data = serde_json::json!({
                "file": path,
                "pairs": parsed.len(),
                "issues": parsed.issues,
                "similarity_score": score,
            });
            output::emit_json(&output::envelope_ok(data))
        }
        OutputFormat::Jsonl => output::emit_json_line(&serde_json::json!({
            "pairs": parsed.len(),
            "similarity_score": score,
        })),
    }
}
