//! lg safety - Judge level reports with the dampener

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::colors::{self, ColorSupport};
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::core::Level;
use crate::core::parse::{self, ParseIssue, Report};
use crate::core::safety::{self, SafetyVerdict};
use crate::core::summary::SafetySummary;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SafetyArgs {
    /// Input file (defaults to the configured path)
    pub file: Option<PathBuf>,

    /// Judge reports as written, without the single-removal dampener
    #[arg(long)]
    pub no_dampener: bool,

    /// Only print the summary block
    #[arg(long)]
    pub summary_only: bool,
}

pub fn run(ctx: &AppContext, args: &SafetyArgs) -> Result<()> {
    let (path, reader) = super::open_input(ctx, args.file.as_deref())?;
    let parsed = parse::parse_reports(reader)?;
    debug!(
        target: "safety",
        file = %path.display(),
        reports = parsed.reports.len(),
        issues = parsed.issues.len(),
        "input parsed"
    );

    let mut summary = SafetySummary {
        parse_errors: parsed.issues.len(),
        ..SafetySummary::default()
    };

    let rows: Vec<ReportRow> = parsed
        .reports
        .iter()
        .map(|report| {
            let verdict = judge(report, args.no_dampener);
            summary.record(verdict);
            ReportRow::new(report, verdict)
        })
        .collect();

    debug!(target: "safety", analyzed = summary.analyzed, passing = summary.passing(), "reports judged");

    display(ctx, args, &path, &rows, &parsed.issues, summary)
}

fn judge(report: &Report, no_dampener: bool) -> SafetyVerdict {
    if no_dampener {
        if safety::is_safe(&report.levels) {
            SafetyVerdict::Safe
        } else {
            SafetyVerdict::Unsafe
        }
    } else {
        safety::check_with_dampener(&report.levels)
    }
}

/// Serializable per-report result for JSON/JSONL output.
#[derive(Debug, Clone, Serialize)]
struct ReportRow {
    line: usize,
    levels: Vec<Level>,
    #[serde(flatten)]
    verdict: SafetyVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed_level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dampened_levels: Option<Vec<Level>>,
}

impl ReportRow {
    fn new(report: &Report, verdict: SafetyVerdict) -> Self {
        let (removed_level, dampened_levels) = match verdict {
            SafetyVerdict::SafeWithRemoval { index } => (
                Some(report.levels[index]),
                Some(safety::without_level(&report.levels, index)),
            ),
            _ => (None, None),
        };

        Self {
            line: report.line,
            levels: report.levels.clone(),
            verdict,
            removed_level,
            dampened_levels,
        }
    }

    fn human_line(&self, support: ColorSupport) -> String {
        let status = match self.verdict {
            SafetyVerdict::Safe => colors::safe(&format!("{:<8}", "SAFE"), support),
            SafetyVerdict::SafeWithRemoval { .. } => {
                colors::dampened(&format!("{:<8}", "DAMPENED"), support)
            }
            SafetyVerdict::Unsafe => colors::danger(&format!("{:<8}", "UNSAFE"), support),
        };

        let mut line = format!(
            "line {:<4} {status}  {}",
            self.line,
            format_levels(&self.levels)
        );
        if let (Some(removed), Some(dampened)) = (self.removed_level, &self.dampened_levels) {
            let position = self.verdict.removed_index().unwrap_or_default() + 1;
            line.push_str(&format!(
                " (removed {removed} at position {position}: {})",
                format_levels(dampened)
            ));
        }
        line
    }
}

fn format_levels(levels: &[Level]) -> String {
    levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn display(
    ctx: &AppContext,
    args: &SafetyArgs,
    path: &Path,
    rows: &[ReportRow],
    issues: &[ParseIssue],
    summary: SafetySummary,
) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Human => {
            display_human(ctx, args, rows, issues, summary);
            Ok(())
        }
        OutputFormat::Json => {
            let data = serde_json::json!({
                "file": path,
                "dampener": !args.no_dampener,
                "reports": rows,
                "issues": issues,
                "summary": summary,
                "safety_rate": summary.safety_rate(),
            });
            output::emit_json(&output::envelope_ok(data))
        }
        OutputFormat::Jsonl => {
            for row in rows {
                output::emit_json_line(row)?;
            }
            for issue in issues {
                output::emit_json_line(&serde_json::json!({ "issue": issue }))?;
            }
            output::emit_json_line(&serde_json::json!({
                "summary": summary,
                "safety_rate": summary.safety_rate(),
            }))
        }
    }
}

fn display_human(
    ctx: &AppContext,
    args: &SafetyArgs,
    rows: &[ReportRow],
    issues: &[ParseIssue],
    summary: SafetySummary,
) {
    let detail = ctx.config.output.detail && !args.summary_only;
    if detail {
        for row in rows {
            println!("{}", row.human_line(ctx.colors));
        }
        if !rows.is_empty() {
            println!();
        }
        super::print_issues(issues, ctx.colors);
    }

    let mut layout = HumanLayout::new();
    layout.section("Safety Analysis");
    layout.kv("reports analyzed", &summary.analyzed.to_string());
    layout.kv("safe", &summary.safe.to_string());
    if !args.no_dampener {
        layout.kv("safe via dampener", &summary.dampened.to_string());
    }
    layout.kv("unsafe", &summary.unsafe_count.to_string());
    layout.kv("parse errors", &summary.parse_errors.to_string());
    let rate = summary
        .safety_rate()
        .map_or_else(|| "n/a".to_string(), |rate| format!("{rate:.1}%"));
    layout.kv("safety rate", &rate);
    output::emit_human(layout);
}
