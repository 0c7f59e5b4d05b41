use serde_json::json;

use rollcall::core::{ArchiveInfo, MonthlySummary};
use rollcall::{MarkOutcome, RotateOutcome};

use crate::app::{DayReport, MarkResult, RotationReport};
use crate::output::format::to_pretty_json;

pub(crate) fn output_mark_json(results: &[MarkResult]) -> String {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|r| match &r.outcome {
            MarkOutcome::Recorded(record) => json!({
                "name": r.name,
                "status": "marked",
                "timestamp": record.formatted_timestamp(),
            }),
            MarkOutcome::AlreadyMarked => json!({
                "name": r.name,
                "status": "already_marked",
                "timestamp": null,
            }),
        })
        .collect();
    to_pretty_json(&json!(output))
}

pub(crate) fn output_rotation_json(report: &RotationReport) -> String {
    let (outcome, bytes) = match report.outcome {
        RotateOutcome::Moved => ("moved", None),
        RotateOutcome::Copied { bytes } => ("copied", Some(bytes)),
        RotateOutcome::NothingToRotate => ("nothing_to_rotate", None),
    };
    to_pretty_json(&json!({
        "date": report.date.to_string(),
        "archive": report.archive.display().to_string(),
        "outcome": outcome,
        "bytes_copied": bytes,
    }))
}

pub(crate) fn output_day_status_json(report: &DayReport) -> String {
    let attendance: Vec<serde_json::Value> = report
        .rows
        .iter()
        .map(|row| json!({ "name": row.name, "status": row.status.as_str() }))
        .collect();
    to_pretty_json(&json!({
        "date": report.date.to_string(),
        "source": report.source.as_ref().map(|p| p.display().to_string()),
        "attendance": attendance,
    }))
}

pub(crate) fn output_monthly_json(summary: &MonthlySummary) -> String {
    let employees: Vec<serde_json::Value> = summary
        .employees
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "present_days": e.present_days,
                "absent_days": e.absent_days,
            })
        })
        .collect();
    to_pretty_json(&json!({
        "month": summary.month.label(),
        "days": summary.month.num_days(),
        "days_with_records": summary.days_with_records,
        "employees": employees,
    }))
}

pub(crate) fn output_archives_json(archives: &[ArchiveInfo]) -> String {
    let output: Vec<serde_json::Value> = archives
        .iter()
        .map(|a| {
            json!({
                "date": a.date.to_string(),
                "path": a.path.display().to_string(),
                "size": a.size,
                "records": a.records,
            })
        })
        .collect();
    to_pretty_json(&json!(output))
}
