use comfy_table::Cell;

use rollcall::RotateOutcome;
use rollcall::core::{ArchiveInfo, MonthlySummary, Status};

use crate::app::{DayReport, MarkResult, RotationReport};
use crate::output::format::{
    create_styled_table, format_size, header_cell, mark_label, right_cell, status_cell,
};

pub(crate) fn print_mark_results(results: &[MarkResult]) {
    for result in results {
        println!("{}: {}", result.name, mark_label(&result.outcome));
    }
}

pub(crate) fn print_rotation(report: &RotationReport) {
    let archive = report.archive.display();
    match report.outcome {
        RotateOutcome::Moved => println!("Archived {} -> {archive}", report.date),
        RotateOutcome::Copied { bytes } => {
            println!("Archived {} -> {archive} (copied {bytes} bytes)", report.date)
        }
        RotateOutcome::NothingToRotate => {
            println!("No marks for {}; created empty archive {archive}", report.date)
        }
    }
}

pub(crate) fn print_day_status(report: &DayReport, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Employee", use_color),
        header_cell("Status", use_color),
    ]);
    for row in &report.rows {
        table.add_row(vec![Cell::new(&row.name), status_cell(row.status, use_color)]);
    }

    let present = report
        .rows
        .iter()
        .filter(|r| r.status == Status::Present)
        .count();

    println!("\n  Attendance for {}\n", report.date);
    println!("{table}");
    match &report.source {
        Some(path) => println!(
            "\n  {present}/{} present | {}\n",
            report.rows.len(),
            path.display()
        ),
        None => println!("\n  No attendance file for {}\n", report.date),
    }
}

pub(crate) fn print_monthly_summary(summary: &MonthlySummary, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Employee", use_color),
        header_cell("Present Days", use_color),
        header_cell("Absent Days", use_color),
    ]);
    for employee in &summary.employees {
        table.add_row(vec![
            Cell::new(&employee.name),
            right_cell(&employee.present_days.to_string()),
            right_cell(&employee.absent_days.to_string()),
        ]);
    }

    println!("\n  Monthly Attendance Report: {}\n", summary.month.label());
    println!("{table}");
    println!(
        "\n  {} of {} days have attendance files\n",
        summary.days_with_records,
        summary.month.num_days()
    );
}

pub(crate) fn print_archives(archives: &[ArchiveInfo], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Records", use_color),
        header_cell("Size", use_color),
        header_cell("Path", use_color),
    ]);
    for archive in archives {
        table.add_row(vec![
            Cell::new(archive.date),
            right_cell(&archive.records.to_string()),
            right_cell(&format_size(archive.size)),
            Cell::new(archive.path.display()),
        ]);
    }
    println!("{table}");
}
