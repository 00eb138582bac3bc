//! Terminal output formatting for scenario reports.

use colored::Colorize;

use crate::report::{BulkReport, HashMapReport, TinyReport};

/// Warning line emitted when a report carries no usable timings.
fn unavailable_line() -> String {
    format!(
        "  {}\n",
        "\u{26A0} Cycle counter unavailable - no samples survived"
            .yellow()
            .bold()
    )
}

/// Format a [`BulkReport`] for human-readable terminal output.
///
/// One line per alignment offset plus the average, in bytes/cycle and
/// MiB/sec at the 3 GHz reference clock.
pub fn format_bulk(report: &BulkReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} - {}-byte keys\n",
        "Bulk speed test".bold(),
        report.block_size
    ));

    if report.timing_unavailable() {
        output.push_str(&unavailable_line());
        return output;
    }

    for entry in &report.per_alignment {
        output.push_str(&format!(
            "Alignment {:2} - {:6.3} bytes/cycle - {:7.2} MiB/sec @ 3 ghz\n",
            entry.align, entry.bytes_per_cycle, entry.mib_per_sec
        ));
    }

    output.push_str(&format!(
        "Average      - {:6.3} bytes/cycle - {:7.2} MiB/sec @ 3 ghz\n",
        report.average_bytes_per_cycle, report.average_mib_per_sec
    ));

    output
}

/// Format a [`TinyReport`] for human-readable terminal output.
pub fn format_tiny(report: &TinyReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} - {:4}-byte keys - ",
        "Small key speed test".bold(),
        report.key_size
    ));

    if report.timing_unavailable() {
        output.push('\n');
        output.push_str(&unavailable_line());
        return output;
    }

    output.push_str(&format!("{:8.2} cycles/hash\n", report.cycles_per_hash));
    output
}

/// Format a [`HashMapReport`] for human-readable terminal output.
pub fn format_hashmap(report: &HashMapReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} - {} words\n",
        "Hashmap speed test".bold(),
        report.word_count
    ));

    if report.timing_unavailable() {
        output.push_str(&unavailable_line());
        return output;
    }

    output.push_str(&format!(
        "  Init:   {:8.3} cycles/op\n",
        report.init_cycles_per_op
    ));
    output.push_str(&format!(
        "  Lookup: {:8.3} cycles/op ({} trials)\n",
        report.lookup_cycles_per_op, report.trials
    ));

    output
}
