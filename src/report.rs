//! Terminal and CSV reporting.
//!
//! Handles formatted output for the `toolbox` binary.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use terminal_size::{terminal_size, Width};

use crate::error::Result;
use crate::registry::{Exercise, ExerciseRegistry};
use crate::utils::timer::VariantResult;
use crate::utils::REFERENCE_VARIANT;

/// Join values with single spaces, the course's answer-line format.
pub fn format_line<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Whether a variant is a C port
fn is_c_variant(name: &str) -> bool {
    name.starts_with("c-")
}

/// Sorting priority: naive (0), Rust (1), C (2)
fn variant_sort_key(result: &VariantResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == REFERENCE_VARIANT {
        (0, name)
    } else if is_c_variant(&name) {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: naive first, then Rust, then C
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print exercise info box
pub fn print_exercise_box(exercise: &dyn Exercise) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Exercise: {}", exercise.name()),
        format!("Category: {}", exercise.category()),
        exercise.description().to_string(),
    ];
    let variants_line = format!("Variants: {}", exercise.available_variants().join(", "));

    let content_width = lines
        .iter()
        .chain(std::iter::once(&variants_line))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in &lines {
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&variants_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single input size.
///
/// Speedup is relative to the first row, which is `naive` after sorting.
pub fn print_results_table(results: &[VariantResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let fixed_width = 62;
    let variant_col_width = get_term_width().saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 54 + 5;
    let baseline_nanos = baseline.avg_time.as_nanos().max(1) as f64;

    println!("  Size: {} ({} runs)", size, baseline.runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>8} {:>8}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_nanos = result.avg_time.as_nanos() as f64;
        let speedup = baseline_nanos / avg_nanos.max(1.0);
        let cv = if avg_nanos > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_nanos
        } else {
            0.0
        };

        let display_name = match (is_c_variant(&result.name), crate::utils::C_COMPILER_NAME) {
            (true, Some(compiler)) => format!("{} ({})", result.name, compiler),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>7.2}x {:>7.2}%",
            truncate(&display_name, variant_col_width),
            format!("{:?}", result.avg_time),
            format!("{:?}", result.min_time),
            format!("{:?}", result.max_time),
            speedup,
            cv * 100.0,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header(title: &str) {
    let term_width = get_term_width().min(80);
    let title = format!(" {} ", title);
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available exercises
pub fn print_exercise_list(registry: &ExerciseRegistry) {
    println!("Available exercises:");
    println!();
    for exercise in registry.all() {
        println!(
            "  {:<22} [{}] - {}",
            exercise.name(),
            exercise.category(),
            exercise.description()
        );
        println!("  {:<22} variants: {}", "", exercise.available_variants().join(", "));
    }
}

/// One CSV row of benchmark output
#[derive(Clone, Debug)]
pub struct CsvRow {
    pub exercise: &'static str,
    pub size: usize,
    pub result: VariantResult,
}

/// Export benchmark averages to a CSV file
pub fn export_csv(path: &Path, rows: &[CsvRow]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_csv(&mut file, rows)?;
    Ok(())
}

/// Write benchmark averages as CSV
pub fn write_csv<W: Write>(out: &mut W, rows: &[CsvRow]) -> std::io::Result<()> {
    writeln!(out, "exercise,variant,compiler,input_size,runs,avg_time_ns,median_time_ns,result")?;

    for row in rows {
        let compiler = if is_c_variant(&row.result.name) {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            row.exercise,
            row.result.name,
            compiler,
            row.size,
            row.result.runs,
            row.result.avg_time.as_nanos(),
            row.result.median_time.as_nanos(),
            row.result.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
