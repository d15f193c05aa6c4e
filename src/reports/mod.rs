use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyergo::config::BigramMultipliers;
use keyergo::error::KeResult;
use keyergo::layouts::{LayoutMapping, MAIN_BLOCK};
use keyergo::scorer::costs::EFFORT_TABLE;
use keyergo::scorer::{AnalysisDetails, AnalysisResult, BigramCount};
use std::path::Path;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_layout_grid(name: &str, layout: &LayoutMapping) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let positions: Vec<char> = MAIN_BLOCK.chars().collect();
    for chunk in positions.chunks(10) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|&p| Cell::new(layout.char_at(p)).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_metric_table(name: &str, result: &AnalysisResult) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for (field, value) in result.rounded().fields() {
        let cell = Cell::new(format!("{:.2}", value));
        let cell = match field {
            "effort" => cell.fg(Color::Cyan),
            "same_finger_bigrams_pct" => cell.fg(Color::Red),
            "roll_in_pct" | "roll_out_pct" => cell.fg(Color::Green),
            _ => cell,
        };
        table.add_row(vec![Cell::new(field), cell]);
    }
    align_right(&mut table, 1..=1);
    println!("\n{}", table);
}

pub fn print_comparison_report(results: &[(String, AnalysisResult)], sort_by: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Effort").fg(Color::Cyan),
        Cell::new("Dist"),
        Cell::new("Pnk"),
        Cell::new("SFB").fg(Color::Red),
        Cell::new("2SFB"),
        Cell::new("Skip"),
        Cell::new("Skp2"),
        Cell::new("Lat"),
        Cell::new("Scis"),
        Cell::new("PScis"),
        Cell::new("Jump"),
        Cell::new("Alt"),
        Cell::new("Redir"),
        Cell::new("RollI").fg(Color::Green),
        Cell::new("RollO").fg(Color::Green),
        Cell::new("C56"),
    ]);
    align_right(&mut table, 1..=16);

    for (name, r) in results {
        let r = r.rounded();
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.effort)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", r.distance)),
            Cell::new(format!("{:.2}", r.pinky_distance)),
            Cell::new(format!("{:.2}", r.same_finger_bigrams_pct)).fg(Color::Red),
            Cell::new(format!("{:.2}", r.two_row_sfb_pct)),
            Cell::new(format!("{:.2}", r.skip_bigrams_pct)),
            Cell::new(format!("{:.2}", r.skip_bigrams2_pct)),
            Cell::new(format!("{:.2}", r.lateral_stretch_pct)),
            Cell::new(format!("{:.2}", r.scissors_pct)),
            Cell::new(format!("{:.2}", r.pinky_scissors_pct)),
            Cell::new(format!("{:.2}", r.two_row_jumps_pct)),
            Cell::new(format!("{:.2}", r.trigram_alt_pct)),
            Cell::new(format!("{:.2}", r.tri_redirect_pct)),
            Cell::new(format!("{:.2}", r.roll_in_pct)).fg(Color::Green),
            Cell::new(format!("{:.2}", r.roll_out_pct)).fg(Color::Green),
            Cell::new(format!("{:.2}", r.col5_6_pct)),
        ]);
    }
    println!("\n{}", table);

    print_relative_report(results, sort_by);
}

/// Each layout against the best one on the sort metric.
fn print_relative_report(results: &[(String, AnalysisResult)], metric: &str) {
    let Some(best) = results.iter().min_by(|a, b| {
        let va = a.1.get(metric).unwrap_or(0.0);
        let vb = b.1.get(metric).unwrap_or(0.0);
        va.total_cmp(&vb)
    }) else {
        return;
    };
    let best_value = best.1.get(metric).unwrap_or(0.0);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Comparison vs Best ({})", best.0)).add_attribute(Attribute::Bold),
        Cell::new(metric),
        Cell::new("Delta"),
        Cell::new("% Diff"),
    ]);
    align_right(&mut table, 1..=3);

    for (name, r) in results {
        let value = r.get(metric).unwrap_or(0.0);
        let delta = value - best_value;
        let pct = if best_value > 0.0 {
            (delta / best_value) * 100.0
        } else {
            0.0
        };

        let name_cell = if name == &best.0 {
            Cell::new(name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(name).add_attribute(Attribute::Bold)
        };

        table.add_row(vec![
            name_cell,
            Cell::new(format!("{:.2}", value)),
            Cell::new(format!("{:.2}", delta)),
            Cell::new(format!("{:.1}%", pct)),
        ]);
    }
    println!("\n{}", table);
}

fn print_bigram_list(title: &str, entries: &[BigramCount], total: usize) {
    if entries.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("% Bigrams"),
    ]);
    align_right(&mut table, 1..=2);

    for e in entries {
        let pct = if total > 0 {
            e.count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(&e.keys),
            Cell::new(e.count),
            Cell::new(format!("{:.2}", pct)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_breakdowns(d: &AnalysisDetails) {
    print_bigram_list("Top SFBs", &d.top_sfbs, d.total_bigrams);
    print_bigram_list("Top Skips", &d.top_skips, d.total_bigrams);
    print_bigram_list("Top Skip-2s", &d.top_skips2, d.total_bigrams);
    print_bigram_list("Top Lateral", &d.top_lateral, d.total_bigrams);
    print_bigram_list("Top Scissors", &d.top_scissors, d.total_bigrams);
    print_bigram_list("Top Row Jumps", &d.top_two_row_jumps, d.total_bigrams);

    let mut fingers = new_table();
    fingers.set_header(vec!["Finger", "Presses", "Travel (mm)"]);
    align_right(&mut fingers, 1..=2);
    for (finger, count) in &d.finger_usage {
        let travel = d.finger_distance.get(finger).copied().unwrap_or(0.0);
        fingers.add_row(vec![
            Cell::new(finger),
            Cell::new(count),
            Cell::new(format!("{:.0}", travel)),
        ]);
    }
    println!("\n{}", fingers);

    let mut trigrams = new_table();
    trigrams.set_header(vec!["Trigram", "Count"]);
    align_right(&mut trigrams, 1..=1);
    for (category, count) in &d.trigram_counts {
        trigrams.add_row(vec![Cell::new(category), Cell::new(count)]);
    }
    println!("\n{}", trigrams);

    let mut surcharge = new_table();
    surcharge.set_header(vec!["Effort Surcharge", "Total"]);
    align_right(&mut surcharge, 1..=1);
    for (category, value) in &d.effort_surcharge {
        surcharge.add_row(vec![Cell::new(category), Cell::new(format!("{:.1}", value))]);
    }
    println!("\n{}", surcharge);
}

pub fn print_effort_table() {
    let mut table = new_table();
    table.set_header(vec!["Finger", "Number", "Top", "Home", "Bottom"]);
    align_right(&mut table, 1..=4);

    for (name, row) in ["Pinky", "Ring", "Middle", "Index"].iter().zip(EFFORT_TABLE.iter()) {
        let mut cells = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        cells.extend(row.iter().map(|v| Cell::new(format!("{:.1}", v))));
        table.add_row(cells);
    }
    println!("\n{}", table);
}

pub fn print_multiplier_table(w: &BigramMultipliers) {
    let mut table = new_table();
    table.set_header(vec!["Multiplier", "Factor"]);
    align_right(&mut table, 1..=1);

    for (name, value) in w.entries() {
        let cell = Cell::new(format!("{:.2}", value));
        let cell = if value > 1.0 {
            cell.fg(Color::Red)
        } else if value < 1.0 {
            cell.fg(Color::Green)
        } else {
            cell
        };
        table.add_row(vec![Cell::new(name), cell]);
    }
    println!("\n{}", table);
}

/// One row per layout, every metric rounded to two decimals.
pub fn write_csv<P: AsRef<Path>>(path: P, results: &[(String, AnalysisResult)]) -> KeResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["layout"];
    header.extend(AnalysisResult::FIELD_NAMES);
    writer.write_record(&header)?;

    for (name, r) in results {
        let mut record = vec![name.clone()];
        record.extend(r.rounded().values().iter().map(|v| format!("{:.2}", v)));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
