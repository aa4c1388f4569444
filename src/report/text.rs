use crate::core::aggregator::{SummaryTable, TOTAL_LABEL};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color as TableColor, ContentArrangement, Table};

/// Render the summary as a terminal table. Category rows (single-letter
/// labels) and the total are highlighted.
pub fn render_summary_table(summary: &SummaryTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Group")
        .add_attribute(Attribute::Bold)
        .fg(TableColor::Cyan)];
    header.extend(summary.species.iter().map(|s| {
        Cell::new(s)
            .add_attribute(Attribute::Bold)
            .fg(TableColor::Cyan)
    }));
    table.set_header(header);

    for row in &summary.rows {
        let is_total = row.label == TOTAL_LABEL;
        let is_category = row.label.chars().count() == 1;

        let mut label = Cell::new(&row.label);
        if is_total {
            label = label.add_attribute(Attribute::Bold).fg(TableColor::Green);
        } else if is_category {
            label = label.add_attribute(Attribute::Bold);
        }

        let mut cells = vec![label];
        cells.extend(row.counts.iter().map(|n| {
            let cell = Cell::new(n).set_alignment(CellAlignment::Right);
            if *n == 0 {
                cell.fg(TableColor::DarkGrey)
            } else {
                cell
            }
        }));
        table.add_row(cells);
    }

    table
}

pub fn generate_text_report(summary: &SummaryTable) -> String {
    render_summary_table(summary).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_contains_rows() {
        let mut summary = SummaryTable::new(vec!["Aspergillus".to_string()]);
        summary.push("Total", vec![12]);
        summary.push("S", vec![12]);
        summary.push("S08", vec![12]);

        let text = generate_text_report(&summary);
        assert!(text.contains("Aspergillus"));
        assert!(text.contains("Total"));
        assert!(text.contains("S08"));
        assert!(text.contains("12"));
    }
}
