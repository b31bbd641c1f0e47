//! Markdown report generation.
//!
//! Renders the impact summary as a prose report with embedded charts, plus a
//! compact text summary for the console.

use crate::output::schema::ImpactSummary;

/// File names of the generated charts, referenced from the markdown
#[derive(Debug, Clone)]
pub struct ChartFiles {
    pub fatalities: String,
    pub injuries: String,
    pub economic: String,
}

impl Default for ChartFiles {
    fn default() -> Self {
        Self {
            fatalities: "fatalities.svg".to_string(),
            injuries: "injuries.svg".to_string(),
            economic: "economic_damage.svg".to_string(),
        }
    }
}

/// Render the full markdown report
///
/// **Public** - the document handed to whatever renders or publishes it
pub fn generate_markdown_report(summary: &ImpactSummary, charts: &ChartFiles) -> String {
    let mut doc = String::new();

    doc.push_str("# Health and Economic Impact of Severe Weather Events\n\n");

    doc.push_str("## Synopsis\n\n");
    doc.push_str(&format!(
        "This report analyzes the NOAA storm events database to identify the event \
categories most harmful to population health and those with the greatest economic \
consequences. Of {} recorded events, {} carried a measurable impact (at least one \
fatality, injury, or a positive property or crop damage amount) and enter the \
analysis. ",
        summary.records_loaded, summary.records_retained
    ));

    if let Some(top) = summary.top_fatalities.first() {
        doc.push_str(&format!(
            "**{}** events caused the most fatalities ({}), ",
            top.event_type, top.total
        ));
    }
    if let Some(top) = summary.top_injuries.first() {
        doc.push_str(&format!(
            "and also lead the injury ranking with {} injuries. ",
            top.total
        ));
    }
    if let Some((category, total)) = leading_economic_category(summary) {
        doc.push_str(&format!(
            "**{}** events caused the greatest economic damage, roughly ${:.2} billion \
in combined property and crop losses.",
            category, total
        ));
    }
    doc.push_str("\n\n");

    doc.push_str("## Data Processing\n\n");
    doc.push_str(&format!(
        "The dataset was read from `{}`. Events with no fatalities, no injuries and \
no damage were dropped, as was the unknown event marker. Damage amounts were \
rescaled using the exponent codes recorded alongside them (H = hundreds, \
K = thousands, M = millions, B = billions; bare digits as powers of ten; anything \
else is taken at face value). Event category labels are used exactly as recorded — \
near-duplicate spellings are not merged, since that would alter the rankings.\n\n",
        summary.dataset
    ));

    doc.push_str("## Results\n\n");

    doc.push_str("### Fatalities\n\n");
    doc.push_str(&format!("![Fatalities by event type]({})\n\n", charts.fatalities));
    doc.push_str("| Event Type | Fatalities |\n|---|---:|\n");
    for row in &summary.top_fatalities {
        doc.push_str(&format!("| {} | {} |\n", row.event_type, row.total));
    }
    doc.push('\n');

    doc.push_str("### Injuries\n\n");
    doc.push_str(&format!("![Injuries by event type]({})\n\n", charts.injuries));
    doc.push_str("| Event Type | Injuries |\n|---|---:|\n");
    for row in &summary.top_injuries {
        doc.push_str(&format!("| {} | {} |\n", row.event_type, row.total));
    }
    doc.push('\n');

    doc.push_str("### Economic Damage\n\n");
    doc.push_str(&format!(
        "![Economic damage by event type]({})\n\n",
        charts.economic
    ));
    doc.push_str("| Event Type | Damage Type | Billions USD |\n|---|---|---:|\n");
    for row in &summary.economic_damage {
        doc.push_str(&format!(
            "| {} | {} | {:.2} |\n",
            row.event_type, row.damage_type, row.amount_billions
        ));
    }
    doc.push('\n');

    doc.push_str(&format!(
        "---\n\nGenerated at {} from schema version {}.\n",
        summary.generated_at, summary.version
    ));

    doc
}

/// Render a compact console summary
///
/// **Public** - printed by the report command under `--summary`
pub fn generate_text_summary(summary: &ImpactSummary, max_lines: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Records: {} loaded, {} retained",
        summary.records_loaded, summary.records_retained
    ));

    lines.push(String::new());
    lines.push(format!("{:<42} {:>12}", "TOP FATALITIES", "COUNT"));
    for row in summary.top_fatalities.iter().take(max_lines) {
        lines.push(format!("{:<42} {:>12}", row.event_type, row.total));
    }

    lines.push(String::new());
    lines.push(format!("{:<42} {:>12}", "TOP INJURIES", "COUNT"));
    for row in summary.top_injuries.iter().take(max_lines) {
        lines.push(format!("{:<42} {:>12}", row.event_type, row.total));
    }

    lines.push(String::new());
    lines.push(format!("{:<42} {:>10} {:>12}", "ECONOMIC DAMAGE", "TYPE", "$ BILLIONS"));
    for row in summary.economic_damage.iter().take(max_lines * 2) {
        lines.push(format!(
            "{:<42} {:>10} {:>12.2}",
            row.event_type,
            row.damage_type.to_string(),
            row.amount_billions
        ));
    }

    lines.join("\n")
}

/// Category with the largest combined damage, reconstructed from the
/// long-format rows (property row + its paired crop row)
fn leading_economic_category(summary: &ImpactSummary) -> Option<(String, f64)> {
    summary
        .economic_damage
        .chunks(2)
        .map(|pair| {
            let total: f64 = pair.iter().map(|r| r.amount_billions).sum();
            (pair[0].event_type.clone(), total)
        })
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
