//! Output writer tests: JSON round-trips, chart files, markdown rendering.

use pretty_assertions::assert_eq;

use storm_impact::aggregator::{DamageBreakdown, DamageType};
use storm_impact::output::{
    generate_bar_chart, generate_grouped_bar_chart, generate_markdown_report, read_summary,
    write_summary, write_svg, CategoryTotal, ChartConfig, ChartFiles, ImpactSummary,
};

fn sample_summary() -> ImpactSummary {
    ImpactSummary {
        version: "1.0.0".to_string(),
        dataset: "StormData.csv.bz2".to_string(),
        records_loaded: 902297,
        records_retained: 254632,
        top_fatalities: vec![
            CategoryTotal {
                event_type: "TORNADO".to_string(),
                total: 5633,
            },
            CategoryTotal {
                event_type: "EXCESSIVE HEAT".to_string(),
                total: 1903,
            },
        ],
        top_injuries: vec![CategoryTotal {
            event_type: "TORNADO".to_string(),
            total: 91346,
        }],
        economic_damage: vec![
            DamageBreakdown {
                event_type: "FLOOD".to_string(),
                damage_type: DamageType::Property,
                amount_billions: 144.66,
            },
            DamageBreakdown {
                event_type: "FLOOD".to_string(),
                damage_type: DamageType::Crop,
                amount_billions: 5.66,
            },
        ],
        generated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn test_summary_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    let summary = sample_summary();

    write_summary(&summary, &path).unwrap();
    let loaded = read_summary(&path).unwrap();

    assert_eq!(loaded.version, summary.version);
    assert_eq!(loaded.records_loaded, summary.records_loaded);
    assert_eq!(loaded.top_fatalities, summary.top_fatalities);
    assert_eq!(loaded.top_injuries, summary.top_injuries);
    assert_eq!(loaded.economic_damage, summary.economic_damage);
}

#[test]
fn test_damage_type_serializes_as_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");

    write_summary(&sample_summary(), &path).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();

    assert!(raw.contains("\"Property\""));
    assert!(raw.contains("\"Crop\""));
}

#[test]
fn test_chart_files_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let summary = sample_summary();

    let rows: Vec<(String, f64)> = summary
        .top_fatalities
        .iter()
        .map(|r| (r.event_type.clone(), r.total as f64))
        .collect();
    let svg = generate_bar_chart(
        &rows,
        &ChartConfig::new("Fatalities by Event Type", "Fatalities"),
    )
    .unwrap();

    let path = dir.path().join("fatalities.svg");
    write_svg(&svg, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.contains("TORNADO"));
}

#[test]
fn test_grouped_chart_renders_both_series() {
    let rows = vec![("FLOOD".to_string(), 144.66, 5.66)];
    let svg = generate_grouped_bar_chart(
        &rows,
        ("Property", "Crop"),
        &ChartConfig::new("Economic Damage by Event Type", "Billions USD").with_precision(2),
    )
    .unwrap();

    assert!(svg.contains("FLOOD"));
    assert!(svg.contains("144.66"));
    assert!(svg.contains("5.66"));
    assert!(svg.contains("Property"));
    assert!(svg.contains("Crop"));
}

#[test]
fn test_markdown_report_tables_match_summary() {
    let doc = generate_markdown_report(&sample_summary(), &ChartFiles::default());

    assert!(doc.contains("| TORNADO | 5633 |"));
    assert!(doc.contains("| EXCESSIVE HEAT | 1903 |"));
    assert!(doc.contains("| TORNADO | 91346 |"));
    assert!(doc.contains("| FLOOD | Property | 144.66 |"));
    assert!(doc.contains("| FLOOD | Crop | 5.66 |"));
    assert!(doc.contains("![Economic damage by event type](economic_damage.svg)"));
}
