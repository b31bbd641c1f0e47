//! End-to-end pipeline tests: CSV on disk through to the written report.

use std::fs;
use std::path::PathBuf;

use storm_impact::aggregator::{aggregate_by_event_type, top_by};
use storm_impact::commands::{execute_report, ReportArgs};
use storm_impact::dataset::read_records;
use storm_impact::output::read_summary;
use storm_impact::transform::{retain_records, scale_damages};

const HEADER: &str = "STATE,EVTYPE,FATALITIES,INJURIES,PROPDMG,PROPDMGEXP,CROPDMG,CROPDMGEXP\n";

fn write_csv(dir: &tempfile::TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("storm.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_tornado_aggregation_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        &[
            "AL,TORNADO,5,10,1.0,K,0,",
            "TX,TORNADO,3,2,2.0,M,1.0,K",
        ],
    );

    let records = read_records(&path).unwrap();
    let retained = retain_records(&records);
    let scaled = scale_damages(&retained);
    let summaries = aggregate_by_event_type(&scaled);

    assert_eq!(summaries.len(), 1);
    let tornado = &summaries[0];
    assert_eq!(tornado.event_type, "TORNADO");
    assert_eq!(tornado.fatalities, 8);
    assert_eq!(tornado.injuries, 12);
    assert_eq!(tornado.property_damage, 2_001_000.0);
    assert_eq!(tornado.crop_damage, 1_000.0);
}

#[test]
fn test_zero_impact_and_unknown_rows_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        &[
            "AL,TORNADO,1,0,0,,0,",
            "AL,DENSE FOG,0,0,0,,0,",
            "AL,?,2,0,0,,0,",
        ],
    );

    let records = read_records(&path).unwrap();
    let retained = retain_records(&records);

    assert_eq!(records.len(), 3);
    assert_eq!(retained.len(), 1);
    assert_eq!(retained[0].event_type, "TORNADO");
}

#[test]
fn test_aggregation_is_order_independent() {
    let dir = tempfile::tempdir().unwrap();
    let rows = [
        "AL,TORNADO,5,10,1.0,K,0,",
        "TX,HAIL,0,1,2.5,M,1.0,K",
        "TX,TORNADO,3,2,2.0,M,1.0,K",
        "FL,FLOOD,2,0,0.5,B,0,",
    ];
    let mut reversed: Vec<&str> = rows.to_vec();
    reversed.reverse();

    let forward_path = write_csv(&dir, &rows);
    let records = read_records(&forward_path).unwrap();
    let forward = aggregate_by_event_type(&scale_damages(&retain_records(&records)));

    let reversed_path = dir.path().join("reversed.csv");
    let mut content = String::from(HEADER);
    for row in &reversed {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&reversed_path, content).unwrap();
    let records = read_records(&reversed_path).unwrap();
    let backward = aggregate_by_event_type(&scale_damages(&retain_records(&records)));

    assert_eq!(forward, backward);
}

#[test]
fn test_boundary_tie_survives_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    // HEAT and LIGHTNING tie on fatalities at the rank-2 boundary
    let path = write_csv(
        &dir,
        &[
            "AL,TORNADO,10,0,0,,0,",
            "AL,HEAT,4,0,0,,0,",
            "AL,LIGHTNING,4,0,0,,0,",
            "AL,AVALANCHE,1,0,0,,0,",
        ],
    );

    let records = read_records(&path).unwrap();
    let summaries = aggregate_by_event_type(&scale_damages(&retain_records(&records)));
    let top = top_by(&summaries, 2, |s| s.fatalities);

    assert_eq!(top.len(), 3);
    assert_eq!(top[0].event_type, "TORNADO");
    assert_eq!(top[1].fatalities, 4);
    assert_eq!(top[2].fatalities, 4);
}

#[test]
fn test_execute_report_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        &[
            "AL,TORNADO,5,10,1.0,K,0,",
            "TX,TORNADO,3,2,2.0,M,1.0,K",
            "FL,FLOOD,2,0,0.5,B,0.1,B",
            "CA,HEAT,7,30,0,,0,",
        ],
    );
    let output_dir = dir.path().join("report");

    let args = ReportArgs {
        input: path,
        data_url: "https://example.com/storm.csv.bz2".to_string(),
        output_dir: output_dir.clone(),
        top: 15,
        print_summary: false,
    };

    execute_report(args).unwrap();

    assert!(output_dir.join("summary.json").exists());
    assert!(output_dir.join("fatalities.svg").exists());
    assert!(output_dir.join("injuries.svg").exists());
    assert!(output_dir.join("economic_damage.svg").exists());
    assert!(output_dir.join("report.md").exists());

    let summary = read_summary(output_dir.join("summary.json")).unwrap();
    assert_eq!(summary.records_loaded, 4);
    assert_eq!(summary.records_retained, 4);

    // TORNADO leads fatalities, HEAT leads injuries
    assert_eq!(summary.top_fatalities[0].event_type, "TORNADO");
    assert_eq!(summary.top_fatalities[0].total, 8);
    assert_eq!(summary.top_injuries[0].event_type, "HEAT");
    assert_eq!(summary.top_injuries[0].total, 30);
    assert_eq!(summary.top_injuries[1].event_type, "TORNADO");
    assert_eq!(summary.top_injuries[1].total, 12);

    // FLOOD leads the economic ranking: 0.5B property + 0.1B crop
    assert_eq!(summary.economic_damage[0].event_type, "FLOOD");
    assert_eq!(summary.economic_damage[0].amount_billions, 0.5);
    assert_eq!(summary.economic_damage[1].amount_billions, 0.1);

    let markdown = fs::read_to_string(output_dir.join("report.md")).unwrap();
    assert!(markdown.contains("## Synopsis"));
    assert!(markdown.contains("TORNADO"));
}

#[test]
fn test_scale_codes_in_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    // Digit, sign, and unrecognized codes all resolve without error
    let path = write_csv(
        &dir,
        &[
            "AL,HAIL,0,0,2.0,3,0,",
            "AL,HAIL,0,0,4.0,+,0,",
            "AL,HAIL,0,0,1.0,Z,3.0,?",
        ],
    );

    let records = read_records(&path).unwrap();
    let summaries = aggregate_by_event_type(&scale_damages(&retain_records(&records)));

    assert_eq!(summaries.len(), 1);
    // 2.0 * 10^3 + 4.0 * 1 + 1.0 * 1
    assert_eq!(summaries[0].property_damage, 2_005.0);
    // 3.0 * 1 (the `?` crop code falls through to the default multiplier)
    assert_eq!(summaries[0].crop_damage, 3.0);
}
