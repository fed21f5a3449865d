use std::fs;

use wot_assertions::record::read_records;
use wot_assertions::{AssertionPaths, MANUAL_FLAG, Report, run};

const ASSERTIONS: &str = include_str!("fixtures/assertions.csv");
const PRE_IMPLEMENTED: &str = include_str!("fixtures/pre-implemented.csv");

fn setup() -> (tempfile::TempDir, AssertionPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = AssertionPaths::under(dir.path());
    fs::create_dir_all(paths.pre_implemented.parent().unwrap()).unwrap();
    fs::write(&paths.assertions, ASSERTIONS).unwrap();
    fs::write(&paths.pre_implemented, PRE_IMPLEMENTED).unwrap();
    (dir, paths)
}

fn ids(csv: &str) -> Vec<String> {
    read_records(csv.as_bytes())
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn run_writes_all_reports() {
    let (dir, paths) = setup();
    let report = run(&paths, MANUAL_FLAG).expect("run should succeed");

    assert_eq!(report.assertions_size, 4);
    assert_eq!(report.implemented_size, 1);
    assert_eq!(report.manual_size, 3);
    assert_eq!(report.old_size, 1);
    assert_eq!(report.needs_review_size, 2);

    let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();

    assert_eq!(ids(&read("implemented.csv")), ["td-context"]);
    assert_eq!(
        ids(&read("manual.csv")),
        ["td-title", "td-security", "td-forms-href"]
    );
    assert_eq!(
        ids(&read("needsReview.csv")),
        ["td-security", "td-forms-href"]
    );
    assert_eq!(ids(&read("old.csv")), ["td-removed"]);

    let implemented = read("implemented.csv");
    assert!(implemented.starts_with("ID,Status,Comment,Assertion\n"));
    assert!(implemented.contains("td-context,null,,"));

    let written: Report = serde_json::from_str(&read("report.json")).unwrap();
    assert_eq!(written, report);
    assert!(written.generation_date.ends_with(" GMT"));
}

#[test]
fn missing_input_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let paths = AssertionPaths::under(dir.path());
    let err = run(&paths, MANUAL_FLAG).unwrap_err();
    assert!(err.to_string().contains("assertions.csv"), "{err}");
}

#[test]
fn default_layout() {
    let paths = AssertionPaths::default();
    assert_eq!(paths.assertions, std::path::Path::new("assertions-csv/assertions.csv"));
    assert_eq!(
        paths.pre_implemented,
        std::path::Path::new("assertions-csv/manual-generation-inputs/pre-implemented.csv")
    );
    assert_eq!(paths.output_dir, std::path::Path::new("assertions-csv"));
}
