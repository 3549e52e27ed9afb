use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::{CodePolicy, ProfileSource, parse_roster};
use crate::model::thresholds::InsightThresholds;
use crate::pipeline::stage1_compose::run_stage1;
use crate::pipeline::stage2_baseline::run_stage2;
use crate::pipeline::stage3_rank::run_stage3;
use crate::pipeline::stage4_insights::{InsightView, extract_insight, run_stage4};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_talentmatch_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const ROSTER: &str = r#"{
  "employees": [
    {
      "employee_id": "B1",
      "fullname": "Bench Mark",
      "position": "Lead Analyst",
      "assessment": {
        "disc": "D",
        "mbti": "ENTJ",
        "cognitive": { "gtq": 90, "iq": 98 },
        "scales": { "L": 8, "P": 7 },
        "themes": [ { "theme": "Command", "rank": 1 }, { "theme": "Strategic", "rank": 2 } ]
      }
    },
    {
      "employee_id": "C1",
      "fullname": "Close\tMatch",
      "department": "Analytics",
      "latest_performance": 4,
      "assessment": {
        "disc": "D",
        "mbti": "ENTP",
        "cognitive": { "gtq": 85, "iq": 93 },
        "scales": { "L": 7 },
        "themes": [ { "theme": "Command", "rank": 1 } ]
      }
    },
    {
      "employee_id": "C2",
      "fullname": "Far Away",
      "assessment": { "disc": "S", "mbti": "ISFP" }
    },
    { "employee_id": "C3", "fullname": "Unassessed" }
  ]
}"#;

fn run_pipeline(out_dir: &std::path::Path) {
    let roster = parse_roster(ROSTER, CodePolicy::Strict).unwrap();
    let records = roster.fetch_all().unwrap();
    let stage1 = run_stage1(records);
    let benchmarks = vec!["B1".to_string()];
    let baseline = run_stage2(&roster, &benchmarks).unwrap();
    let ranking = run_stage3(&baseline, &stage1.composed);
    let thresholds = InsightThresholds::default_v1();
    let list = run_stage4(&ranking, records, &baseline, InsightView::List, &thresholds);
    let detail = ranking.top().map(|top| {
        let profile = roster
            .get(&top.employee_id)
            .and_then(|r| r.assessment.as_ref());
        extract_insight(top, profile, &baseline, InsightView::Detail, &thresholds)
    });

    let input = Stage5Input {
        records,
        benchmark_requested: &benchmarks,
        baseline: &baseline,
        ranking: &ranking,
        list_insights: &list,
        detail_insight: detail.as_ref(),
        job_profile: None,
    };
    write_reports(&input, out_dir).unwrap();
}

#[test]
fn test_ranking_tsv_layout() {
    let dir = make_temp_dir();
    run_pipeline(&dir);

    let tsv = fs::read_to_string(dir.join(RANKING_FILE)).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    // Header plus three assessed employees; the unassessed one is excluded.
    assert_eq!(lines.len(), 4);

    let header: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(header[0], "rank");
    assert_eq!(header[8], "match_rate");
    assert_eq!(header[19], "top_themes");
    assert_eq!(header.len(), 9 + 8 + 6);

    let first: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(first.len(), header.len());
    assert_eq!(first[0], "1");
    assert_eq!(first[1], "B1");
    assert_eq!(first[8], "100.00");
    assert_eq!(first[19], "Command, Strategic");
    assert_eq!(first[20], "None");
    assert_eq!(first[21], "None");

    let second: Vec<&str> = lines[2].split('\t').collect();
    assert_eq!(second[1], "C1");
    assert_eq!(second[2], "Close Match");
    assert_eq!(second[4], "Analytics");
    assert_eq!(second[22], "4");
    assert_eq!(lines[3].split('\t').nth(1), Some("C2"));
}

#[test]
fn test_summary_json_contents() {
    let dir = make_temp_dir();
    run_pipeline(&dir);

    let json = fs::read_to_string(dir.join(SUMMARY_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["n_population"], 4);
    assert_eq!(value["n_ranked"], 3);
    assert_eq!(value["excluded"][0], "C3");
    assert_eq!(value["benchmark_requested"][0], "B1");
    assert_eq!(value["baseline"]["contributors"], 1);
    assert_eq!(value["match_rate"]["max"], 100.0);
    assert!(value["job_profile"].is_null());
}

#[test]
fn test_report_text_describes_top_candidate() {
    let dir = make_temp_dir();
    run_pipeline(&dir);

    let text = fs::read_to_string(dir.join(REPORT_FILE)).unwrap();
    assert!(text.contains("Detailed analysis: Bench Mark"));
    assert!(text.contains("Overall match rate: 100.0%"));
    assert!(text.contains("Position: Lead Analyst"));
    assert!(text.contains("Recommendation: STRONG MATCH"));
}

#[test]
fn test_empty_ranking_still_writes_reports() {
    let dir = make_temp_dir();
    let roster = parse_roster(ROSTER, CodePolicy::Strict).unwrap();
    let records = roster.fetch_all().unwrap();
    let benchmarks = vec!["B1".to_string()];
    let baseline = run_stage2(&roster, &benchmarks).unwrap();
    let ranking = Ranking::default();

    let input = Stage5Input {
        records,
        benchmark_requested: &benchmarks,
        baseline: &baseline,
        ranking: &ranking,
        list_insights: &[],
        detail_insight: None,
        job_profile: None,
    };
    write_reports(&input, &dir).unwrap();

    let tsv = fs::read_to_string(dir.join(RANKING_FILE)).unwrap();
    assert_eq!(tsv.lines().count(), 1);
    let text = fs::read_to_string(dir.join(REPORT_FILE)).unwrap();
    assert!(text.contains("No candidates ranked against the benchmark."));
}

#[test]
fn test_format_helpers() {
    assert_eq!(sanitize("a\tb\nc"), "a b c");
    assert_eq!(format_scored(std::iter::empty(), "No dimension data"), "No dimension data");
    assert_eq!(
        format_scored(vec![("GTQ".to_string(), 0.9)].into_iter(), ""),
        "GTQ(0.90)"
    );
}
