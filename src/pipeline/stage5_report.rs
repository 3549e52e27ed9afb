use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::input::EmployeeRecord;
use crate::job_profile::JobProfile;
use crate::model::dimensions::Dimension;
use crate::model::vector::{BaselineVector, Ranking};
use crate::pipeline::stage4_insights::{CandidateInsight, DimensionComparison};
use crate::report::json::render_summary_json;
use crate::report::text::render_detail_text;
use crate::report::{DetailContext, build_summary, format_f64_2};

pub const RANKING_FILE: &str = "ranking.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub records: &'a [EmployeeRecord],
    pub benchmark_requested: &'a [String],
    pub baseline: &'a BaselineVector,
    pub ranking: &'a Ranking,
    /// List-view insights, one per ranked candidate in ranking order.
    pub list_insights: &'a [CandidateInsight],
    /// Detail-view insight of the top-ranked candidate.
    pub detail_insight: Option<&'a CandidateInsight>,
    pub job_profile: Option<&'a JobProfile>,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let by_id: HashMap<&str, &EmployeeRecord> = input
        .records
        .iter()
        .map(|r| (r.employee_id.as_str(), r))
        .collect();

    write_ranking_tsv(input, &by_id, &out_dir.join(RANKING_FILE))?;

    let summary = build_summary(
        input.benchmark_requested,
        input.baseline,
        input.ranking,
        input.records.len(),
        input.job_profile.cloned(),
    );
    let json = render_summary_json(&summary).map_err(io::Error::other)?;
    fs::write(out_dir.join(SUMMARY_FILE), json)?;

    let detail = input.detail_insight.map(|insight| {
        let record = by_id.get(insight.employee_id.as_str());
        DetailContext {
            fullname: record.map(|r| r.fullname.clone()).unwrap_or_default(),
            position: record.and_then(|r| r.org.position.clone()),
            department: record.and_then(|r| r.org.department.clone()),
            latest_performance: record.and_then(|r| r.latest_performance),
            insight: insight.clone(),
        }
    });
    fs::write(out_dir.join(REPORT_FILE), render_detail_text(detail.as_ref()))?;

    info!(out_dir = %out_dir.display(), ranked = input.ranking.len(), "reports written");
    Ok(())
}

fn write_ranking_tsv(
    input: &Stage5Input<'_>,
    by_id: &HashMap<&str, &EmployeeRecord>,
    path: &Path,
) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec![
        "rank",
        "employee_id",
        "fullname",
        "position",
        "department",
        "division",
        "directorate",
        "grade",
        "match_rate",
    ];
    header.extend(Dimension::ALL.iter().map(|d| d.key()));
    header.extend([
        "top_dimensions",
        "top_indicators",
        "top_themes",
        "strengths",
        "gaps",
        "latest_performance",
    ]);
    writeln!(w, "{}", header.join("\t"))?;

    for (i, (rec, insight)) in input
        .ranking
        .records
        .iter()
        .zip(input.list_insights.iter())
        .enumerate()
    {
        let record = by_id.get(rec.employee_id.as_str()).copied();
        let label = |f: fn(&EmployeeRecord) -> Option<&String>| {
            record.and_then(f).map(|s| sanitize(s)).unwrap_or_default()
        };

        let mut row = vec![
            (i + 1).to_string(),
            sanitize(&rec.employee_id),
            record.map(|r| sanitize(&r.fullname)).unwrap_or_default(),
            label(|r| r.org.position.as_ref()),
            label(|r| r.org.department.as_ref()),
            label(|r| r.org.division.as_ref()),
            label(|r| r.org.directorate.as_ref()),
            label(|r| r.org.grade.as_ref()),
            format_f64_2(rec.match_rate),
        ];
        row.extend(rec.vector.values().iter().map(|v| format!("{:.4}", v)));
        row.push(format_scored(
            insight
                .top_dimensions
                .iter()
                .map(|(d, v)| (d.short_label().to_string(), *v)),
            "No dimension data",
        ));
        row.push(format_scored(
            insight.top_indicators.iter().cloned(),
            "No indicator data",
        ));
        row.push(sanitize(&insight.top_themes.join(", ")));
        row.push(format_deltas(insight.strengths()));
        row.push(format_deltas(insight.gaps()));
        row.push(
            record
                .and_then(|r| r.latest_performance)
                .map(|p| p.to_string())
                .unwrap_or_default(),
        );
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn format_scored(items: impl Iterator<Item = (String, f64)>, empty: &str) -> String {
    let parts: Vec<String> = items
        .map(|(name, v)| format!("{}({})", name, format_f64_2(v)))
        .collect();
    if parts.is_empty() {
        empty.to_string()
    } else {
        parts.join(", ")
    }
}

fn format_deltas<'a>(items: impl Iterator<Item = &'a DimensionComparison>) -> String {
    let parts: Vec<String> = items
        .map(|c| format!("{}({:+.2})", c.dimension.short_label(), c.delta))
        .collect();
    if parts.is_empty() {
        "None".to_string()
    } else {
        parts.join(", ")
    }
}

fn sanitize(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
