mod input;
mod job_profile;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{error, info};

use crate::input::{CodePolicy, EmployeeRecord, InputError, ProfileSource, load_roster};
use crate::job_profile::{
    BenchmarkLabel, JobProfile, JobProfileRequest, OfflineGenerator, resolve_job_profile,
};
use crate::model::thresholds::InsightThresholds;
use crate::pipeline::MatchError;
use crate::pipeline::stage1_compose::run_stage1;
use crate::pipeline::stage2_baseline::run_stage2;
use crate::pipeline::stage3_rank::run_stage3;
use crate::pipeline::stage4_insights::{InsightView, extract_insight, run_stage4};
use crate::pipeline::stage5_report::{Stage5Input, write_reports};

/// Ranks employees against a benchmark set of high performers.
#[derive(Debug, Parser)]
#[command(name = "kira-talentmatch", version, about)]
struct Cli {
    /// Verbosity (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a roster against benchmark employees and write reports
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Roster JSON with an `employees` array
    #[arg(long)]
    input: PathBuf,

    /// Benchmark employee id; repeat or comma-separate
    #[arg(long = "benchmark", value_delimiter = ',', required = true)]
    benchmarks: Vec<String>,

    /// Output directory for ranking.tsv, summary.json and report.txt
    #[arg(long)]
    out: PathBuf,

    #[arg(long)]
    role_name: Option<String>,

    #[arg(long, default_value = "")]
    job_level: String,

    #[arg(long, default_value = "")]
    role_purpose: String,

    /// Fail on malformed codes or out-of-range scores instead of treating them as absent
    #[arg(long)]
    strict_codes: bool,

    /// Number of top dimensions and indicators reported per candidate
    #[arg(long, default_value_t = InsightThresholds::default_v1().top_n)]
    top: usize,
}

impl RunArgs {
    fn code_policy(&self) -> CodePolicy {
        if self.strict_codes {
            CodePolicy::Strict
        } else {
            CodePolicy::Lenient
        }
    }

    fn thresholds(&self) -> InsightThresholds {
        InsightThresholds {
            top_n: self.top,
            ..InsightThresholds::default_v1()
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("failed to write reports: {0}")]
    Report(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    let roster = load_roster(&args.input, args.code_policy())?;
    let records = roster.fetch_all()?;

    let stage1 = run_stage1(records);
    let baseline = run_stage2(&roster, &args.benchmarks)?;
    let ranking = run_stage3(&baseline, &stage1.composed);

    let thresholds = args.thresholds();
    let list = run_stage4(&ranking, records, &baseline, InsightView::List, &thresholds);
    let detail = ranking.top().map(|top| {
        let profile = roster
            .get(&top.employee_id)
            .and_then(|r| r.assessment.as_ref());
        extract_insight(top, profile, &baseline, InsightView::Detail, &thresholds)
    });

    let job_profile = args
        .role_name
        .as_deref()
        .map(|role_name| build_job_profile(args, role_name, &roster, &baseline.member_ids))
        .transpose()?;

    write_reports(
        &Stage5Input {
            records,
            benchmark_requested: &args.benchmarks,
            baseline: &baseline,
            ranking: &ranking,
            list_insights: &list,
            detail_insight: detail.as_ref(),
            job_profile: job_profile.as_ref(),
        },
        &args.out,
    )?;

    if let Some(top) = ranking.top() {
        info!(employee_id = %top.employee_id, match_rate = top.match_rate, "top candidate");
    }
    Ok(())
}

fn build_job_profile(
    args: &RunArgs,
    role_name: &str,
    source: &dyn ProfileSource,
    member_ids: &[String],
) -> Result<JobProfile, InputError> {
    let benchmarks = source
        .fetch_by_ids(member_ids)?
        .into_iter()
        .map(benchmark_label)
        .collect();
    let request = JobProfileRequest {
        role_name: role_name.to_string(),
        job_level: args.job_level.clone(),
        role_purpose: args.role_purpose.clone(),
        benchmarks,
    };
    Ok(resolve_job_profile(&OfflineGenerator, &request))
}

fn benchmark_label(record: &EmployeeRecord) -> BenchmarkLabel {
    BenchmarkLabel {
        fullname: record.fullname.clone(),
        position: record.org.position.clone(),
        department: record.org.department.clone(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
