// src/cli.rs
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::catalog::{Catalog, Distance};
use crate::config::consts::FETCH_TIMEOUT_SECS;
use crate::config::{AppOptions, ExportFormat};
use crate::core::HttpFetcher;
use crate::csv::to_export_string;
use crate::plan::{AlignTo, PlanRequest, TrainingPlan, generate_plan};
use crate::progress::{Progress, Stage};

#[derive(Parser, Debug)]
#[command(name = "race_plan", version, about = "Line up a published training plan with your race date")]
pub struct Cli {
    /// Debug logging and per-stage progress on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a dated plan and export it
    Plan(PlanArgs),
    /// List known race distances
    Distances,
    /// List training levels for a distance
    Levels {
        distance: Distance,
    },
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Race distance, e.g. 5K, 10K, half, marathon
    #[arg(short, long)]
    pub distance: Distance,

    /// Training level, e.g. "Novice 1"
    #[arg(short, long)]
    pub level: String,

    /// Race day, YYYY-MM-DD
    #[arg(short, long)]
    pub race_date: NaiveDate,

    /// Requested weekday alignment (currently informational only)
    #[arg(long, value_enum, default_value_t = AlignArg::Sunday)]
    pub align: AlignArg,

    /// Output file, or directory (trailing slash) for the default file name
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Leave out the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Print the table to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long)]
    pub user_agent: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlignArg {
    Sunday,
    RaceDate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<AlignArg> for AlignTo {
    fn from(a: AlignArg) -> Self {
        match a { AlignArg::Sunday => AlignTo::Sunday, AlignArg::RaceDate => AlignTo::RaceDate }
    }
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f { FormatArg::Csv => ExportFormat::Csv, FormatArg::Tsv => ExportFormat::Tsv }
    }
}

impl PlanArgs {
    /// Fold flags over the defaults.
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.fetch.timeout = Duration::from_secs(self.timeout);
        if let Some(ua) = &self.user_agent {
            opts.fetch.user_agent = ua.clone();
        }
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }

    pub fn to_request(&self) -> PlanRequest {
        let mut req = PlanRequest::new(self.distance, self.level.clone(), self.race_date);
        req.align = self.align.into();
        req
    }
}

/// Prints "[n/5] stage" lines to stderr.
struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        eprintln!("[{}/{}] {stage}", stage.ordinal(), self.total);
    }
}

pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::builtin().wrap_err("Built-in catalog is invalid")?;

    match cli.command {
        Command::Distances => {
            for d in catalog.distances() {
                println!("{d}");
            }
            Ok(())
        }
        Command::Levels { distance } => {
            for e in catalog.entries_for(distance) {
                println!("{} ({} weeks)", e.level, e.duration_weeks);
            }
            Ok(())
        }
        Command::Plan(args) => run_plan(&catalog, &args, cli.verbose),
    }
}

fn run_plan(catalog: &Catalog, args: &PlanArgs, verbose: bool) -> Result<()> {
    let opts = args.to_options();
    let request = args.to_request();
    let fetcher = HttpFetcher::new(&opts.fetch).wrap_err("Could not set up HTTP client")?;

    let mut progress = CliProgress { total: 0 };
    let sink: Option<&mut dyn Progress> = if verbose { Some(&mut progress) } else { None };

    let plan = generate_plan(catalog, &fetcher, &request, sink).map_err(|e| {
        let kind = e.kind();
        color_eyre::Report::new(e).wrap_err(format!("Plan generation failed ({kind} error)"))
    })?;

    if args.stdout {
        let headers = TrainingPlan::headers();
        let headers = opts.export.include_headers.then_some(headers.as_slice());
        print!("{}", to_export_string(headers, &plan.rows(), opts.export.format.delim()));
        eprintln!("{}", summary(&plan));
    } else {
        let path = crate::file::write_export(&opts.export, &plan)
            .map_err(|e| eyre!("Export failed: {e}"))?;
        println!("{}", summary(&plan));
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn summary(plan: &TrainingPlan) -> String {
    let start = plan.start_date().map(|d| d.to_string()).unwrap_or_default();
    format!(
        "{} / {}: {} weeks, {} days, {} → {}",
        plan.entry.distance,
        plan.entry.level,
        plan.entry.duration_weeks,
        plan.days.len(),
        start,
        plan.race_date
    )
}
