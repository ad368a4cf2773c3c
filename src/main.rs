use anyhow::{Context, bail};
use chrono::{Datelike, Local, Timelike};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use freeboard::Result;
use freeboard::render;
use freeboard::schedule::{ClockTime, LoadDiagnostic, LoadOutcome, ScheduleBoard, parse_weekday};
use freeboard::sheet::{self, SheetCache};
use freeboard::status;

#[derive(Parser)]
#[command(name = "freeboard")]
#[command(about = "Busy/free board for a shared weekly schedule", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the HTML dashboard for the current (or pinned) query point.
    Report {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        clock: ClockArgs,

        /// Output HTML file.
        #[arg(short = 'o', long)]
        out: String,
    },

    /// Print the group report (and optionally your own day) to stdout.
    Status {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        clock: ClockArgs,

        /// Also show this person's day schedule below the report.
        #[arg(long)]
        me: Option<String>,
    },

    /// Re-render the dashboard on an interval, refetching through a TTL
    /// cache. A failed refetch keeps serving the previous snapshot.
    Watch {
        #[command(flatten)]
        source: SourceArgs,

        /// Output HTML file.
        #[arg(short = 'o', long)]
        out: String,

        /// Seconds between renders.
        #[arg(long, default_value_t = 60)]
        every: u64,

        /// Seconds a fetched sheet stays fresh before a refetch.
        #[arg(long, default_value_t = 300)]
        ttl: u64,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Published-to-web CSV URL of the schedule sheet.
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    sheet: Option<String>,

    /// Local CSV file instead of a remote sheet (no fetch, no cache).
    #[arg(long)]
    csv: Option<String>,
}

#[derive(Args)]
struct ClockArgs {
    /// Pin the query weekday (e.g. "Monday") instead of sampling the clock.
    #[arg(long)]
    day: Option<String>,

    /// Pin the query time as 24-hour HH:MM instead of sampling the clock.
    #[arg(long)]
    at: Option<String>,
}

impl ClockArgs {
    /// Resolve the query point: pinned flags win, otherwise sample the
    /// local clock once. The engine itself never reads the clock.
    fn resolve(&self) -> Result<(chrono::Weekday, ClockTime)> {
        let now = Local::now();

        let weekday = match &self.day {
            Some(day) => {
                parse_weekday(day).with_context(|| format!("unrecognized weekday {day:?}"))?
            }
            None => now.weekday(),
        };

        let time = match &self.at {
            Some(at) => ClockTime::parse(at)
                .with_context(|| format!("--at must be a 24-hour HH:MM time, got {at:?}"))?,
            None => ClockTime::new(now.hour() as u8, now.minute() as u8)
                .context("local clock out of range")?,
        };

        Ok((weekday, time))
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report { source, clock, out } => {
            // 1) Load + normalize the sheet.
            let (board, diagnostics) = load_board(&source)?;

            // 2) Resolve the query point and classify everyone.
            let (weekday, time) = clock.resolve()?;
            let data =
                status::build_report_data(&board, weekday, time, &diagnostics, generated_at());

            // 3) Render HTML.
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html).with_context(|| format!("write report {out}"))?;
            println!("Wrote {}", out);
        }

        Commands::Status { source, clock, me } => {
            let (board, diagnostics) = load_board(&source)?;
            let (weekday, time) = clock.resolve()?;
            let data =
                status::build_report_data(&board, weekday, time, &diagnostics, generated_at());
            print!("{}", render::render_text_report(&data, me.as_deref()));
        }

        Commands::Watch {
            source,
            out,
            every,
            ttl,
        } => {
            let mut cache = SheetCache::new(Duration::from_secs(ttl));
            loop {
                let text = source_text(&source, &mut cache)?;
                let parsed = sheet::parse_sheet(&text);
                let LoadOutcome { board, diagnostics } = ScheduleBoard::load(&parsed);
                warn_diagnostics(&diagnostics);

                let now = Local::now();
                let weekday = now.weekday();
                let time = ClockTime::new(now.hour() as u8, now.minute() as u8)
                    .context("local clock out of range")?;
                let data =
                    status::build_report_data(&board, weekday, time, &diagnostics, generated_at());
                let html = render::render_html_report(&data)?;
                std::fs::write(&out, html).with_context(|| format!("write report {out}"))?;
                tracing::info!(out = %out, "dashboard refreshed");

                std::thread::sleep(Duration::from_secs(every));
            }
        }
    }

    Ok(())
}

/// One-shot load: read or fetch the source, parse, build the board.
fn load_board(source: &SourceArgs) -> Result<(ScheduleBoard, Vec<LoadDiagnostic>)> {
    let text = match (&source.csv, &source.sheet) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("read schedule csv {path}"))?,
        (None, Some(url)) => sheet::fetch_csv(url)?,
        (None, None) => bail!("either --sheet or --csv is required"),
    };

    let parsed = sheet::parse_sheet(&text);
    let outcome = ScheduleBoard::load(&parsed);
    warn_diagnostics(&outcome.diagnostics);
    Ok((outcome.board, outcome.diagnostics))
}

/// Source text for the watch loop: local files are reread every tick,
/// remote sheets go through the TTL cache.
fn source_text(source: &SourceArgs, cache: &mut SheetCache) -> Result<String> {
    match (&source.csv, &source.sheet) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("read schedule csv {path}")),
        (None, Some(url)) => Ok(cache.get(|| sheet::fetch_csv(url))?.to_string()),
        (None, None) => bail!("either --sheet or --csv is required"),
    }
}

fn warn_diagnostics(diagnostics: &[LoadDiagnostic]) {
    for diagnostic in diagnostics {
        tracing::warn!("{diagnostic}");
    }
}

fn generated_at() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("freeboard=info,warn"));

    // Keep stdout clean for the `status` output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
