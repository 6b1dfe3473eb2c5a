use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use oddsmith::cards::board::Board;
use oddsmith::cards::hole::Hole;
use oddsmith::dto::EvaluationResponse;
use oddsmith::dto::TestCase;
use oddsmith::dto::TestReport;
use oddsmith::equity::engine::Engine;
use oddsmith::equity::request::Request;
use oddsmith::equity::settings::Settings;

#[derive(Parser)]
#[command(about = "Showdown equity estimation for No-Limit Texas Hold-Em")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate win percentages for a single spot
    Odds {
        /// Comma-separated hole card pairs, e.g. AsAh,KsKh
        #[arg(long)]
        hands: String,
        /// Zero to five board cards, e.g. 2c7d8s
        #[arg(long, default_value = "")]
        board: String,
        /// Trial count; raised to the per-table-size floor
        #[arg(long)]
        iterations: Option<usize>,
        /// Base seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
        /// Batches per chunk; defaults to available parallelism
        #[arg(long)]
        workers: Option<usize>,
        /// Disable antithetic variance reduction
        #[arg(long)]
        plain: bool,
    },
    /// Replay recorded test cases and compare against collected rates
    Check {
        /// JSON file holding an array of test cases
        #[arg(long)]
        file: std::path::PathBuf,
        /// Where to write the reports; stdout when omitted
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    logs();
    let args = Args::parse();
    let settings = Settings::default();
    log::info!("{:<32}{:<32}", "computation backend", settings.backend);
    match args.command {
        Command::Odds {
            hands,
            board,
            iterations,
            seed,
            workers,
            plain,
        } => {
            let settings = Settings {
                iterations,
                seed,
                workers: workers.unwrap_or(settings.workers),
                antithetic: !plain,
                ..settings
            };
            let request = parse(&hands, &board)?;
            let engine = Engine::from(settings);
            let equities = engine.estimate(&request)?;
            print!("{}", equities);
            Ok(())
        }
        Command::Check { file, out } => check(file, out),
    }
}

fn parse(hands: &str, board: &str) -> anyhow::Result<Request> {
    let holes = hands
        .split(',')
        .map(Hole::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::msg)?;
    let board = Board::try_from(board).map_err(anyhow::Error::msg)?;
    Ok(Request::new(holes, board)?)
}

/// Replay every case in the file, compare within one percentage point per
/// player, and report pass/fail with timing.
fn check(file: std::path::PathBuf, out: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let cases = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let cases: Vec<TestCase> = serde_json::from_str(&cases).context("parsing test cases")?;
    let engine = Engine::default();
    let mut reports = Vec::new();
    for (index, case) in cases.iter().enumerate() {
        let request = Request::try_from(&case.request)?;
        let clock = std::time::Instant::now();
        let equities = engine.estimate(&request)?;
        let seconds = clock.elapsed().as_secs_f64();
        let calculated = EvaluationResponse::from(&equities).0;
        let worst = case
            .collected_win_rates
            .iter()
            .map(|(player, expected)| {
                (calculated.get(player).copied().unwrap_or(0.0) - expected).abs()
            })
            .fold(0.0, f64::max);
        let passed = worst <= 1.0;
        log::info!(
            "{:<32}{:<32}",
            format!("case {} {}", index + 1, if passed { "passed" } else { "FAILED" }),
            format!("worst delta {:.2}pp in {:.2}s", worst, seconds)
        );
        reports.push(TestReport {
            case: index + 1,
            calculated,
            expected: case.collected_win_rates.clone(),
            worst_difference: worst,
            seconds,
            passed,
        });
    }
    let passed = reports.iter().filter(|r| r.passed).count();
    log::info!(
        "{:<32}{:<32}",
        "summary",
        format!("{} of {} passed", passed, reports.len())
    );
    let rendered = serde_json::to_string_pretty(&reports)?;
    match out {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", rendered),
    }
    anyhow::ensure!(passed == reports.len(), "some cases failed");
    Ok(())
}

/// Terminal logging, INFO and up.
fn logs() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
