use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use authcheck::browser::{BrowserSession, SessionConfig};
use authcheck::cases::{CaseContext, Identity, all_cases};
use authcheck::config;
use authcheck::harness::{render, run_suite, tally};
use authcheck::session::{RunSession, cleanup_old_runs};

/// authcheck - Browser-driven acceptance testing for registration and login flows
#[derive(Parser, Debug)]
#[command(
    name = "authcheck",
    about = "Drives a headless browser against a web application's registration and login forms",
    after_help = "ENVIRONMENT VARIABLES:\n\
        AUTHCHECK_BASE_URL       Base URL of the application under test\n\
        AUTHCHECK_CHROME         Path to the Chrome/Chromium executable\n\
        AUTHCHECK_RESULTS_DIR    Base directory for run artifacts\n\
        AUTHCHECK_LOOKUP_WAIT    Implicit element lookup wait (seconds)\n\
        AUTHCHECK_SUBMIT_WAIT    Post-submit marker wait (seconds)"
)]
struct Args {
    /// Base URL of the application under test
    #[arg(long, env = "AUTHCHECK_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Path to the Chrome/Chromium executable (default: auto-detect)
    #[arg(long, env = "AUTHCHECK_CHROME")]
    chrome: Option<String>,

    /// Run the browser with a visible window instead of headless
    #[arg(long)]
    headed: bool,

    /// Directory for this run's artifacts (default: auto-generated under the results base)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delete the run's artifacts (log file, metadata) when the run ends
    #[arg(long)]
    discard_artifacts: bool,

    /// Register the documented fixed `user1` identity instead of a generated one
    #[arg(long)]
    fixed_identity: bool,

    /// Implicit element lookup wait in seconds
    #[arg(long, env = "AUTHCHECK_LOOKUP_WAIT", default_value_t = config::DEFAULT_LOOKUP_WAIT_SECS)]
    lookup_wait: u64,

    /// Post-submit marker wait in seconds
    #[arg(long, env = "AUTHCHECK_SUBMIT_WAIT", default_value_t = config::DEFAULT_SUBMIT_WAIT_SECS)]
    submit_wait: u64,

    /// After the run, remove run directories older than this many days
    #[arg(long, value_name = "DAYS")]
    prune_older_than: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let run = match args.output {
        Some(ref dir) => RunSession::in_dir(dir),
        None => RunSession::new(),
    }
    .keep(!args.discard_artifacts);
    run.init(&args.base_url)?;

    let log_file = std::fs::File::create(run.log_path())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();

    info!(run = %run.id, base_url = %args.base_url, "starting acceptance run");

    let mut session_config = SessionConfig::default()
        .headless(!args.headed)
        .lookup_wait(Duration::from_secs(args.lookup_wait));
    if let Some(ref path) = args.chrome {
        session_config = session_config.chrome_path(path);
    }

    // No case can proceed without a session; startup failure aborts the run.
    let mut browser = match BrowserSession::open(args.base_url.clone(), session_config).await {
        Ok(browser) => browser,
        Err(err) => {
            error!(error = %err, "browser session could not be established");
            eprintln!("fatal: {}", err);
            return Err(Box::new(err) as Box<dyn Error>);
        }
    };

    // Preflight: an unreachable application would turn every case into the
    // same error, so probe the base URL once and abort instead.
    if let Err(err) = browser.navigate("").await {
        error!(error = %err, "application unreachable, aborting before any case");
        eprintln!("fatal: application unreachable: {}", err);
        browser.close().await;
        return Err(Box::new(err) as Box<dyn Error>);
    }

    let identity = if args.fixed_identity {
        Identity::fixed()
    } else {
        Identity::unique()
    };
    info!(username = %identity.username, "run identity");

    let mut cx = CaseContext {
        browser,
        identity,
        submit_wait: Duration::from_secs(args.submit_wait),
    };

    let cases = all_cases();
    let ledger = run_suite(&mut cx, &cases).await;

    print!("{}", render(&ledger));
    cx.browser.close().await;

    let counts = tally(&ledger);
    info!(
        passed = counts.passed,
        failed = counts.failed,
        errored = counts.errored,
        "run complete"
    );
    println!("Log: {}", run.log_path().display());

    if let Some(days) = args.prune_older_than {
        let base = PathBuf::from(config::results_base_dir());
        let max_age = Duration::from_secs(days * 24 * 60 * 60);
        match cleanup_old_runs(&base, max_age) {
            Ok(cleaned) => {
                if cleaned > 0 {
                    info!(cleaned, "removed stale run directories");
                    println!("Pruned {} old run(s) under {}", cleaned, base.display());
                }
            }
            Err(err) => warn!(error = %err, "retention cleanup failed"),
        }
    }

    // Case failures are reported, not surfaced as a process failure.
    Ok(())
}
