//! Loomcheck - browser smoke verification runner
//!
//! Main entry point for the CLI application.

use clap::Parser;
use loomcheck::runner::preflight;
use loomcheck::{scenarios, Config, Runner, Session};

/// Loomcheck - browser smoke verification for the LogicLoom dashboard
#[derive(Parser, Debug)]
#[command(name = "loomcheck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the application under test
    #[arg(long, short = 'u')]
    base_url: Option<String>,

    /// Directory screenshots are written to
    #[arg(long, short = 'o')]
    out_dir: Option<std::path::PathBuf>,

    /// Default timeout for required waits, in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Browser session name
    #[arg(long)]
    session: Option<String>,

    /// Run in headed browser mode (visible window)
    #[arg(long)]
    headed: bool,

    /// Skip the HTTP reachability probe before launching the browser
    #[arg(long)]
    no_preflight: bool,

    /// Run only the named scenarios (by slug, repeatable)
    #[arg(long)]
    only: Vec<String>,

    /// List available scenarios and exit
    #[arg(long)]
    list: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref base_url) = args.base_url {
        config.set_base_url(base_url.clone());
    }

    if let Some(ref out_dir) = args.out_dir {
        config.output.dir = out_dir.clone();
    }

    if let Some(timeout_ms) = args.timeout_ms {
        config.browser.timeout_ms = timeout_ms;
    }

    if let Some(ref session) = args.session {
        config.browser.session_name = session.clone();
    }

    if args.headed {
        config.browser.headed = true;
    }

    if args.no_preflight {
        config.target.preflight = false;
    }

    if args.debug {
        config.runner.debug = true;
    }

    if args.list {
        for scenario in scenarios::builtin() {
            println!("{:20} {}", scenario.slug, scenario.name);
        }
        return Ok(());
    }

    // Select scenarios
    let selected: Vec<_> = if args.only.is_empty() {
        scenarios::builtin()
    } else {
        let mut picked = Vec::new();
        for slug in &args.only {
            match scenarios::by_slug(slug) {
                Some(s) => picked.push(s),
                None => anyhow::bail!("unknown scenario slug: {}", slug),
            }
        }
        picked
    };

    if config.target.preflight {
        preflight(&config).await?;
    }

    // The session must be released on both the success and the error path,
    // so the run result is captured before closing and propagated after.
    let session = Session::launch(&config).await?;
    let result = Runner::new(session.page(), &config).run_all(&selected).await;

    if let Err(e) = session.close().await {
        eprintln!("Warning: failed to close browser session: {}", e);
    }

    result?;

    println!("All scenarios completed.");
    Ok(())
}
