use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use cauldron::{Cauldron, Config, Endpoint, Fetcher, HttpTransport, OutputFormat, ReportOptions};

#[derive(Parser)]
#[command(name = "cauldron", about = "Client for the Cauldron metrics API")]
struct Cli {
    /// Config file (default: ./.cauldron.yml, then ~/.cauldron.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the Cauldron instance
    #[arg(long, global = true, hide = true, default_value = cauldron::url::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch metrics for a given project
    Metrics {
        /// The project ID to fetch metrics for. Ignored when the config file lists projects.
        #[arg(short = 'p', long)]
        project_id: Option<u64>,
        /// Start date (YYYY-MM-DD). Default is one year ago.
        #[arg(short = 'f', long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD). Default is today.
        #[arg(short = 't', long)]
        to: Option<String>,
        /// Tab to fetch: overview, activity-overview, community-overview, performance-overview.
        /// Default is all of them.
        #[arg(short = 'T', long, default_value = "")]
        tab: String,
        /// Output format: console or json
        #[arg(short = 'F', long, default_value = "console")]
        format: String,
        /// Repository URL to filter by (repeatable)
        #[arg(long = "repo-url", value_name = "URL")]
        repo_urls: Vec<String>,
        /// JSON indentation (default: two spaces)
        #[arg(long, default_value = "")]
        indent: String,
        /// Print only the metrics, without project and date range
        #[arg(long)]
        no_metadata: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load(cli.config.as_deref())?;
    let transport = HttpTransport::with_timeout(cli.timeout.map(Duration::from_secs))?;
    let endpoint = Endpoint::new(&cli.base_url)?;
    let client = Cauldron::new(Fetcher::new(transport, endpoint));

    match cli.command {
        Commands::Metrics {
            project_id,
            from,
            to,
            tab,
            format,
            repo_urls,
            indent,
            no_metadata,
        } => {
            let projects = config.resolve_projects(project_id, repo_urls)?;
            let (default_from, default_to) = cauldron::date_util::default_range_today();
            let options = ReportOptions {
                from: from.unwrap_or(default_from),
                to: to.unwrap_or(default_to),
                tab: Some(tab).filter(|t| !t.is_empty()),
            };
            let format: OutputFormat = format.parse()?;
            let formatter = format.formatter(&indent, !no_metadata);
            client
                .report_all(&projects, &options, &*formatter, &mut std::io::stdout())
                .await?;
        }
    }

    Ok(())
}
