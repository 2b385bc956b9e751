use clap::Parser;
use daily_trends::{
    countries::normalize_geo, feed, fetcher::TrendsClient, serve, Result, ServerConfig,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daily-trends")]
#[command(author, version, about = "Google daily trending searches by country", long_about = None)]
struct Args {
    #[arg(short, long, help = "Address to listen on, e.g. 127.0.0.1:3002")]
    bind: Option<String>,

    #[arg(long, help = "Feed URL template containing {geo}", value_name = "TEMPLATE")]
    feed_url: Option<String>,

    #[arg(long, help = "Outbound request timeout in seconds (default: none)")]
    timeout_secs: Option<u64>,

    #[arg(short, long, help = "Path to a TOML config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Fetch one region, print its trends as JSON and exit", value_name = "GEO")]
    dump: Option<String>,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind = bind.clone();
    }
    if let Some(feed_url) = &args.feed_url {
        config.feed_url = feed_url.clone();
    }
    if args.timeout_secs.is_some() {
        config.timeout_secs = args.timeout_secs;
    }
    config.validate()?;
    Ok(config)
}

async fn dump(config: &ServerConfig, raw_geo: &str) -> Result<()> {
    let geo = normalize_geo(Some(raw_geo), &config.default_geo);
    let client = TrendsClient::new(config)?;
    let trends = client.fetch_trends(&geo).await?;
    println!("{}", feed::to_json(&trends)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    let result = match &args.dump {
        Some(geo) => dump(&config, geo).await,
        None => serve(config).await,
    };
    if let Err(err) = result {
        log::error!("daily-trends failed: {err}");
        std::process::exit(1);
    }
}
