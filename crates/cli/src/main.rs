use crate::error::CliError;
use clap::Parser;
use reader::latest::{ReadOptions, read_latest};
use tracing::Level;

mod error;

#[derive(Parser)]
#[command(
    name = "kinesis-tail",
    version = "0.0.1",
    about = "Read the latest records from a Kinesis shard"
)]
struct Cli {
    /// Environment to query: "qa" targets eu-west-1, anything else us-west-2
    env: Option<String>,

    /// Minutes back from now to position the shard iterator (default 5)
    lookback_minutes: Option<u32>,

    /// Stream name prefix; the environment suffix is appended to it
    stream_name_prefix: Option<String>,

    /// Shard to read from (default is the first shard)
    shard_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let opts = ReadOptions {
        env: cli.env,
        lookback_minutes: cli.lookback_minutes,
        stream_name_prefix: cli.stream_name_prefix,
        shard_id: cli.shard_id,
    };

    let records = read_latest(&opts).await?;

    let json = serde_json::to_string_pretty(&records).map_err(CliError::JsonSerialize)?;
    println!("{json}");

    Ok(())
}
