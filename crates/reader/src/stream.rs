pub const DEFAULT_STREAM_NAME_PREFIX: &str = "experiments-eventstream-";
pub const DEFAULT_SHARD_ID: &str = "shardId-000000000000";
pub const DEFAULT_LOOKBACK_MINUTES: u32 = 5;

/// Deployment environment the stream lives in. Any tag other than "qa"
/// falls back to the dev environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Qa,
    Dev,
}

impl Environment {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("qa") => Environment::Qa,
            _ => Environment::Dev,
        }
    }

    pub fn region(&self) -> &'static str {
        match self {
            Environment::Qa => "eu-west-1",
            Environment::Dev => "us-west-2",
        }
    }

    pub fn stream_suffix(&self) -> &'static str {
        match self {
            Environment::Qa => "qa",
            Environment::Dev => "dev",
        }
    }
}

/// Fully resolved location of the shard to read: AWS region, stream name
/// and shard id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamAddress {
    pub region: String,
    pub stream_name: String,
    pub shard_id: String,
}

impl StreamAddress {
    /// Derives the address from an environment tag and optional overrides.
    /// The stream name is always `{prefix}{suffix}`; the suffix mirrors the
    /// environment, only the prefix can be overridden.
    pub fn resolve(
        env_tag: Option<&str>,
        stream_name_prefix: Option<&str>,
        shard_id: Option<&str>,
    ) -> Self {
        let env = Environment::from_tag(env_tag);
        let prefix = stream_name_prefix.unwrap_or(DEFAULT_STREAM_NAME_PREFIX);

        StreamAddress {
            region: env.region().to_string(),
            stream_name: format!("{prefix}{}", env.stream_suffix()),
            shard_id: shard_id.unwrap_or(DEFAULT_SHARD_ID).to_string(),
        }
    }
}

/// Minutes before "now" from which to start reading. `None` selects the
/// default; an explicit 0 means "read from now" and is honored as given.
pub fn lookback_minutes(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_LOOKBACK_MINUTES)
}
