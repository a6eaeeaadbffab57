//! Environment-backed configuration.

use clap::Parser;

/// Runtime configuration for one posting run.
///
/// Every value is environment-provided; a missing value fails at startup,
/// before any network call is made.
#[derive(Parser, Debug)]
#[command(
    name = "dripfeed",
    about = "Posts the scheduled entry for the current time slot to a Telegram channel",
    long_about = None
)]
pub struct Config {
    /// Telegram bot token.
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: String,

    /// Destination channel or chat identifier.
    #[arg(long, env = "TELEGRAM_CHANNEL_ID")]
    pub channel_id: String,

    /// GCS bucket holding the content calendar and publication log.
    #[arg(long, env = "GCS_BUCKET_NAME")]
    pub bucket: String,

    /// Object name of the content calendar JSON.
    #[arg(long, env = "GCS_FILE_NAME")]
    pub content_object: String,

    /// Service-account key JSON (the key itself, not a file path).
    #[arg(long, env = "GCS_KEY_JSON", hide_env_values = true)]
    pub gcs_key_json: String,
}
