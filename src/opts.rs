//! CLI options.

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance tracing sample rate
    #[clap(long, default_value = "0.0")]
    pub traces_sample_rate: f32,

    /// Web application bind host
    #[clap(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,
}
