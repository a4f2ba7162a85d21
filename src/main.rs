//! Demo dashboard for a digital wallet pass management API.

use clap::Parser;

use crate::config::Config;
use crate::opts::Opts;
use crate::prelude::*;

mod config;
mod opts;
mod passkit;
mod prelude;
mod tracing;
mod web;

fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    let config = Config::from_env();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(web::run(&opts, config))
}
