use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod check;
mod models;
mod opts;
mod prelude;
mod store;
mod tracing;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let result = match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
        Subcommand::Check(opts) => check::run(opts).await,
    };
    if let Err(error) = &result {
        error!("{:#}", error);
    }
    result
}
