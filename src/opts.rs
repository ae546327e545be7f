//! CLI options.

use std::path::PathBuf;

use clap::Parser;

mod parsers;

#[derive(Parser)]
#[clap(version, about)]
#[clap(propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[clap(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate. The default is 0 (disabled).
    #[clap(
        long,
        default_value = "0",
        env = "KAKOMON_TRACES_SAMPLE_RATE",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,

    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Check(CheckOpts),
}

/// Runs the web application
#[derive(Parser)]
pub struct WebOpts {
    #[clap(flatten)]
    pub store: StoreOpts,

    /// Web application bind host
    #[clap(long, default_value = "::", env = "KAKOMON_HOST")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, default_value = "5000", env = "KAKOMON_PORT")]
    pub port: u16,

    /// Directory served under `/static`, if it exists
    #[clap(long, default_value = "static", env = "KAKOMON_STATIC_DIR")]
    pub static_dir: PathBuf,

    /// Keep the parsed questions in memory until the file modification time changes
    #[clap(long, env = "KAKOMON_CACHE_QUESTIONS")]
    pub cache_questions: bool,
}

/// Validates the questions file
#[derive(Parser)]
pub struct CheckOpts {
    #[clap(flatten)]
    pub store: StoreOpts,
}

#[derive(Parser)]
pub struct StoreOpts {
    /// Questions JSON file
    #[clap(
        short,
        long,
        default_value = "static/data/questions.json",
        env = "KAKOMON_QUESTIONS",
        value_parser = parsers::json_path,
    )]
    pub questions: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Opts::command().debug_assert();
    }

    #[test]
    fn parse_web_defaults_ok() -> crate::Result {
        let opts = Opts::try_parse_from(["kakomon", "web"])?;
        assert_eq!(opts.traces_sample_rate, 0.0);
        match opts.subcommand {
            Subcommand::Web(opts) => {
                assert_eq!(opts.port, 5000);
                assert_eq!(opts.store.questions, PathBuf::from("static/data/questions.json"));
                assert!(!opts.cache_questions);
            }
            Subcommand::Check(_) => unreachable!(),
        }
        Ok(())
    }
}
