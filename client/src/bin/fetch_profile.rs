//! Fetch the authenticated member's basic profile and print it as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use profile_client::LinkedInHttpSource;
use profile_client::cli::{CliArgs, fetch_and_render};
use profile_client::config::ProfileClientSettings;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let settings = ProfileClientSettings::load_from_iter([OsString::from("fetch-profile")])
        .map_err(|error| eyre!("load profile client settings: {error}"))?;
    let token = args.resolve_access_token(&settings)?;
    let source =
        LinkedInHttpSource::with_options(token, settings.api_base_url()?, settings.timeout())
            .wrap_err("build profile client")?;

    let rendered = fetch_and_render(&source, &args, args.pretty_output(&settings))
        .await
        .wrap_err("fetch basic profile")?;
    writeln!(io::stdout().lock(), "{rendered}").wrap_err("write profile to stdout")?;
    Ok(())
}
