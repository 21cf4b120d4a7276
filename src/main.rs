mod api;
mod config;
mod error;
mod onboarding;
#[cfg(test)]
mod test_support;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::exit;

use anyhow::Result;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use api::ApiClient;
use config::Config;
use onboarding::Shell;

const FAILURE: i32 = 1;
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so stdout only ever carries the answer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let key_lookup = |name: &str| env::var(name).ok();

    match run(env::args_os(), key_lookup, Client::new(), &mut stdout).await {
        Ok(0) => {}
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(FAILURE);
        }
    }
}

/// Runs one invocation, writing everything meant for the user to `out`.
///
/// `args` starts with the program name. Returns the process exit code.
async fn run<I, T, F, W>(args: I, key_lookup: F, client: Client, out: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let config = match Config::from_args(args, &key_lookup) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = %e, "unable to parse arguments");
            if config::env_key(&key_lookup).is_none() {
                writeln!(out, "{}", onboarding::greeting(&exe_path(), Shell::current()))?;
            } else {
                writeln!(out, "{}", e.render().to_string().trim_end())?;
            }
            return Ok(FAILURE);
        }
    };

    let Some(user_key) = config.user_key() else {
        writeln!(out, "{}", onboarding::greeting(&exe_path(), Shell::current()))?;
        return Ok(FAILURE);
    };

    let Some(phrase) = config.phrase() else {
        writeln!(out, "{}", onboarding::USAGE)?;
        return Ok(FAILURE);
    };

    let api_client = ApiClient::new(client, config.api.as_str(), user_key);
    match api_client.complete(&phrase).await {
        Ok(completion) => {
            writeln!(out, "{}", completion)?;
            Ok(0)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "query failed");
            for line in e.report() {
                writeln!(out, "{}", line)?;
            }
            Ok(FAILURE)
        }
    }
}

fn exe_path() -> String {
    match env::current_exe() {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "unable to locate the running executable");
            "q".to_string()
        }
    }
}
