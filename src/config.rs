use clap::Parser;
use std::ffi::OsString;

pub const KEY_ENV_VAR: &str = "SHELL_AI_KEY";
pub const DEFAULT_API: &str = "https://shell-ai.deno.dev";

#[derive(Debug, Parser)]
#[clap(
    name = "q",
    about = "Describe the shell command you want in plain words and get it back.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Config {
    #[clap(
        long("api"),
        value_name = "URL",
        help = "The completion service endpoint to POST the request to.",
        default_value = DEFAULT_API
    )]
    pub api: String,

    #[clap(
        long("key"),
        value_name = "USER_KEY",
        help = "Sets the user key; if absent, the envvar 'SHELL_AI_KEY' is checked",
        default_value = ""
    )]
    pub user_key: String,

    #[clap(
        value_name = "WORDS",
        help = "The desired command, described in plain words",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

impl Config {
    /// Parses `args` (program name first) and falls back to `key_lookup` for the
    /// user key when `--key` wasn't given.
    pub fn from_args<I, T, F>(args: I, key_lookup: F) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::try_parse_from(args)?;

        if config.user_key.is_empty() {
            match env_key(key_lookup) {
                Some(key) => config.user_key = key,
                None => tracing::debug!("no user key on the command line or in {}", KEY_ENV_VAR),
            }
        }
        Ok(config)
    }

    /// The credential sent along with every request, if one was found.
    pub fn user_key(&self) -> Option<&str> {
        if self.user_key.is_empty() {
            None
        } else {
            Some(&self.user_key)
        }
    }

    /// The positional words joined with single spaces, or `None` when nothing was typed.
    pub fn phrase(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}

/// The user key from the environment; an empty value counts as unset.
pub fn env_key<F: Fn(&str) -> Option<String>>(key_lookup: F) -> Option<String> {
    key_lookup(KEY_ENV_VAR).filter(|key| !key.is_empty())
}
