use clap::Parser;
use reqwest::Url;

use crate::controller::ergast::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interface to bind the dashboard to
    #[arg(long, env = "PITWALL_HOST", value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(
        short = 'p',
        long,
        env = "PITWALL_PORT",
        value_name = "PORT",
        default_value_t = 8081
    )]
    pub port: u16,
    /// Base URL of the Ergast-compatible stats API. Point it at a mirror or a
    /// local fixture server for offline runs.
    #[arg(
        long,
        env = "PITWALL_API_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = crate::args::validation::check_base_url
    )]
    pub api_base_url: Url,
    /// Directory served under /static
    #[arg(long, env = "PITWALL_STATIC_DIR", value_name = "DIR", default_value = "./static")]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub api_base_url: Url,
    pub static_dir: String,
}

impl Args {
    #[must_use]
    pub fn into_clean(self) -> CleanArgs {
        CleanArgs {
            host: self.host,
            port: self.port,
            api_base_url: self.api_base_url,
            static_dir: self.static_dir,
        }
    }
}
