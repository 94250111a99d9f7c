use clap::{Args as ClapArgs, Parser};
use recetario_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, RecetarioConfig,
};

pub const DEFAULT_LOG_FILTER: &str = "recetario_api=info,recetario_core=info,tower_http=info";

#[derive(Debug, Clone, Parser)]
#[command(name = "recetario", version, about = "Chilean recipe assistant backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub gemini: GeminiArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long = "port", env = "PORT", default_value_t = 3000)]
    pub port: u16,
    /// Prefix prepended to every route, e.g. `/recetario`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GeminiArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,
    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for RecetarioConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.gemini.api_key,
                gemini_model: args.gemini.model,
                gemini_base_url: args.gemini.base_url,
            },
        }
    }
}
