use std::env;
use std::str::FromStr;
use std::{fs::File, net::SocketAddr, path::PathBuf};

use dotenv::dotenv;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::i18n::Locale;

#[derive(Clone, Debug, PartialEq)]
pub enum Env {
    Local,
    Dev,
    Production,
}

impl Env {
    pub fn addr(&self) -> SocketAddr {
        match self {
            Env::Local => SocketAddr::from(([127, 0, 0, 1], 8000)),
            Env::Dev | Env::Production => SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Env::Local),
            "dev" => Ok(Env::Dev),
            "prod" => Ok(Env::Production),
            _ => Err(format!("Invalid environment: {s}")),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub env: Env,
    pub context_file: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        dotenv().ok();
        init_logger();

        let env = env::var("ENV")
            .map(|env| env.parse().unwrap_or_else(|e| panic!("{e}")))
            .unwrap_or(Env::Local);

        let locale: Locale = env::var("LOCALE")
            .map(|l| l.parse().unwrap_or_else(|e| panic!("{e}")))
            .unwrap_or_default();

        Self {
            env,
            context_file: env::var("CONTEXT_FILE").ok().map(PathBuf::from),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or("static".into())
                .into(),
            locale,
        }
    }
}

fn init_logger() {
    let rust_log = env::var("RUST_LOG").unwrap_or("info".into());
    let level = LevelFilter::from_str(&rust_log).unwrap_or(LevelFilter::Info);
    let log_file = env::var("SERVICE_NAME")
        .map(|pkg| format!("{pkg}.log"))
        .unwrap_or("login_theme.log".into());

    CombinedLogger::init(vec![
        TermLogger::new(
            level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            level,
            simplelog::Config::default(),
            File::create(log_file).expect("Failed to create log file"),
        ),
    ])
    .expect("Failed to initialize logger");
}
