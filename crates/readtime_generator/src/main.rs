pub mod content;
pub mod settings;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use readtime::Configuration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the project directory
    #[arg(short, long, default_value = ".")]
    project: String,
    /// Path to the output directory
    #[arg(short, long, default_value = "./output")]
    output: String,
    /// Path to the read time settings, `readtime.json` in the project by default
    #[arg(short, long)]
    config: Option<String>,
}

impl Args {
    pub fn project_content(&self) -> PathBuf {
        Path::new(&self.project).join("content")
    }

    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(config) => PathBuf::from(config),
            None => Path::new(&self.project).join(settings::SETTINGS_FILE_NAME),
        }
    }
}

#[derive(Debug)]
pub struct Context {
    args: Args,
    settings: Configuration,
}

impl Context {
    pub fn get_file_link(&self, path: &Path) -> anyhow::Result<String> {
        let mut p = path
            .strip_prefix(self.args.project_content())
            .with_context(|| format!("File '{}' is outside of content.", path.display()))?
            .to_owned();
        p.set_extension("");

        match p.to_str() {
            Some(link) => Ok(link.to_owned()),
            None => anyhow::bail!("Path '{}' is not valid UTF-8.", p.display()),
        }
    }
}

#[tokio::main]
async fn main() {
    #[cfg(debug_assertions)]
    let mut logger;
    #[cfg(not(debug_assertions))]
    let logger;

    logger = tracing_subscriber::fmt();
    #[cfg(debug_assertions)]
    {
        logger = logger.with_max_level(tracing::Level::TRACE);
    }
    logger.init();

    let args = Args::parse();

    let settings = match settings::load(&args.config_path()).await {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("Failed to load read time settings: {:#}", err);
            std::process::exit(1);
        }
    };

    let context = Arc::new(Context { args, settings });
    match content::process_content(&context).await {
        Ok(count) => tracing::info!("Generated website with {} documents.", count),
        Err(err) => {
            tracing::error!("Failed to process content: {:#}", err);
            std::process::exit(1);
        }
    }
}
