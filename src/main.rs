use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use dbpanel::config::Config;
use dbpanel::console::{BackupLinks, Dispatcher, LinkSettings};
use dbpanel::logger::Logger;
use dbpanel::remote::HttpRemote;
use dbpanel::ui::{self, core::AppContext};

#[derive(Parser)]
#[command(name = "dbpanel")]
#[command(about = "Terminal control panel for a database service", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./dbpanel.toml, then the XDG config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Service root URL, overrides service.root_url
    #[arg(long)]
    service_url: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Print the seven download URLs for an application and date, then exit
    #[arg(long, num_args = 2, value_names = ["APP", "DATE"])]
    print_links: Option<Vec<String>>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if let Some(url) = &cli.service_url {
        config.service.root_url = url.clone();
        config.validate().context("Invalid --service-url")?;
    }

    Ok(config)
}

fn print_links(config: &Config, app_name: &str, date: &str) {
    let settings = LinkSettings::new(config.downloads.base_path.clone(), config.service.root_url.clone());
    let links = BackupLinks::populated(app_name, date, &settings.context());

    for link in links.iter() {
        let url = link
            .absolute_url(&config.service.root_url)
            .unwrap_or_else(|| link.url.clone());
        println!("{}\t{}", link.label, url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.generate_config {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = load_config(&cli)?;

    if let Some(args) = &cli.print_links {
        if let [app_name, date] = args.as_slice() {
            print_links(&config, app_name, date);
        }
        return Ok(());
    }

    let logger = Logger::from_config(&config.logging)?;
    if let Some(path) = logger.file_path() {
        log::info!("Logging to {}", path.display());
    }
    log::info!("Service root: {}", config.service.root_url);

    let remote = HttpRemote::new(&config.service.root_url, config.service.timeout())?;
    let settings = LinkSettings::new(config.downloads.base_path.clone(), remote.root().to_string());
    let dispatcher = Dispatcher::new(Arc::new(remote), settings);

    let context = AppContext::new(dispatcher, &config, logger);
    ui::run_app(context).await
}
