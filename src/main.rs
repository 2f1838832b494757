use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use devdocs::core::catalog::Catalog;
use devdocs::core::config::{self, CliOverrides, ResolvedConfig};
use devdocs::core::preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, load_theme, save_theme,
};
use devdocs::core::state::App;
use devdocs::core::theme::{Appearance, ColorFgBg, SystemAppearance, ThemePreference, ThemeState};
use devdocs::tui::{self, TuiState};
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "devdocs", about = "Browse API documentation in the terminal")]
struct Args {
    /// Catalog TOML file to load instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Theme to use and remember: auto, light or dark
    #[arg(short, long, value_parser = parse_theme)]
    theme: Option<ThemePreference>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_theme(raw: &str) -> Result<ThemePreference, String> {
    ThemePreference::parse(raw).ok_or_else(|| format!("expected auto, light or dark, got '{raw}'"))
}

fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn load_catalog(config: &ResolvedConfig) -> io::Result<Catalog> {
    let catalog = match &config.catalog_file {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::load(path)
        }
        None => Catalog::builtin(),
    };
    catalog.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

fn preference_store() -> Box<dyn PreferenceStore> {
    match FilePreferenceStore::default_location() {
        Some(store) => {
            info!("Preferences at {}", store.path().display());
            Box::new(store)
        }
        None => {
            warn!("Could not determine home directory, preferences will not persist");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logging is configured from the resolved config, so note what loading
    // will do and report it once the logger is up
    let config_file = config::config_path();
    let first_run = config_file.as_ref().is_some_and(|path| !path.exists());

    let file_config = config::load_config().map_err(|e| io::Error::other(e.to_string()))?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog,
            log_file: args.log_file,
            theme: args.theme,
        },
    );
    init_logging(&resolved);
    info!("DevDocs starting up");
    match &config_file {
        Some(path) if first_run => info!("Generated default config at {}", path.display()),
        Some(path) => info!("Loaded config from {}", path.display()),
        None => warn!("Could not determine home directory, using default config"),
    }
    resolved.log_summary();

    let catalog = load_catalog(&resolved)?;
    info!(
        "Catalog has {} documents ({} enabled)",
        catalog.len(),
        catalog.enabled().count()
    );

    let mut store = preference_store();
    let preference = match resolved.theme_override {
        Some(preference) => {
            if let Err(e) = save_theme(store.as_mut(), preference) {
                warn!("Failed to save theme from command line: {}", e);
            }
            preference
        }
        None => load_theme(store.as_ref()),
    };

    let system = ColorFgBg::from_env();
    let theme = ThemeState::new(
        preference,
        Appearance::from_prefers_dark(system.prefers_dark()),
    );
    info!("Theme preference {}, showing {:?}", preference, theme.appearance());

    let app = App::new(Arc::new(catalog), theme);
    let tui_state = TuiState::new(resolved.sidebar_width, resolved.show_item_counts);
    tui::run(app, tui_state, store.as_mut(), &system)
}
