use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vetclinic_client::{HttpApiClient, VetApi};

use crate::app::App;
use crate::args::Cli;
use crate::chart::TerminalChart;
use crate::config::{Config, Overrides, resolve_config_path};
use crate::presentation::formatters::DisplayOptions;
use crate::presentation::presenters::SubmitFrom;
use crate::presentation::{ConsoleNotifier, ConsoleSurface, OutputFormat};

/// Everything a command needs, resolved once from flags, environment and
/// the config file.
pub struct ExecutionContext {
    config_path: PathBuf,
    config_exists: bool,
    config: Config,
    format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        Self::with_env(cli, |name| std::env::var(name).ok())
    }

    pub fn with_env(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config_path = resolve_config_path(cli.config.as_deref(), &env)?;
        let config_exists = config_path.exists();
        let mut config = Config::load_from(&config_path)?;
        config.apply_overrides(
            &env,
            &Overrides {
                api_base: cli.api_base.clone(),
                timeout_secs: cli.timeout,
                locale: cli.locale.map(Into::into),
            },
        );

        Ok(Self {
            config_path,
            config_exists,
            config,
            format: cli.format.into(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config_exists(&self) -> bool {
        self.config_exists
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn api_base(&self) -> &str {
        &self.config.api.base_url
    }

    pub fn api(&self) -> Result<Arc<dyn VetApi>> {
        let client = HttpApiClient::new(self.config.client_config())?;
        Ok(Arc::new(client))
    }

    pub fn display_options(&self) -> Result<DisplayOptions> {
        Ok(DisplayOptions::new(self.config.date_locale()?))
    }

    pub fn app(&self, submit_from: SubmitFrom) -> Result<App> {
        let display = &self.config.display;
        Ok(App::new(
            self.api()?,
            Box::new(ConsoleSurface::new(self.format, submit_from)),
            Box::new(ConsoleNotifier::new(self.format)),
            Box::new(TerminalChart::sized(display.chart_width, display.chart_height)),
            self.display_options()?,
        ))
    }
}
