use std::path::Path;

use crate::args::hints::cmd;
use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

fn content(path: &Path, exists: bool, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        exists,
        base_url: config.api.base_url.clone(),
        timeout_secs: config.api.timeout_secs,
        locale: config.display.locale.clone(),
        chart_width: config.display.chart_width,
        chart_height: config.display.chart_height,
    }
}

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(content(path, exists, config));
    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to a file you can edit")
                    .with_command(cmd::CONFIG_INIT),
            )
    }
}

pub fn present_config_written(path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(content(path, true, config))
        .with_badge(StatusBadge::success(format!(
            "Wrote config to {}",
            path.display()
        )))
        .with_suggestion(
            Guidance::new("Review the effective settings").with_command(cmd::CONFIG_SHOW),
        )
}
