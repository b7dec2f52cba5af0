use anyhow::{Result, bail};

use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_written};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let renderer = ConsoleRenderer::new(ctx.json_mode());
    renderer.render(present_config(
        ctx.config_path(),
        ctx.config_exists(),
        ctx.config(),
    ))
}

/// Write the defaults. Command-line overrides are not persisted.
pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if ctx.config_exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    config.save_to(path)?;

    let renderer = ConsoleRenderer::new(ctx.json_mode());
    renderer.render(present_config_written(path, &config))
}
