use anyhow::{Result, bail};
use vetclinic_client::VetApi;

use crate::presentation::presenters::{present_status, present_status_unreachable};
use crate::presentation::{ConsoleRenderer, Renderer};

/// Probe the service and print the result. `Ok(false)` when it cannot be
/// reached.
pub async fn report(api: &dyn VetApi, api_base: &str, renderer: &ConsoleRenderer) -> Result<bool> {
    let result = match api.health().await {
        Ok(health) => present_status(api_base, &health),
        Err(e) => {
            tracing::debug!(error = %e, "health probe failed");
            present_status_unreachable(api_base, &e)
        }
    };

    let reachable = !result.is_failure();
    renderer.render(result)?;
    Ok(reachable)
}

pub async fn handle(api: &dyn VetApi, api_base: &str, json_mode: bool) -> Result<()> {
    let renderer = ConsoleRenderer::new(json_mode);
    if !report(api, api_base, &renderer).await? {
        bail!("API at {} is unreachable", api_base);
    }
    Ok(())
}
