use vetclinic_client::ClientError;
use vetclinic_types::HealthStatus;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, StatusViewModel,
};

pub fn present_status(api_base: &str, health: &HealthStatus) -> CommandResultViewModel<StatusViewModel> {
    let content = StatusViewModel {
        api_base: api_base.to_string(),
        reachable: true,
        status: Some(health.status.clone()),
        database: health.database.clone(),
        server_time: health.timestamp.clone(),
        error: None,
    };

    let result = CommandResultViewModel::new(content);
    if !health.is_healthy() {
        result.with_badge(StatusBadge::warning(format!(
            "API answered with status '{}'",
            health.status
        )))
    } else if !health.database_connected() {
        result
            .with_badge(StatusBadge::warning("API is up but its database is not connected"))
            .with_suggestion(Guidance::new(
                "Records cannot be read or added until the server reconnects",
            ))
    } else {
        result
            .with_badge(StatusBadge::success("API is healthy"))
            .with_suggestion(Guidance::new("Browse the pets").with_command(cmd::PETS_LIST))
    }
}

pub fn present_status_unreachable(
    api_base: &str,
    error: &ClientError,
) -> CommandResultViewModel<StatusViewModel> {
    let content = StatusViewModel {
        api_base: api_base.to_string(),
        reachable: false,
        status: None,
        database: None,
        server_time: None,
        error: Some(error.to_string()),
    };

    let label = if error.is_timeout() {
        "API did not answer in time"
    } else {
        "API is unreachable"
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::error(label))
        .with_suggestion(
            Guidance::new("Point the client at another server").with_command(cmd::API_BASE_FLAG),
        )
        .with_suggestion(
            Guidance::new("Check the configured base URL").with_command(cmd::CONFIG_SHOW),
        )
}
