//! Trend chart for a pet's visits.
//!
//! [`build_trend_chart`] derives a declarative dual-axis line chart from
//! the records; a [`ChartRenderer`] turns it into the `health-chart` panel.

pub mod terminal;
pub mod trend;

pub use terminal::TerminalChart;
pub use trend::{TEMPERATURE_LABEL, WEIGHT_LABEL, build_trend_chart};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::presentation::Panel;

pub trait ChartRenderer {
    fn render(&self, config: &ChartConfig) -> Panel;
}

/// Chart.js-shaped configuration of a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One series. `None` marks a visit without that measurement, so every
/// series stays aligned with the labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<Option<f64>>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: &'static str,
}

impl Dataset {
    /// Values that were actually measured, with their label index.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub interaction: Interaction,
    pub scales: BTreeMap<&'static str, Scale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub display: bool,
    pub position: AxisPosition,
    pub title: ScaleTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTitle {
    pub display: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub draw_on_chart_area: bool,
}

impl Scale {
    pub fn linear(position: AxisPosition, title: &'static str) -> Self {
        Self {
            kind: "linear",
            display: true,
            position,
            title: ScaleTitle {
                display: true,
                text: title,
            },
            grid: None,
        }
    }

    pub fn without_chart_grid(mut self) -> Self {
        self.grid = Some(Grid {
            draw_on_chart_area: false,
        });
        self
    }
}

impl ChartConfig {
    /// A responsive line chart hovering by index, with the given y scales.
    pub fn line(
        labels: Vec<String>,
        datasets: Vec<Dataset>,
        scales: BTreeMap<&'static str, Scale>,
    ) -> Self {
        Self {
            kind: "line",
            data: ChartData { labels, datasets },
            options: ChartOptions {
                responsive: true,
                interaction: Interaction {
                    mode: "index",
                    intersect: false,
                },
                scales,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.labels.is_empty()
    }

    pub fn scale(&self, axis_id: &str) -> Option<&Scale> {
        self.options.scales.get(axis_id)
    }
}
