use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset as Series, GraphType, Paragraph, Widget},
};
use serde_json::Value;

use super::{ChartConfig, ChartRenderer, Dataset};
use crate::presentation::Panel;

pub const NO_VISITS: &str = "No visits to chart yet.";

const FALLBACK_WIDTH: u16 = 80;
const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 8;

/// Draws the trend chart as text: one braille line chart per series,
/// stacked, rendered into an off-screen buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalChart {
    width: u16,
    height: u16,
}

impl TerminalChart {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
        }
    }

    /// `width` 0 means the terminal's width, or 80 columns when stdout is
    /// not a terminal.
    pub fn sized(width: u16, height: u16) -> Self {
        let width = if width == 0 {
            terminal_size::terminal_size()
                .map(|(terminal_size::Width(w), _)| w)
                .unwrap_or(FALLBACK_WIDTH)
        } else {
            width
        };
        Self::new(width, height)
    }

    pub fn draw(&self, config: &ChartConfig) -> String {
        let area = Rect::new(0, 0, self.width, self.height);
        let mut buf = Buffer::empty(area);

        let series = config.data.datasets.len().max(1) as u32;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints((0..series).map(|_| Constraint::Ratio(1, series)))
            .split(area);

        for (dataset, row) in config.data.datasets.iter().zip(rows.iter()) {
            draw_series(dataset, &config.data.labels, *row, &mut buf);
        }

        buffer_text(&buf)
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&self, config: &ChartConfig) -> Panel {
        let data = serde_json::to_value(config).unwrap_or(Value::Null);
        if config.is_empty() {
            return Panel::new(format!("{}\n", NO_VISITS), data);
        }
        Panel::new(self.draw(config), data)
    }
}

/// Contiguous measured stretches; a gap in the data splits the line.
fn runs(dataset: &Dataset) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current = Vec::new();
    for (i, value) in dataset.data.iter().enumerate() {
        match value {
            Some(v) => current.push((i as f64, *v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn value_bounds(dataset: &Dataset) -> Option<[f64; 2]> {
    let (min, max) = dataset
        .points()
        .fold(None, |acc: Option<(f64, f64)>, (_, v)| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })?;

    let pad = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        (max - min) * 0.1
    };
    Some([min - pad, max + pad])
}

fn draw_series(dataset: &Dataset, labels: &[String], area: Rect, buf: &mut Buffer) {
    let color = dataset
        .border_color
        .parse::<Color>()
        .unwrap_or(Color::Reset);
    let block = Block::bordered().title(Span::styled(dataset.label, Style::default().fg(color)));

    let Some([low, high]) = value_bounds(dataset) else {
        Paragraph::new("no measurements")
            .block(block)
            .render(area, buf);
        return;
    };

    let runs = runs(dataset);
    let series: Vec<Series> = runs
        .iter()
        .map(|run| {
            let graph_type = if run.len() == 1 {
                GraphType::Scatter
            } else {
                GraphType::Line
            };
            Series::default()
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(color))
                .data(run)
        })
        .collect();

    let last = labels.len().saturating_sub(1);
    let x_labels: Vec<Span> = match (labels.first(), labels.last()) {
        (Some(first), Some(end)) if last > 0 => {
            vec![Span::raw(first.clone()), Span::raw(end.clone())]
        }
        (Some(only), _) => vec![Span::raw(only.clone())],
        _ => Vec::new(),
    };

    let chart = Chart::new(series)
        .block(block)
        .legend_position(None)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([-0.5, last as f64 + 0.5])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(vec![
                    Span::raw(format!("{:.1}", low)),
                    Span::raw(format!("{:.1}", high)),
                ]),
        );
    chart.render(area, buf);
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buf.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}
