//! Recording doubles for driving `App` without a terminal.
//!
//! Integration test files compile separately, so not every helper is used
//! by every file.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use vetclinic::app::forms::FormKind;
use vetclinic::presentation::formatters::{DateLocale, DisplayOptions};
use vetclinic::presentation::{Notice, Notifier, Panel, Surface};
use vetclinic::{App, ChartConfig, ChartRenderer, Container, Section};
use vetclinic_testing::FakeApi;

/// What the surface was asked to show, in order.
#[derive(Default)]
pub struct Painted {
    pub panels: BTreeMap<Container, Panel>,
    pub activations: Vec<Section>,
    pub resets: Vec<FormKind>,
    pub commits: usize,
}

#[derive(Clone, Default)]
pub struct RecordingSurface(pub Arc<Mutex<Painted>>);

impl Surface for RecordingSurface {
    fn fill(&mut self, container: Container, panel: Panel) {
        self.0.lock().unwrap().panels.insert(container, panel);
    }

    fn activate(&mut self, section: Section) {
        self.0.lock().unwrap().activations.push(section);
    }

    fn reset_form(&mut self, form: FormKind) {
        self.0.lock().unwrap().resets.push(form);
    }

    fn commit(&mut self) {
        self.0.lock().unwrap().commits += 1;
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier(pub Arc<Mutex<Vec<Notice>>>);

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

/// Keeps every chart it is asked to draw and paints its labels.
#[derive(Clone, Default)]
pub struct RecordingChart(pub Arc<Mutex<Vec<ChartConfig>>>);

impl ChartRenderer for RecordingChart {
    fn render(&self, config: &ChartConfig) -> Panel {
        self.0.lock().unwrap().push(config.clone());
        Panel::new(
            config.data.labels.join(","),
            serde_json::to_value(config).unwrap(),
        )
    }
}

pub struct Harness {
    pub app: App,
    pub api: FakeApi,
    pub surface: RecordingSurface,
    pub notices: RecordingNotifier,
    pub charts: RecordingChart,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        let surface = RecordingSurface::default();
        let notices = RecordingNotifier::default();
        let charts = RecordingChart::default();
        let options = DisplayOptions::new(DateLocale::Iso)
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let app = App::new(
            Arc::new(api.clone()),
            Box::new(surface.clone()),
            Box::new(notices.clone()),
            Box::new(charts.clone()),
            options,
        );

        Self {
            app,
            api,
            surface,
            notices,
            charts,
        }
    }

    pub fn panel(&self, container: Container) -> Option<Panel> {
        self.surface.0.lock().unwrap().panels.get(&container).cloned()
    }

    pub fn activations(&self) -> Vec<Section> {
        self.surface.0.lock().unwrap().activations.clone()
    }

    pub fn resets(&self) -> Vec<FormKind> {
        self.surface.0.lock().unwrap().resets.clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.0.lock().unwrap().clone()
    }

    pub fn charts(&self) -> Vec<ChartConfig> {
        self.charts.0.lock().unwrap().clone()
    }

    /// Card titles painted into a card-list container.
    pub fn card_titles(&self, container: Container) -> Vec<String> {
        self.panel(container)
            .map(|panel| {
                panel.data["cards"]
                    .as_array()
                    .map(|cards| {
                        cards
                            .iter()
                            .filter_map(|c| c["title"].as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }
}
