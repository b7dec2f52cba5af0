use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;
        let marker = if d.exists { "" } else { " (not created)" };
        writeln!(f, "Config file: {}{}", d.path, marker)?;
        writeln!(f)?;
        writeln!(f, "[api]")?;
        writeln!(f, "  base_url     = {}", d.base_url)?;
        writeln!(f, "  timeout_secs = {}", d.timeout_secs)?;
        writeln!(f, "[display]")?;
        writeln!(f, "  locale       = {}", d.locale)?;
        let width = if d.chart_width == 0 {
            "terminal width".to_string()
        } else {
            d.chart_width.to_string()
        };
        writeln!(f, "  chart_width  = {}", width)?;
        writeln!(f, "  chart_height = {}", d.chart_height)
    }
}
