use std::fmt;

use crate::presentation::view_models::{CreateView, SelectViewModel};

impl CreateView for SelectViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(SelectView { data: self })
    }
}

impl fmt::Display for SelectViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct SelectView<'a> {
    data: &'a SelectViewModel,
}

impl<'a> fmt::Display for SelectView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .options
            .iter()
            .map(|o| o.value.len())
            .max()
            .unwrap_or(0)
            .max(1);

        for option in &self.data.options {
            let value = if option.value.is_empty() {
                "-"
            } else {
                option.value.as_str()
            };
            writeln!(f, "  {:>width$}  {}", value, option.label, width = width)?;
        }
        Ok(())
    }
}
