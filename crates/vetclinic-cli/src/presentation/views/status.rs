use std::fmt;

use crate::presentation::view_models::{CreateView, StatusViewModel};

impl CreateView for StatusViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatusView { data: self })
    }
}

impl fmt::Display for StatusViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct StatusView<'a> {
    data: &'a StatusViewModel,
}

impl<'a> fmt::Display for StatusView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {}", "API base:", self.data.api_base)?;
        if let Some(status) = &self.data.status {
            writeln!(f, "{:<12} {}", "Status:", status)?;
        }
        if let Some(database) = &self.data.database {
            writeln!(f, "{:<12} {}", "Database:", database)?;
        }
        if let Some(time) = &self.data.server_time {
            writeln!(f, "{:<12} {}", "Server time:", time)?;
        }
        if let Some(error) = &self.data.error {
            writeln!(f, "{:<12} {}", "Error:", error)?;
        }
        Ok(())
    }
}
