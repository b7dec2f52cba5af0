use std::fmt;

use crate::presentation::view_models::{CreateView, FormViewModel};

impl CreateView for FormViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(FormView { data: self })
    }
}

impl fmt::Display for FormViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct FormView<'a> {
    data: &'a FormViewModel,
}

impl<'a> fmt::Display for FormView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .fields
            .iter()
            .map(|field| field.name.len())
            .max()
            .unwrap_or(0);

        for field in &self.data.fields {
            write!(f, "  {:<width$}  {}", field.name, field.label, width = width)?;
            if field.required {
                write!(f, " *")?;
            }
            if let Some(choices) = field.choices {
                write!(f, "  (see {})", choices)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Submit with: {}", self.data.submit)
    }
}
