use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::app::forms::FormKind;
use crate::app::navigator::{Container, Section};
use crate::presentation::view_models::{CommandResultViewModel, CreateView, Notice};

/// Output of one-shot commands that are not painted sections.
pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync;
}

/// Rendered content of one container: the text layout and the raw data
/// behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub text: String,
    pub data: Value,
}

impl Panel {
    pub fn new(text: impl Into<String>, data: Value) -> Self {
        Self {
            text: text.into(),
            data,
        }
    }

    pub fn from_view_model<V>(view_model: &V) -> Self
    where
        V: Serialize + CreateView,
    {
        Self {
            text: view_model.create_view().to_string(),
            data: serde_json::to_value(view_model).unwrap_or(Value::Null),
        }
    }
}

/// The layout the client paints into.
///
/// `fill` and `activate` only stage changes; `commit` shows them.
pub trait Surface {
    fn fill(&mut self, container: Container, panel: Panel);
    fn activate(&mut self, section: Section);
    fn reset_form(&mut self, form: FormKind);
    fn commit(&mut self);
}

/// User-facing messages about create operations.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
