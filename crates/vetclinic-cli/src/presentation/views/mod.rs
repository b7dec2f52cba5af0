//! Text layout for each view model.

mod card;
mod config;
mod form;
mod owner;
mod pet;
mod select;
mod status;

use std::fmt;

use crate::presentation::view_models::CardField;

/// `Label: value` lines at a fixed indent.
fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[CardField], indent: usize) -> fmt::Result {
    for field in fields {
        writeln!(f, "{:indent$}{}: {}", "", field.label, field.value, indent = indent)?;
    }
    Ok(())
}
