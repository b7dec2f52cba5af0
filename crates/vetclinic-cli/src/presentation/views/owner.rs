use std::fmt;

use super::card::write_cards;
use super::write_fields;
use crate::presentation::view_models::{CreateView, OwnerPetsViewModel, OwnerProfileViewModel};

impl CreateView for OwnerProfileViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(OwnerProfileView { data: self })
    }
}

impl fmt::Display for OwnerProfileViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct OwnerProfileView<'a> {
    data: &'a OwnerProfileViewModel,
}

impl<'a> fmt::Display for OwnerProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{})", self.data.full_name, self.data.id)?;
        write_fields(f, &self.data.fields, 2)
    }
}

impl CreateView for OwnerPetsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(OwnerPetsView { data: self })
    }
}

impl fmt::Display for OwnerPetsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct OwnerPetsView<'a> {
    data: &'a OwnerPetsViewModel,
}

impl<'a> fmt::Display for OwnerPetsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.title)?;
        if let Some(message) = &self.data.empty_message {
            return writeln!(f, "  {}", message);
        }
        write_cards(f, &self.data.cards, 2)
    }
}
