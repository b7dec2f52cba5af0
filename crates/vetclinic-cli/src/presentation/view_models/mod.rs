pub mod card;
pub mod common;
pub mod config;
pub mod form;
pub mod notice;
pub mod owner;
pub mod pet;
pub mod result;
pub mod select;
pub mod status;

pub use card::{CardField, CardListViewModel, CardViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use form::{FormFieldViewModel, FormViewModel};
pub use notice::Notice;
pub use owner::{OwnerPetsViewModel, OwnerProfileViewModel};
pub use pet::{HealthRecordListViewModel, HealthRecordViewModel, OwnerLinkViewModel, PetDetailViewModel};
pub use result::CommandResultViewModel;
pub use select::{SelectOption, SelectViewModel};
pub use status::StatusViewModel;

use std::fmt;

/// Bridge from a view model to the text layout that displays it.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
