pub mod domain;
pub mod error;
pub mod form;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use form::{FieldPair, FormFields};
pub use util::*;
