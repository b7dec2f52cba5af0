use std::fmt;

use super::write_fields;
use crate::presentation::view_models::{CardListViewModel, CardViewModel, CreateView};

impl CreateView for CardListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CardListView { data: self })
    }
}

impl fmt::Display for CardListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct CardListView<'a> {
    data: &'a CardListViewModel,
}

impl<'a> fmt::Display for CardListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.cards.is_empty() {
            return writeln!(f, "{}", self.data.empty_message);
        }
        write_cards(f, &self.data.cards, 0)
    }
}

/// Cards separated by a blank line, fields indented under the title.
pub(super) fn write_cards(
    f: &mut fmt::Formatter<'_>,
    cards: &[CardViewModel],
    indent: usize,
) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        writeln!(f, "{:indent$}#{} {}", "", card.id, card.title, indent = indent)?;
        write_fields(f, &card.fields, indent + 2)?;
    }
    Ok(())
}
