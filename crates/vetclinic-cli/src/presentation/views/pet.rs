use std::fmt;

use super::write_fields;
use crate::presentation::view_models::{
    CreateView, HealthRecordListViewModel, PetDetailViewModel,
};

impl CreateView for PetDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(PetDetailView { data: self })
    }
}

impl fmt::Display for PetDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct PetDetailView<'a> {
    data: &'a PetDetailViewModel,
}

impl<'a> fmt::Display for PetDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{})", self.data.name, self.data.id)?;
        write_fields(f, &self.data.fields, 2)?;
        writeln!(f, "  {} (#{})", self.data.owner.label, self.data.owner.id)
    }
}

impl CreateView for HealthRecordListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(HealthRecordListView { data: self })
    }
}

impl fmt::Display for HealthRecordListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.create_view())
    }
}

struct HealthRecordListView<'a> {
    data: &'a HealthRecordListViewModel,
}

impl<'a> fmt::Display for HealthRecordListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.title)?;
        for record in &self.data.records {
            writeln!(f, "  {}", record.visit_date)?;
            write_fields(f, &record.fields, 4)?;
        }
        Ok(())
    }
}
