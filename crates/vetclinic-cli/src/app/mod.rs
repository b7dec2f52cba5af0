//! The application controller.
//!
//! [`App`] owns the navigator and the injected collaborators (API client,
//! surface, notifier, chart renderer) and runs every interaction to
//! completion before the next one starts.
//!
//! Failures come in two kinds:
//! - a read failure is logged with `error!` and leaves the surface as it
//!   was; the user gets no notice;
//! - a write failure always produces a notice and keeps the form as typed.

pub mod forms;
pub mod navigator;

pub use forms::{FormCommand, FormKind};
pub use navigator::{Container, Destination, Navigator, Section, Transition};

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use vetclinic_client::VetApi;
use vetclinic_types::{FormFields, OwnerId, PetId};

use crate::chart::{ChartRenderer, build_trend_chart};
use crate::presentation::formatters::DisplayOptions;
use crate::presentation::presenters::{
    present_health_records, present_owner_list, present_owner_pets, present_owner_profile,
    present_owner_select, present_pet_detail, present_pet_list, present_pet_select,
};
use crate::presentation::{CreateView, Notifier, Panel, Surface};
use forms::Refresh;

/// How an interaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Input was refused before anything was sent.
    Invalid,
    /// A call to the API failed.
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Destination),
    Submit(FormKind, FormFields),
}

pub struct App {
    api: Arc<dyn VetApi>,
    surface: Box<dyn Surface>,
    notifier: Box<dyn Notifier>,
    chart: Box<dyn ChartRenderer>,
    navigator: Navigator,
    options: DisplayOptions,
}

impl App {
    pub fn new(
        api: Arc<dyn VetApi>,
        surface: Box<dyn Surface>,
        notifier: Box<dyn Notifier>,
        chart: Box<dyn ChartRenderer>,
        options: DisplayOptions,
    ) -> Self {
        Self {
            api,
            surface,
            notifier,
            chart,
            navigator: Navigator::new(),
            options,
        }
    }

    pub fn api(&self) -> &Arc<dyn VetApi> {
        &self.api
    }

    pub fn active_section(&self) -> Option<Section> {
        self.navigator.active()
    }

    /// Fetch pets and owners side by side, paint both lists and both
    /// dropdowns, then show `entry`. Either fetch may fail on its own.
    pub async fn start(&mut self, entry: Section) -> Outcome {
        let api = Arc::clone(&self.api);
        let (pets, owners) = futures::join!(api.list_pets(), api.list_owners());

        let mut outcome = Outcome::Done;
        match pets {
            Ok(pets) => {
                self.fill(Container::PetsList, &present_pet_list(&pets, &self.options));
                self.fill(Container::PetSelect, &present_pet_select(&pets));
            }
            Err(e) => {
                error!(error = %e, "Error loading pets");
                outcome = Outcome::Failed;
            }
        }
        match owners {
            Ok(owners) => {
                self.fill(Container::OwnersList, &present_owner_list(&owners));
                self.fill(Container::OwnerSelect, &present_owner_select(&owners));
            }
            Err(e) => {
                error!(error = %e, "Error loading owners");
                outcome = Outcome::Failed;
            }
        }

        self.activate(entry);
        self.surface.commit();
        outcome
    }

    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::Navigate(destination) => self.navigate(destination).await,
            Action::Submit(kind, fields) => self.submit(kind, &fields).await,
        }
    }

    /// List sections reload on every visit. Detail sections load first and
    /// only become active once their data is painted.
    pub async fn navigate(&mut self, destination: Destination) -> Outcome {
        let outcome = match destination {
            Destination::PetList => {
                self.activate(Section::PetList);
                self.load_pets().await
            }
            Destination::OwnerList => {
                self.activate(Section::OwnerList);
                self.load_owners().await
            }
            Destination::AddPet | Destination::AddOwner | Destination::AddRecord => {
                self.activate(destination.section());
                Outcome::Done
            }
            Destination::PetDetail(id) => self.show_pet(id).await,
            Destination::OwnerDetail(id) => self.show_owner(id).await,
        };
        self.surface.commit();
        outcome
    }

    pub async fn submit(&mut self, kind: FormKind, fields: &FormFields) -> Outcome {
        let command = kind.command();

        if let Err(notice) = command.validate(fields) {
            info!(form = %kind, "form refused before submitting");
            self.notifier.notify(notice);
            return Outcome::Invalid;
        }

        let api = Arc::clone(&self.api);
        match command.submit(api.as_ref(), fields).await {
            Ok(created) => {
                info!(form = %kind, "record created");
                let plan = command.on_success(&created);
                self.notifier.notify(plan.notice);
                self.surface.reset_form(plan.reset_form);
                for refresh in plan.refresh {
                    self.refresh(refresh).await;
                }
                self.navigate(plan.navigate_to).await;
                Outcome::Done
            }
            Err(e) => {
                warn!(form = %kind, error = %e, "submission failed");
                self.notifier.notify(command.on_failure(&e));
                Outcome::Failed
            }
        }
    }

    pub async fn refresh(&mut self, refresh: Refresh) -> Outcome {
        match refresh {
            Refresh::PetList => self.load_pets().await,
            Refresh::OwnerList => self.load_owners().await,
            Refresh::PetSelect => self.load_pet_select().await,
            Refresh::OwnerSelect => self.load_owner_select().await,
        }
    }

    pub async fn load_pets(&mut self) -> Outcome {
        match self.api.list_pets().await {
            Ok(pets) => {
                let list = present_pet_list(&pets, &self.options);
                self.fill(Container::PetsList, &list);
                Outcome::Done
            }
            Err(e) => {
                error!(error = %e, "Error loading pets");
                Outcome::Failed
            }
        }
    }

    pub async fn load_owners(&mut self) -> Outcome {
        match self.api.list_owners().await {
            Ok(owners) => {
                self.fill(Container::OwnersList, &present_owner_list(&owners));
                Outcome::Done
            }
            Err(e) => {
                error!(error = %e, "Error loading owners");
                Outcome::Failed
            }
        }
    }

    pub async fn load_pet_select(&mut self) -> Outcome {
        match self.api.list_pets().await {
            Ok(pets) => {
                self.fill(Container::PetSelect, &present_pet_select(&pets));
                Outcome::Done
            }
            Err(e) => {
                error!(error = %e, "Error loading pet choices");
                Outcome::Failed
            }
        }
    }

    pub async fn load_owner_select(&mut self) -> Outcome {
        match self.api.list_owners().await {
            Ok(owners) => {
                self.fill(Container::OwnerSelect, &present_owner_select(&owners));
                Outcome::Done
            }
            Err(e) => {
                error!(error = %e, "Error loading owner choices");
                Outcome::Failed
            }
        }
    }

    async fn show_pet(&mut self, id: PetId) -> Outcome {
        let api = Arc::clone(&self.api);
        let loaded = futures::try_join!(api.get_pet(id), api.list_health_records_by_pet(id));

        match loaded {
            Ok((pet, records)) => {
                self.fill(Container::PetDetail, &present_pet_detail(&pet, &self.options));
                self.fill(
                    Container::HealthRecords,
                    &present_health_records(&records, &self.options),
                );
                let chart = build_trend_chart(&records, self.options.locale);
                self.surface
                    .fill(Container::HealthChart, self.chart.render(&chart));
                self.activate(Section::PetDetail);
                Outcome::Done
            }
            Err(e) => {
                error!(pet_id = %id, error = %e, "Error loading pet details");
                Outcome::Failed
            }
        }
    }

    async fn show_owner(&mut self, id: OwnerId) -> Outcome {
        let api = Arc::clone(&self.api);
        let loaded = futures::try_join!(api.get_owner(id), api.list_pets_by_owner(id));

        match loaded {
            Ok((owner, pets)) => {
                self.fill(
                    Container::OwnerDetail,
                    &present_owner_profile(&owner, &self.options),
                );
                self.fill(Container::OwnerPets, &present_owner_pets(&pets, &self.options));
                self.activate(Section::OwnerDetail);
                Outcome::Done
            }
            Err(e) => {
                error!(owner_id = %id, error = %e, "Error loading owner details");
                Outcome::Failed
            }
        }
    }

    fn activate(&mut self, section: Section) {
        let transition = self.navigator.activate(section);
        debug!(from = ?transition.previous, to = %transition.next, "section activated");
        self.surface.activate(section);
    }

    fn fill<V>(&mut self, container: Container, view_model: &V)
    where
        V: Serialize + CreateView,
    {
        self.surface
            .fill(container, Panel::from_view_model(view_model));
    }
}

