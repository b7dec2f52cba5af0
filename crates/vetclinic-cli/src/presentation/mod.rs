//! # Presentation Layer
//!
//! Turns domain records into what the user sees. It follows an adaptation
//! of **MVVM (Model-View-ViewModel)**; the data flow is strictly
//! unidirectional.
//!
//! ```text
//! [ App ] --> [ Presenter ] --> [ ViewModel ] --> [ Panel ] --> [ Surface ] ==(Text)==> [ View ] --> stdout
//! (Controller)  (Converter)        (Data)        (text+data)     (Driver)   ==(JSON)==> [ serde_json ]
//! ```
//!
//! One-shot results that are not sections (`status`, `config`) skip the
//! surface and go through a [`Renderer`] instead.
//!
//! ---
//!
//! ## 🌟 Golden Rules
//!
//! ### 1. Placeholders, never blanks 🧪
//! An absent optional field is shown as a fixed placeholder
//! (`not specified`, `not installed`, `unknown`). No view prints an empty
//! value.
//!
//! ### 2. Rendering never mutates its input
//! Presenters take `&[Pet]`, `&Owner`, ... and build new view models.
//!
//! ### 3. The Schema Stability Rule 📦
//! `--format json` dumps the complete ViewModel of every container in the
//! active section. Text layout only affects plain output.
//!
//! ---
//!
//! ## 📂 Directory Guide: Where does code go?
//!
//! ### 1. `view_models/` (The Data Contract)
//! * **What:** Structs that define *what* is displayed.
//! * **Rule:** Pure data containers. Must implement `Serialize`.
//! * **Trait:** Defines `CreateView` to bridge Data and View.
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * **What:** Pure functions from domain records to ViewModels.
//! * **Rule:** Derives display strings (ages, localized dates, units) with
//!   `formatters` and decides *when* to show an empty state or a tip.
//!
//! ### 3. `views/` (The Layout)
//! * **What:** Structs that implement `fmt::Display`.
//! * **Rule:** Indentation and ordering only.
//! * **Pattern:** `struct CardListView<'a> { data: &'a CardListViewModel }`
//!
//! ### 4. `renderers/` (The Driver)
//! * **What:** `Surface`, `Notifier` and `Renderer` and their console
//!   implementations. Switches between JSON and Text output.
//!
//! ### 5. `formatters/` (The Utilities)
//! * **What:** Age and date helpers, display options.
//!
//! ---
//!
//! ## ⚖️ Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | **`view_models/`** |
//! | Change a placeholder or a unit suffix | **`presenters/`** |
//! | Decide *when* to show a "Guidance" | **`presenters/`** |
//! | Change indentation or separators | **`views/`** |
//! | Change how dates look per locale | **`formatters/`** |
//! | Paint somewhere other than stdout | **`renderers/`** (new `Surface`) |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleNotifier, ConsoleRenderer, ConsoleSurface, Notifier, Panel, Renderer, Surface};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, Notice, OutputFormat, StatusBadge, StatusLevel,
};
