pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::debounce::Phase;
pub use application::picker::{Picker, DEBOUNCE_WINDOW, LANGUAGE_SELECT};
pub use domain::error::PickerError;
pub use domain::model::{Dataset, Selection, Suggestion, Translation};
pub use domain::traits::{Component, SuggestService};
