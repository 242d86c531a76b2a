mod confirmation;
mod data_source;
mod navigator;

pub use confirmation::ConfirmationPrompt;
pub use data_source::{DataSource, DataSourceError};
pub use navigator::{NavTarget, Navigator};
