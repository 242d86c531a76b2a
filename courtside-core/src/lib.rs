pub mod application;
pub mod domain;
pub mod seed;
pub mod traits;

pub use application::{
    ActionDispatcher, DeleteFlow, IgnoreReason, PageView, Projection, RosterStats, SessionError,
    ViewCommand, ViewEvent, ViewQuery, ViewSession,
};
pub use domain::{
    CollectionStore, Contact, MembershipStatus, PlayerError, PlayerRecord, Record, RoleError,
    RoleRecord, StoreError,
};
pub use traits::{ConfirmationPrompt, DataSource, DataSourceError, NavTarget, Navigator};
