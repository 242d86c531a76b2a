pub mod player;
pub mod record;
pub mod role;
pub mod store;

pub use player::{Contact, MembershipStatus, PlayerError, PlayerRecord};
pub use record::Record;
pub use role::{RoleError, RoleRecord};
pub use store::{CollectionStore, StoreError};
