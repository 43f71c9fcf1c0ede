pub mod models;
pub mod services;
pub mod utils;

pub use models::{Account, Roster, RosterError, RosterResult};
pub use services::{KeyManager, Provisioner};
