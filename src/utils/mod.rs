pub mod path_validator;
pub mod ssh_config;

pub use path_validator::validate_account_name;
pub use ssh_config::{contract_home, render_config, HostEntry, SERVICE_HOST, SERVICE_USER};
