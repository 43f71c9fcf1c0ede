use std::path::Path;

/// Hosting service the generated host aliases resolve to.
pub const SERVICE_HOST: &str = "service.com";

/// Login user expected by the hosting service.
pub const SERVICE_USER: &str = "git";

/// One host-alias stanza of the SSH client configuration.
#[derive(Debug, Clone)]
pub struct HostEntry {
    /// Synthetic host alias
    pub alias: String,
    /// Actual hostname
    pub hostname: String,
    /// Username
    pub user: String,
    /// Identity file path as rendered into the config
    pub identity_file: String,
    /// Restrict authentication to the identity file
    pub identities_only: bool,
}

impl HostEntry {
    /// Entry binding `service.com-{name}` to the real host and the account's
    /// identity file.
    pub fn for_account(account_name: &str, identity_file: impl Into<String>) -> Self {
        Self {
            alias: format!("{}-{}", SERVICE_HOST, account_name),
            hostname: SERVICE_HOST.to_string(),
            user: SERVICE_USER.to_string(),
            identity_file: identity_file.into(),
            identities_only: true,
        }
    }

    /// Render the stanza in OpenSSH client config syntax.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Host {}\n", self.alias));
        out.push_str(&format!("    HostName {}\n", self.hostname));
        out.push_str(&format!("    User {}\n", self.user));
        out.push_str(&format!("    IdentityFile {}\n", self.identity_file));
        if self.identities_only {
            out.push_str("    IdentitiesOnly yes\n");
        }
        out
    }
}

/// Render the full client configuration, one stanza per entry, separated by
/// blank lines.
pub fn render_config(entries: &[HostEntry]) -> String {
    entries
        .iter()
        .map(HostEntry::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abbreviate paths under the user's home directory to `~/...` form.
pub fn contract_home(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}
