use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Account, Roster, RosterResult};
use crate::services::KeyManager;
use crate::utils::{contract_home, render_config, HostEntry, SERVICE_HOST};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Drives a full provisioning run: roster in, keys and client config out.
pub struct Provisioner {
    key_manager: KeyManager,
    config_path: PathBuf,
}

impl Provisioner {
    pub fn new(ssh_dir: PathBuf) -> Self {
        let config_path = ssh_dir.join("config");
        Self {
            key_manager: KeyManager::new(ssh_dir),
            config_path,
        }
    }

    /// Provisioner generating keys of a non-default size.
    pub fn with_key_bits(ssh_dir: PathBuf, key_bits: usize) -> Self {
        let config_path = ssh_dir.join("config");
        Self {
            key_manager: KeyManager::with_key_bits(ssh_dir, key_bits),
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Provision every account in the roster file.
    ///
    /// Directory permissions are enforced before the roster is read, so an
    /// invalid roster still leaves the storage directory locked down. Entries
    /// missing required fields are skipped; the client configuration is
    /// rewritten once at the end, covering the provisioned accounts only.
    pub fn process_accounts(&self, roster_path: &Path) -> RosterResult<()> {
        self.key_manager.ensure_ssh_dir()?;

        let roster = Roster::load(roster_path)?;

        let mut provisioned = Vec::new();
        for record in &roster.accounts {
            let Some(account) = record.validate() else {
                println!(
                    "Skipping account entry with missing required fields: {:?}",
                    record
                );
                continue;
            };

            println!("\nProcessing account: {}", account.name);
            let key = self
                .key_manager
                .generate_key_pair(&account.name, &account.email)?;

            println!(
                "Generated SSH key pair for {} ({})",
                account.name, key.fingerprint
            );
            println!("\nAdd this public key to your account on {}:", SERVICE_HOST);
            println!("{}", key.public_key_line.trim());

            provisioned.push(account);
        }

        self.write_client_config(&provisioned)?;
        println!("\nSSH config has been updated successfully!");

        println!("\nTo use a specific account, clone repositories with these URLs:");
        for account in &provisioned {
            println!("git@{}-{}:username/repository.git", SERVICE_HOST, account.name);
        }

        Ok(())
    }

    /// Overwrite the client configuration with one stanza per account and set
    /// owner-only permissions on it.
    pub fn write_client_config(&self, accounts: &[Account]) -> RosterResult<()> {
        let entries: Vec<HostEntry> = accounts
            .iter()
            .map(|account| {
                let identity = self
                    .key_manager
                    .ssh_dir()
                    .join(format!("id_rsa_{}", account.name));
                HostEntry::for_account(&account.name, contract_home(&identity))
            })
            .collect();

        fs::write(&self.config_path, render_config(&entries))?;

        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.config_path, perms)?;
        }

        tracing::info!(
            "[provisioner] Wrote client config with {} host aliases",
            entries.len()
        );
        Ok(())
    }
}
