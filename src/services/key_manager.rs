use std::fs;
use std::path::PathBuf;

use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use ssh_key::private::RsaKeypair;
use ssh_key::{HashAlg, PrivateKey};

use crate::models::{RosterError, RosterResult};
use crate::utils::validate_account_name;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Key size used for provisioned accounts.
const DEFAULT_KEY_BITS: usize = 4096;

/// A freshly generated key pair, written to disk.
#[derive(Debug, Clone)]
pub struct ProvisionedKey {
    pub account: String,
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
    /// Single-line OpenSSH public key text, as uploaded to the hosting service
    pub public_key_line: String,
    /// SHA-256 fingerprint of the public key
    pub fingerprint: String,
}

/// Generates and stores per-account SSH key pairs.
pub struct KeyManager {
    ssh_dir: PathBuf,
    key_bits: usize,
}

impl KeyManager {
    pub fn new(ssh_dir: PathBuf) -> Self {
        Self {
            ssh_dir,
            key_bits: DEFAULT_KEY_BITS,
        }
    }

    /// Manager generating keys of a non-default size.
    pub fn with_key_bits(ssh_dir: PathBuf, key_bits: usize) -> Self {
        Self { ssh_dir, key_bits }
    }

    pub fn ssh_dir(&self) -> &PathBuf {
        &self.ssh_dir
    }

    /// Create the key storage directory if absent and force owner-only access
    /// on it in either case.
    pub fn ensure_ssh_dir(&self) -> RosterResult<()> {
        if !self.ssh_dir.exists() {
            fs::create_dir_all(&self.ssh_dir)?;
        }

        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o700);
            fs::set_permissions(&self.ssh_dir, perms)?;
        }

        Ok(())
    }

    /// Generate an RSA key pair for the account and write both halves under
    /// the storage directory.
    ///
    /// The private key is serialized as unencrypted PKCS#8 PEM (mode 600),
    /// the public key in single-line OpenSSH format (mode 644). Existing key
    /// files for the same account name are overwritten. The email is recorded
    /// for diagnostics only and never embedded in key material.
    pub fn generate_key_pair(&self, account_name: &str, email: &str) -> RosterResult<ProvisionedKey> {
        validate_account_name(account_name)?;

        let private_key_path = self.ssh_dir.join(format!("id_rsa_{}", account_name));
        let public_key_path = self.ssh_dir.join(format!("id_rsa_{}.pub", account_name));

        tracing::debug!(
            "[key_manager] Generating {}-bit RSA key for {} <{}>",
            self.key_bits,
            account_name,
            email
        );

        let rsa_private =
            RsaPrivateKey::new(&mut OsRng, self.key_bits).map_err(|e| RosterError::KeyGeneration {
                message: format!("Failed to generate RSA key: {}", e),
            })?;

        let private_pem =
            rsa_private
                .to_pkcs8_pem(LineEnding::LF)
                .map_err(|e| RosterError::KeyGeneration {
                    message: format!("Failed to serialize private key: {}", e),
                })?;

        let rsa_keypair = RsaKeypair::try_from(rsa_private)?;
        let private_key = PrivateKey::from(rsa_keypair);

        let public_key = private_key.public_key();
        let public_key_line = public_key
            .to_openssh()
            .map_err(|e| RosterError::KeyGeneration {
                message: format!("Failed to serialize public key: {}", e),
            })?;
        let fingerprint = public_key.fingerprint(HashAlg::Sha256).to_string();

        fs::write(&private_key_path, private_pem.as_bytes())?;
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&private_key_path, perms)?;
        }

        fs::write(&public_key_path, format!("{}\n", public_key_line.trim()))?;
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o644);
            fs::set_permissions(&public_key_path, perms)?;
        }

        tracing::info!("[key_manager] Generated rsa key: {}", account_name);

        Ok(ProvisionedKey {
            account: account_name.to_string(),
            private_key_path,
            public_key_path,
            public_key_line,
            fingerprint,
        })
    }
}
