use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::{RosterError, RosterResult};

/// A fully specified account: one key pair and one host alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub name: String,
    pub email: String,
}

/// Raw roster entry as read from YAML.
///
/// Fields are optional so that a single incomplete entry does not fail the
/// whole roster; incomplete entries are skipped during provisioning.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AccountRecord {
    /// Returns the validated account, or `None` when a required field is absent.
    pub fn validate(&self) -> Option<Account> {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => Some(Account {
                name: name.clone(),
                email: email.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    accounts: Option<Vec<AccountRecord>>,
}

/// The declarative account list.
#[derive(Debug)]
pub struct Roster {
    pub accounts: Vec<AccountRecord>,
}

impl Roster {
    /// Load the roster from a YAML file with a required `accounts` sequence.
    pub fn load(path: &Path) -> RosterResult<Self> {
        if !path.exists() {
            return Err(RosterError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let file: RosterFile =
            serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParse {
                message: e.to_string(),
            })?;

        let accounts = file.accounts.ok_or(RosterError::MissingAccountsSection)?;
        Ok(Roster { accounts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_both_fields() {
        let record = AccountRecord {
            name: Some("work".to_string()),
            email: Some("work@example.com".to_string()),
        };
        assert_eq!(
            record.validate(),
            Some(Account {
                name: "work".to_string(),
                email: "work@example.com".to_string(),
            })
        );

        let missing_email = AccountRecord {
            name: Some("work".to_string()),
            email: None,
        };
        assert_eq!(missing_email.validate(), None);

        let missing_name = AccountRecord {
            name: None,
            email: Some("work@example.com".to_string()),
        };
        assert_eq!(missing_name.validate(), None);
    }

    #[test]
    fn load_parses_accounts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "accounts:\n  - name: work\n    email: work@example.com\n",
        )
        .unwrap();

        let roster = Roster::load(&path).unwrap();
        assert_eq!(roster.accounts.len(), 1);
        assert_eq!(
            roster.accounts[0].validate().unwrap().name,
            "work".to_string()
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Roster::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, RosterError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_rejects_missing_accounts_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "users:\n  - name: work\n").unwrap();

        let err = Roster::load(&path).unwrap_err();
        assert!(matches!(err, RosterError::MissingAccountsSection));
    }

    #[test]
    fn load_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "accounts: [\n").unwrap();

        let err = Roster::load(&path).unwrap_err();
        assert!(matches!(err, RosterError::ConfigParse { .. }));
    }
}
