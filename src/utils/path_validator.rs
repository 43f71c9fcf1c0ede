use crate::models::{RosterError, RosterResult};

/// Validate an account name before it is used to derive key file names.
pub fn validate_account_name(name: &str) -> RosterResult<()> {
    if name.is_empty() {
        return Err(RosterError::InvalidAccountName {
            message: "Account name cannot be empty".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(RosterError::PathTraversalDetected {
            path: name.to_string(),
        });
    }

    if name == "." || name == ".." {
        return Err(RosterError::PathTraversalDetected {
            path: name.to_string(),
        });
    }

    if name.contains('\0') {
        return Err(RosterError::InvalidAccountName {
            message: "Account name contains null bytes".to_string(),
        });
    }

    if name.len() > 255 {
        return Err(RosterError::InvalidAccountName {
            message: "Account name too long (max 255 characters)".to_string(),
        });
    }

    Ok(())
}
