//! Account persistence.
//!
//! The account (token, email, profiles) is stored as pretty-printed
//! JSON in the platform data directory and replaced atomically via a
//! temp file so a crash mid-write never truncates it. Which profile is
//! selected is session state and is intentionally not stored.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use vitrine_model::Account;

const APP_DIR: &str = "vitrine";
const ACCOUNT_FILE: &str = "account.json";

/// Errors raised by account storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no platform data directory available")]
    NoDataDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("stored account is invalid: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Location of the persisted account file.
pub fn account_path() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(base.join(APP_DIR).join(ACCOUNT_FILE))
}

/// Load the persisted account, `None` when none has been written yet.
pub fn load_account() -> Result<Option<Account>, StorageError> {
    load_from(&account_path()?)
}

/// Persist the account, replacing any previous file atomically.
pub fn save_account(account: &Account) -> Result<(), StorageError> {
    save_to(&account_path()?, account)
}

/// Remove the persisted account (logout).
pub fn clear_account() -> Result<(), StorageError> {
    let path = account_path()?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn load_from(path: &Path) -> Result<Option<Account>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

fn save_to(path: &Path, account: &Account) -> Result<(), StorageError> {
    let dir = path.parent().ok_or(StorageError::NoDataDir)?;
    fs::create_dir_all(dir)?;

    let encoded = serde_json::to_vec_pretty(account)?;
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(&encoded)?;
    staged
        .persist(path)
        .map_err(|persist| StorageError::Io(persist.error))?;

    log::debug!("account persisted to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_from, save_to};
    use vitrine_model::{Account, Profile};

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");

        let account = Account {
            token: Some("token-123".into()),
            email: Some("viewer@example.com".into()),
            profiles: vec![Profile::new("Ada", "avatars/01.png")],
        };

        save_to(&path, &account).unwrap();
        let loaded = load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, account);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");
        assert!(load_from(&path).unwrap().is_none());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");

        let mut account = Account::default();
        save_to(&path, &account).unwrap();

        account.email = Some("second@example.com".into());
        save_to(&path, &account).unwrap();

        let loaded = load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.email.as_deref(), Some("second@example.com"));
    }
}
