//! Integration tests for the local storage backends
//!
//! These tests verify that the file backend keeps the session keys across
//! reopen, the way browser local storage survives a page reload.

use common::storage::{FileStorage, LocalStorage, MemoryStorage};
use std::sync::Arc;

/// Test that values written through one handle are visible after reopening
#[test]
fn test_file_storage_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.json");

    {
        let storage = FileStorage::open(&path)?;
        storage.set_item("token", "integration_token")?;
        storage.set_item("user", r#"{"email":"jane@example.com"}"#)?;
    }

    let reopened = FileStorage::open(&path)?;
    assert_eq!(
        reopened.get_item("token")?,
        Some("integration_token".to_string())
    );
    assert_eq!(
        reopened.get_item("user")?,
        Some(r#"{"email":"jane@example.com"}"#.to_string())
    );

    // Clean up one key and make sure the removal is persisted too
    reopened.remove_item("token")?;
    let reopened = FileStorage::open(&path)?;
    assert_eq!(reopened.get_item("token")?, None);
    assert!(reopened.get_item("user")?.is_some());

    Ok(())
}

/// Test that both backends can be used behind the same trait object
#[test]
fn test_backends_behind_trait_object() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let backends: Vec<Arc<dyn LocalStorage>> = vec![
        Arc::new(MemoryStorage::new()),
        Arc::new(FileStorage::open(dir.path().join("storage.json"))?),
    ];

    for storage in backends {
        storage.set_item("user", "{}")?;
        assert_eq!(storage.get_item("user")?, Some("{}".to_string()));
        storage.remove_item("user")?;
        assert_eq!(storage.get_item("user")?, None);
    }

    Ok(())
}
