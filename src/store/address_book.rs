//! In-memory contact store backed by a JSON file.

use super::encoding::{TextEncoding, FALLBACK_ENCODINGS};
use super::file_format::{ContactEntry, ContactsFile};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// All contacts, keyed by name.
///
/// Iteration and search results are ordered by name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, replacing any contact with the same name.
    pub fn add_record(&mut self, contact: Contact) {
        self.entries.insert(contact.name().to_string(), contact);
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.values()
    }

    /// Contacts whose name or phone contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();

        self.entries
            .values()
            .filter(|contact| {
                let name_match = contact.name().to_lowercase().contains(&query);
                let phone_match = contact
                    .phone()
                    .filter(|phone| !phone.is_empty())
                    .map(|phone| phone.as_str().to_lowercase().contains(&query))
                    .unwrap_or(false);

                name_match || phone_match
            })
            .collect()
    }

    /// Write every contact to `path` as UTF-8 JSON, replacing the file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();

        let file = ContactsFile {
            contacts: self
                .entries
                .iter()
                .map(|(name, contact)| (name.clone(), ContactEntry::from_contact(contact)))
                .collect(),
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        file.serialize(&mut serializer)?;

        fs::write(path, &buf).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), contacts = self.entries.len(), "Saved contacts");
        Ok(())
    }

    /// Replace the contents of the store with the contacts in `path`.
    ///
    /// A missing file leaves the store empty. A file that is not UTF-8 is
    /// retried with each of [`FALLBACK_ENCODINGS`]. The store is only
    /// modified when the whole file loads; on error the previous contacts
    /// are kept.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Contacts file not found, starting empty");
                self.entries.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let file = match read_contacts(&bytes, TextEncoding::Utf8) {
            Some(result) => result?,
            None => {
                warn!(
                    path = %path.display(),
                    "Failed to decode contacts file as utf-8, trying other encodings"
                );
                read_with_fallback(&bytes, path)?
            }
        };

        let mut entries = BTreeMap::new();
        for (key, entry) in file.contacts {
            let contact = entry.into_contact(&key)?;
            entries.insert(contact.name().to_string(), contact);
        }

        debug!(path = %path.display(), contacts = entries.len(), "Loaded contacts");
        self.entries = entries;
        Ok(())
    }
}

/// Decode `bytes` with `encoding` and parse the result.
///
/// `None` when the bytes are not valid in that encoding.
fn read_contacts(bytes: &[u8], encoding: TextEncoding) -> Option<StoreResult<ContactsFile>> {
    let text = encoding.decode(bytes)?;
    Some(serde_json::from_str(&text).map_err(StoreError::from))
}

fn read_with_fallback(bytes: &[u8], path: &Path) -> StoreResult<ContactsFile> {
    for encoding in FALLBACK_ENCODINGS {
        match read_contacts(bytes, encoding) {
            Some(Ok(file)) => {
                info!(%encoding, "Contacts file decoded");
                return Ok(file);
            }
            Some(Err(err)) => {
                warn!(%encoding, error = %err, "Decoded contacts file is not valid JSON");
            }
            None => warn!(%encoding, "Failed to decode contacts file"),
        }
    }

    Err(StoreError::Undecodable {
        path: path.to_path_buf(),
    })
}
