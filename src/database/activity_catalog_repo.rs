use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CatalogError, Result};
use crate::models::{Activity, ActivityListing};

/// Catalog key for an activity name: trimmed, inner whitespace collapsed to
/// one space, lowercased.
pub fn normalize(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    for segment in name.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized.to_lowercase()
}

#[derive(Debug, Clone, Copy)]
pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: usize,
    pub participants: &'a [&'a str],
}

pub struct CatalogEntry {
    name: String,
    key: String,
    description: String,
    schedule: String,
    max_participants: usize,
    participants: RwLock<Vec<String>>,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    pub fn snapshot(&self) -> Result<Activity> {
        let participants = self.read_participants()?;
        Ok(Activity {
            name: self.name.clone(),
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: participants.clone(),
        })
    }

    /// Appends `email` if it is not enrolled yet and a seat is open.
    /// Both checks and the push happen under one write guard, so the last
    /// seat can only be taken once. Returns the new participant count.
    pub fn enroll(&self, email: &str) -> Result<usize> {
        let mut participants = self.write_participants()?;

        if participants.iter().any(|p| p == email) {
            return Err(CatalogError::AlreadySignedUp {
                email: email.to_string(),
                activity: self.name.clone(),
            });
        }
        if participants.len() >= self.max_participants {
            return Err(CatalogError::ActivityFull {
                activity: self.name.clone(),
            });
        }

        participants.push(email.to_string());
        Ok(participants.len())
    }

    fn read_participants(&self) -> Result<RwLockReadGuard<'_, Vec<String>>> {
        self.participants.read().map_err(|_| CatalogError::Internal {
            message: format!("participants lock poisoned for '{}'", self.name),
        })
    }

    fn write_participants(&self) -> Result<RwLockWriteGuard<'_, Vec<String>>> {
        self.participants.write().map_err(|_| CatalogError::Internal {
            message: format!("participants lock poisoned for '{}'", self.name),
        })
    }
}

/// In-memory activity store. The set of activities is fixed when the
/// catalog is built; only participant lists change afterwards, each behind
/// its own lock.
pub struct ActivityCatalog {
    entries: Vec<CatalogEntry>,
}

impl ActivityCatalog {
    pub fn new<'a, I>(activities: I) -> Result<Self>
    where
        I: IntoIterator<Item = NewActivity<'a>>,
    {
        let mut entries = Vec::new();
        let mut keys = HashSet::new();

        for new in activities {
            let key = normalize(new.name);
            let invalid = |message: &str| CatalogError::InvalidSeed {
                name: new.name.to_string(),
                message: message.to_string(),
            };

            if key.is_empty() {
                return Err(invalid("name is blank"));
            }
            if !keys.insert(key.clone()) {
                return Err(invalid("name collides with another activity"));
            }
            if new.max_participants == 0 {
                return Err(invalid("max_participants must be positive"));
            }
            if new.participants.len() > new.max_participants {
                return Err(invalid("more participants than max_participants"));
            }
            let unique: HashSet<&str> = new.participants.iter().copied().collect();
            if unique.len() != new.participants.len() {
                return Err(invalid("duplicate participant"));
            }

            entries.push(CatalogEntry {
                name: new.name.to_string(),
                key,
                description: new.description.to_string(),
                schedule: new.schedule.to_string(),
                max_participants: new.max_participants,
                participants: RwLock::new(
                    new.participants.iter().map(|p| p.to_string()).collect(),
                ),
            });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose normalized name equals the normalized `name`.
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        let key = normalize(name);
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn list(&self) -> Result<ActivityListing> {
        self.entries
            .iter()
            .map(CatalogEntry::snapshot)
            .collect::<Result<Vec<_>>>()
            .map(ActivityListing)
    }
}
