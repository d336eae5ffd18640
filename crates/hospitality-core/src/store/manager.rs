use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

/// Named collections, one file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Sectors,
    Businesses,
    Members,
    Shifts,
    Tasks,
    Events,
    Menu,
    Orders,
    Procurement,
    Rooms,
    Bookings,
    Housekeeping,
    Ledger,
}

impl Collection {
    pub const ALL: [Collection; 13] = [
        Collection::Sectors,
        Collection::Businesses,
        Collection::Members,
        Collection::Shifts,
        Collection::Tasks,
        Collection::Events,
        Collection::Menu,
        Collection::Orders,
        Collection::Procurement,
        Collection::Rooms,
        Collection::Bookings,
        Collection::Housekeeping,
        Collection::Ledger,
    ];

    /// File stem under the data directory.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Sectors => "sectors",
            Collection::Businesses => "businesses",
            Collection::Members => "members",
            Collection::Shifts => "shifts",
            Collection::Tasks => "tasks",
            Collection::Events => "events",
            Collection::Menu => "menu",
            Collection::Orders => "orders",
            Collection::Procurement => "procurement",
            Collection::Rooms => "rooms",
            Collection::Bookings => "bookings",
            Collection::Housekeeping => "housekeeping",
            Collection::Ledger => "ledger",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    pub data: T,
    pub saved_at: DateTime<Utc>,
}

impl<T> Stored<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            saved_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.saved_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            if (minutes % 1440) / 60 >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }
}

pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.key()))
    }

    fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Option<Stored<T>>> {
        let name = collection.key();
        let path = self.path(collection);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read collection file: {}", name))?;

        let stored: Stored<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse collection file: {}", name))?;

        Ok(Some(stored))
    }

    /// Load a collection, falling back to `default` when the file is missing
    /// or cannot be parsed.
    pub fn load_or<T: DeserializeOwned>(
        &self,
        collection: Collection,
        default: impl FnOnce() -> T,
    ) -> T {
        match self.read(collection) {
            Ok(Some(stored)) => stored.data,
            Ok(None) => {
                debug!(collection = collection.key(), "No stored data, using default");
                default()
            }
            Err(e) => {
                warn!(collection = collection.key(), error = %e, "Ignoring unreadable collection");
                default()
            }
        }
    }

    pub fn save<T: Serialize>(&self, collection: Collection, data: &T) -> Result<()> {
        let stored = Stored::new(data);
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(self.path(collection), contents)
            .with_context(|| format!("Failed to write collection file: {}", collection.key()))?;
        debug!(collection = collection.key(), "Saved collection");
        Ok(())
    }

    /// How long ago a collection was saved, if it ever was.
    pub fn saved_age(&self, collection: Collection) -> Option<String> {
        match self.read::<serde_json::Value>(collection) {
            Ok(Some(stored)) => Some(stored.age_display()),
            Ok(None) => None,
            Err(e) => {
                debug!(collection = collection.key(), error = %e, "Failed to read collection for age display");
                None
            }
        }
    }

    /// Save ages of every collection, in `Collection::ALL` order.
    pub fn saved_ages(&self) -> Vec<(Collection, Option<String>)> {
        Collection::ALL
            .iter()
            .map(|&c| (c, self.saved_age(c)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
