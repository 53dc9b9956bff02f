use serde::Serialize;
use std::collections::HashSet;

/// Views the application registry can render. Routes refer to views; they don't own them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
    Sudoku,
}

impl ViewId {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sudoku => "Sudoku",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewId,
}

impl RouteRecord {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self { path, name, view }
    }
}

/// The app's route table.
pub const ROUTES: &[RouteRecord] = &[RouteRecord::new("/", "Sudoku", ViewId::Sudoku)];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("Route path must not be empty (route {name:?})")]
    EmptyPath { name: &'static str },
    #[error("Route name must not be empty (path {path:?})")]
    EmptyName { path: &'static str },
    #[error("Route path {path:?} must start with '/'")]
    RelativePath { path: &'static str },
    #[error("Duplicate route path {path:?}")]
    DuplicatePath { path: &'static str },
    #[error("Duplicate route name {name:?}")]
    DuplicateName { name: &'static str },
}

/// Immutable path → view table, validated on construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    /// Build a table, rejecting empty, relative or duplicated paths and names.
    ///
    /// # Errors
    /// Returns the first [`RouteTableError`] found, in declaration order.
    pub fn new(records: &[RouteRecord]) -> Result<Self, RouteTableError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for record in records {
            if record.path.is_empty() {
                return Err(RouteTableError::EmptyPath { name: record.name });
            }
            if record.name.is_empty() {
                return Err(RouteTableError::EmptyName { path: record.path });
            }
            if !record.path.starts_with('/') {
                return Err(RouteTableError::RelativePath { path: record.path });
            }
            if !paths.insert(normalize_path(record.path)) {
                return Err(RouteTableError::DuplicatePath { path: record.path });
            }
            if !names.insert(record.name) {
                return Err(RouteTableError::DuplicateName { name: record.name });
            }
        }
        Ok(Self {
            records: records.to_vec(),
        })
    }

    /// Table built from [`ROUTES`].
    #[must_use]
    pub fn standard() -> Self {
        // ROUTES is checked by `standard_table_is_valid`; skip re-validation at startup.
        Self {
            records: ROUTES.to_vec(),
        }
    }

    /// Exact match on the path part of `location`; query and fragment are ignored.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<&RouteRecord> {
        let wanted = normalize_path(location);
        self.records
            .iter()
            .find(|record| normalize_path(record.path) == wanted)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// JSON rendering of the table, logged when the router starts.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn normalize_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}
