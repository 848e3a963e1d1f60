// at-mentions — @mention tracking for editable text fields
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::text::is_blank;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum total candidates kept after filtering.
const MAX_CANDIDATES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    /// Avatar URL. Not shown in the terminal, kept for round-tripping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl User {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), picture: None }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("failed to read user directory {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse user directory {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// People that can be mentioned, loaded from a JSON array of users.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn load(path: &Path) -> Result<Self, UserDirectoryError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| UserDirectoryError::Read { path: path.to_path_buf(), source })?;
        let users: Vec<User> = serde_json::from_str(&raw)
            .map_err(|source| UserDirectoryError::Parse { path: path.to_path_buf(), source })?;
        tracing::info!(count = users.len(), path = %path.display(), "loaded user directory");
        Ok(Self { users })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users whose first name, last name or full name starts with `query`,
    /// case-insensitive. A blank query matches nobody.
    pub fn search(&self, query: &str) -> Vec<User> {
        if is_blank(query) {
            return Vec::new();
        }
        let query_lower = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.first_name.to_lowercase().starts_with(&query_lower)
                    || u.last_name.to_lowercase().starts_with(&query_lower)
                    || u.full_name().to_lowercase().starts_with(&query_lower)
            })
            .take(MAX_CANDIDATES)
            .cloned()
            .collect()
    }
}
