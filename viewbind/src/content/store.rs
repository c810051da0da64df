// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::error;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use super::node::{ContentId, PublishedNode, content_id_hex};
use super::type_registry::TypeRegistry;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Ron(ron::error::SpannedError),
    UnknownContentType { alias: String, content_type: String },
    DuplicateAlias(String),
    DuplicateId(ContentId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "content store I/O failed: {}", err),
            StoreError::Ron(err) => write!(f, "content file parse failed: {}", err),
            StoreError::UnknownContentType {
                alias,
                content_type,
            } => write!(
                f,
                "content '{}' declares unknown content type '{}'",
                alias, content_type
            ),
            StoreError::DuplicateAlias(alias) => {
                write!(f, "content alias '{}' is already in use", alias)
            }
            StoreError::DuplicateId(id) => {
                write!(f, "content id {} is already in use", content_id_hex(*id))
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<ron::error::SpannedError> for StoreError {
    fn from(err: ron::error::SpannedError) -> Self {
        StoreError::Ron(err)
    }
}

/// On-disk form of a node: the content type is an alias resolved against the
/// type registry when the file is loaded.
#[derive(Debug, Deserialize)]
struct NodeDocument {
    id: ContentId,
    alias: String,
    #[serde(default)]
    name: String,
    content_type: String,
    #[serde(default)]
    properties: BTreeMap<String, serde_json::Value>,
}

#[derive(Default)]
struct StoreData {
    by_alias: HashMap<String, Arc<PublishedNode>>,
    by_id: HashMap<ContentId, Arc<PublishedNode>>,
}

#[derive(Clone)]
pub struct ContentStore {
    data: Arc<RwLock<StoreData>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData::default())),
        }
    }

    pub fn insert(&self, node: PublishedNode) -> Result<(), StoreError> {
        let mut data = match self.data.write() {
            Ok(data) => data,
            Err(poisoned) => poisoned.into_inner(),
        };
        if data.by_alias.contains_key(&node.alias) {
            return Err(StoreError::DuplicateAlias(node.alias));
        }
        if data.by_id.contains_key(&node.id) {
            return Err(StoreError::DuplicateId(node.id));
        }
        let node = Arc::new(node);
        data.by_alias.insert(node.alias.clone(), node.clone());
        data.by_id.insert(node.id, node);
        Ok(())
    }

    pub fn get_by_alias(&self, alias: &str) -> Option<Arc<PublishedNode>> {
        let canonical = canonicalize_alias(alias)?;
        let data = match self.data.read() {
            Ok(data) => data,
            Err(_) => {
                error!("ContentStore read lock poisoned in get_by_alias");
                return None;
            }
        };
        data.by_alias.get(&canonical).cloned()
    }

    pub fn get_by_id(&self, id: ContentId) -> Option<Arc<PublishedNode>> {
        let data = match self.data.read() {
            Ok(data) => data,
            Err(_) => {
                error!("ContentStore read lock poisoned in get_by_id");
                return None;
            }
        };
        data.by_id.get(&id).cloned()
    }

    pub fn list(&self) -> Vec<Arc<PublishedNode>> {
        let data = match self.data.read() {
            Ok(data) => data,
            Err(_) => {
                error!("ContentStore read lock poisoned in list");
                return Vec::new();
            }
        };
        data.by_alias.values().cloned().collect()
    }

    /// Load every `*.ron` node file under `dir`, resolving each declared
    /// content type through the registry. Returns the number of nodes loaded.
    pub fn load_dir(&self, dir: &Path, registry: &TypeRegistry) -> Result<usize, StoreError> {
        let mut loaded = 0;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("ron") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            let document: NodeDocument = ron::from_str(&raw)?;
            let type_info = registry.get(&document.content_type).ok_or_else(|| {
                StoreError::UnknownContentType {
                    alias: document.alias.clone(),
                    content_type: document.content_type.clone(),
                }
            })?;
            self.insert(PublishedNode {
                id: document.id,
                alias: document.alias,
                name: document.name,
                content_type: type_info.clone(),
                properties: document.properties,
            })?;
            loaded += 1;
        }
        Ok(loaded)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a route path into a store alias: lowercase, no surrounding
/// slashes, no empty or dot segments, no control characters.
pub fn canonicalize_alias(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(|ch| ch.is_control()) {
        return None;
    }

    let mut parts: Vec<&str> = Vec::new();
    for part in trimmed.split('/') {
        if part.is_empty() {
            continue;
        }
        if part == "." || part == ".." {
            return None;
        }
        parts.push(part);
    }

    let alias = parts.join("/").to_ascii_lowercase();
    if alias.is_empty() {
        return None;
    }
    Some(alias)
}
