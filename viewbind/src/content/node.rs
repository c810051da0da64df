// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

pub fn content_id_hex(id: ContentId) -> String {
    format!("{:016x}", id.0)
}

pub fn parse_content_id_hex(raw: &str) -> Result<ContentId, String> {
    let trimmed = raw.trim();
    if trimmed.len() != 16 {
        return Err("content id must be 16 hex chars".to_string());
    }
    if !trimmed.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err("content id must be hex".to_string());
    }
    let value =
        u64::from_str_radix(trimmed, 16).map_err(|_| "content id parse failed".to_string())?;
    Ok(ContentId(value))
}

/// A node's concrete content type: its own alias plus the flattened chain of
/// ancestor aliases it satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeInfo {
    pub alias: String,
    #[serde(default)]
    pub composition: Vec<String>,
}

impl ContentTypeInfo {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            composition: Vec::new(),
        }
    }

    pub fn with_composition(alias: impl Into<String>, composition: Vec<String>) -> Self {
        Self {
            alias: alias.into(),
            composition,
        }
    }

    pub fn satisfies(&self, alias: &str) -> bool {
        self.alias == alias || self.composition.iter().any(|ancestor| ancestor == alias)
    }
}

/// The "is content" capability. Nodes are immutable once constructed and are
/// shared as `Arc<dyn PublishedContent>`.
pub trait PublishedContent: Send + Sync {
    fn id(&self) -> ContentId;
    fn alias(&self) -> &str;
    fn name(&self) -> &str;
    fn content_type(&self) -> &ContentTypeInfo;
    fn property(&self, name: &str) -> Option<&serde_json::Value>;
    fn to_json(&self) -> serde_json::Value;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedNode {
    pub id: ContentId,
    pub alias: String,
    #[serde(default)]
    pub name: String,
    pub content_type: ContentTypeInfo,
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl PublishedContent for PublishedNode {
    fn id(&self) -> ContentId {
        self.id
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &ContentTypeInfo {
        &self.content_type
    }

    fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
