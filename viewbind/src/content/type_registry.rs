// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::node::ContentTypeInfo;

#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeDef {
    pub alias: String,
    #[serde(default)]
    pub inherits: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeDocument {
    types: Vec<ContentTypeDef>,
}

#[derive(Debug)]
pub enum RegistryError {
    Io(std::io::Error),
    Ron(ron::error::SpannedError),
    DuplicateAlias(String),
    UnknownParent { alias: String, parent: String },
    InheritanceCycle(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Io(err) => write!(f, "type registry I/O failed: {}", err),
            RegistryError::Ron(err) => write!(f, "type registry parse failed: {}", err),
            RegistryError::DuplicateAlias(alias) => {
                write!(f, "content type '{}' is defined more than once", alias)
            }
            RegistryError::UnknownParent { alias, parent } => {
                write!(f, "content type '{}' inherits unknown type '{}'", alias, parent)
            }
            RegistryError::InheritanceCycle(alias) => {
                write!(f, "content type '{}' is part of an inheritance cycle", alias)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err)
    }
}

impl From<ron::error::SpannedError> for RegistryError {
    fn from(err: ron::error::SpannedError) -> Self {
        RegistryError::Ron(err)
    }
}

/// Content-type definitions with inheritance chains flattened at load time,
/// so "does this type satisfy that alias" never needs more than a list scan.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, ContentTypeInfo>,
}

impl TypeRegistry {
    pub fn from_defs(defs: Vec<ContentTypeDef>) -> Result<Self, RegistryError> {
        let mut by_alias: HashMap<String, ContentTypeDef> = HashMap::new();
        for def in defs {
            if by_alias.contains_key(&def.alias) {
                return Err(RegistryError::DuplicateAlias(def.alias));
            }
            by_alias.insert(def.alias.clone(), def);
        }

        let mut types = HashMap::new();
        for def in by_alias.values() {
            let mut composition = Vec::new();
            let mut current = def.inherits.clone();
            while let Some(parent) = current {
                if parent == def.alias || composition.contains(&parent) {
                    return Err(RegistryError::InheritanceCycle(def.alias.clone()));
                }
                let parent_def = by_alias.get(&parent).ok_or_else(|| {
                    RegistryError::UnknownParent {
                        alias: def.alias.clone(),
                        parent: parent.clone(),
                    }
                })?;
                composition.push(parent.clone());
                current = parent_def.inherits.clone();
            }
            types.insert(
                def.alias.clone(),
                ContentTypeInfo::with_composition(def.alias.clone(), composition),
            );
        }

        Ok(Self { types })
    }

    pub fn from_ron_str(raw: &str) -> Result<Self, RegistryError> {
        let document: TypeDocument = ron::from_str(raw)?;
        Self::from_defs(document.types)
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let raw = fs::read_to_string(path)?;
        Self::from_ron_str(&raw)
    }

    pub fn get(&self, alias: &str) -> Option<&ContentTypeInfo> {
        self.types.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.types.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
