// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::collections::HashMap;
use std::sync::Arc;

use super::model::BindingSource;
use crate::content::node::{PublishedContent, PublishedNode};

pub type NodeConverter =
    Arc<dyn Fn(&BindingSource) -> Option<Arc<dyn PublishedContent>> + Send + Sync>;
pub type TargetConverter =
    Arc<dyn Fn(&BindingSource) -> Option<serde_json::Value> + Send + Sync>;

/// The generic-conversion seam: node converters run in registration order
/// when a source has no direct content relationship, and target converters
/// back `ModelShape::Custom` by name.
#[derive(Clone)]
pub struct ConverterSet {
    node_converters: Vec<NodeConverter>,
    target_converters: HashMap<String, TargetConverter>,
}

impl ConverterSet {
    pub fn empty() -> Self {
        Self {
            node_converters: Vec::new(),
            target_converters: HashMap::new(),
        }
    }

    /// The default set: raw values that deserialize as a published node
    /// convert to that node.
    pub fn new() -> Self {
        let mut set = Self::empty();
        set.register_node_converter(Arc::new(node_from_value));
        set
    }

    pub fn register_node_converter(&mut self, converter: NodeConverter) {
        self.node_converters.push(converter);
    }

    pub fn register_target_converter(
        &mut self,
        target: impl Into<String>,
        converter: TargetConverter,
    ) {
        self.target_converters.insert(target.into(), converter);
    }

    pub(crate) fn node_from_source(
        &self,
        source: &BindingSource,
    ) -> Option<Arc<dyn PublishedContent>> {
        self.node_converters
            .iter()
            .find_map(|converter| converter(source))
    }

    pub(crate) fn target_from_source(
        &self,
        target: &str,
        source: &BindingSource,
    ) -> Option<serde_json::Value> {
        let converter = self.target_converters.get(target)?;
        converter(source)
    }
}

impl Default for ConverterSet {
    fn default() -> Self {
        Self::new()
    }
}

fn node_from_value(source: &BindingSource) -> Option<Arc<dyn PublishedContent>> {
    let BindingSource::Value(value) = source else {
        return None;
    };
    let node: PublishedNode = serde_json::from_value(value.clone()).ok()?;
    Some(Arc::new(node))
}
