// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fmt;
use std::sync::Arc;

use crate::content::node::PublishedContent;

/// The "has content" capability: any value that carries exactly one published
/// content node.
pub trait ContentCarrier: Send + Sync {
    fn content(&self) -> Arc<dyn PublishedContent>;
}

#[derive(Debug)]
pub struct ConstraintError {
    pub constraint: String,
    pub actual: String,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content type '{}' does not satisfy constraint '{}'",
            self.actual, self.constraint
        )
    }
}

impl std::error::Error for ConstraintError {}

/// The view-model wrapper: one content node, optionally with a declared
/// subtype constraint. A constrained wrapper can only be constructed with a
/// node whose type satisfies the constraint.
#[derive(Clone)]
pub struct ContentModel {
    content: Arc<dyn PublishedContent>,
    constraint: Option<String>,
}

impl ContentModel {
    pub fn new(content: Arc<dyn PublishedContent>) -> Self {
        Self {
            content,
            constraint: None,
        }
    }

    pub fn constrained(
        content: Arc<dyn PublishedContent>,
        constraint: impl Into<String>,
    ) -> Result<Self, ConstraintError> {
        let constraint = constraint.into();
        if !content.content_type().satisfies(&constraint) {
            return Err(ConstraintError {
                actual: content.content_type().alias.clone(),
                constraint,
            });
        }
        Ok(Self {
            content,
            constraint: Some(constraint),
        })
    }

    pub fn content(&self) -> Arc<dyn PublishedContent> {
        self.content.clone()
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    pub fn describe(&self) -> String {
        match &self.constraint {
            Some(constraint) => format!("model<{}>", constraint),
            None => "model".to_string(),
        }
    }
}

impl ContentCarrier for ContentModel {
    fn content(&self) -> Arc<dyn PublishedContent> {
        self.content.clone()
    }
}

impl fmt::Debug for ContentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentModel")
            .field("content", &self.content.alias())
            .field("constraint", &self.constraint)
            .finish()
    }
}

/// What the pipeline can hand the resolver.
#[derive(Clone)]
pub enum BindingSource {
    Content(Arc<dyn PublishedContent>),
    Model(ContentModel),
    Carrier(Arc<dyn ContentCarrier>),
    Value(serde_json::Value),
}

impl BindingSource {
    pub fn describe(&self) -> String {
        match self {
            BindingSource::Content(node) => node.content_type().alias.clone(),
            BindingSource::Model(model) => model.describe(),
            BindingSource::Carrier(carrier) => {
                format!("carrier<{}>", carrier.content().content_type().alias)
            }
            BindingSource::Value(_) => "value".to_string(),
        }
    }
}

impl fmt::Debug for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingSource({})", self.describe())
    }
}

/// The value a successful resolution produces.
#[derive(Clone)]
pub enum BoundModel {
    Content(Arc<dyn PublishedContent>),
    Model(ContentModel),
    Value(serde_json::Value),
}

impl BoundModel {
    pub fn as_content(&self) -> Option<Arc<dyn PublishedContent>> {
        match self {
            BoundModel::Content(node) => Some(node.clone()),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&ContentModel> {
        match self {
            BoundModel::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            BoundModel::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for BoundModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundModel::Content(node) => write!(f, "BoundModel::Content({})", node.alias()),
            BoundModel::Model(model) => write!(f, "BoundModel::Model({})", model.describe()),
            BoundModel::Value(_) => write!(f, "BoundModel::Value"),
        }
    }
}
