// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// The target shape a binding attempt asks for. Resolution dispatches on the
/// variant by pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelShape {
    /// The raw content node, optionally required to satisfy a subtype.
    Content { constraint: Option<String> },
    /// A plain wrapper.
    Model,
    /// A wrapper constrained to a subtype.
    TypedModel { constraint: String },
    /// Some other convertible type, produced by a named converter.
    Custom { target: String },
}

impl ModelShape {
    pub fn content() -> Self {
        ModelShape::Content { constraint: None }
    }

    pub fn content_of(constraint: impl Into<String>) -> Self {
        ModelShape::Content {
            constraint: Some(constraint.into()),
        }
    }

    pub fn model() -> Self {
        ModelShape::Model
    }

    pub fn typed_model(constraint: impl Into<String>) -> Self {
        ModelShape::TypedModel {
            constraint: constraint.into(),
        }
    }

    pub fn custom(target: impl Into<String>) -> Self {
        ModelShape::Custom {
            target: target.into(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ModelShape::Content { constraint: None } => "content".to_string(),
            ModelShape::Content {
                constraint: Some(constraint),
            } => format!("content<{}>", constraint),
            ModelShape::Model => "model".to_string(),
            ModelShape::TypedModel { constraint } => format!("model<{}>", constraint),
            ModelShape::Custom { target } => target.clone(),
        }
    }
}
