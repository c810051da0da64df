// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::{debug, warn};
use std::sync::Arc;

use super::convert::ConverterSet;
use super::errors::{BindingErrorKind, ModelBindingError, compose_message};
use super::model::{BindingSource, BoundModel, ContentModel};
use super::observer::{BindingFailureNotice, BindingFailureObserver};
use super::shape::ModelShape;
use crate::content::node::PublishedContent;

/// Decides whether and how a source value becomes a value of the requested
/// shape. A single synchronous pass with no retries; the only side effect is
/// the failure notification.
pub struct ModelResolver {
    converters: ConverterSet,
    observers: Vec<Arc<dyn BindingFailureObserver>>,
}

impl ModelResolver {
    pub fn new() -> Self {
        Self::with_converters(ConverterSet::new())
    }

    pub fn with_converters(converters: ConverterSet) -> Self {
        Self {
            converters,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn BindingFailureObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Ordered decision procedure, first match wins:
    /// absent source, identity, unwrap-or-convert to a node, shape dispatch,
    /// last-resort custom conversion.
    pub fn resolve(
        &self,
        source: Option<&BindingSource>,
        shape: &ModelShape,
    ) -> Result<Option<BoundModel>, ModelBindingError> {
        let Some(source) = source else {
            return Ok(None);
        };

        if let Some(bound) = identity(source, shape) {
            debug!(
                "Source {} already satisfies {}, passing through",
                source.describe(),
                shape.describe()
            );
            return Ok(Some(bound));
        }

        if let Some(node) = self.obtain_node(source) {
            match shape {
                ModelShape::Content { constraint } => {
                    if let Some(constraint) = constraint
                        && !node.content_type().satisfies(constraint)
                    {
                        return Err(self.fail(
                            BindingErrorKind::ContentTypeMismatch,
                            source,
                            shape,
                            true,
                            false,
                        ));
                    }
                    return Ok(Some(BoundModel::Content(node)));
                }
                ModelShape::Model => {
                    return Ok(Some(BoundModel::Model(ContentModel::new(node))));
                }
                ModelShape::TypedModel { constraint } => {
                    return match ContentModel::constrained(node, constraint.clone()) {
                        Ok(model) => Ok(Some(BoundModel::Model(model))),
                        Err(_) => Err(self.fail(
                            BindingErrorKind::ContentTypeMismatch,
                            source,
                            shape,
                            true,
                            true,
                        )),
                    };
                }
                ModelShape::Custom { .. } => {}
            }
        }

        if let ModelShape::Custom { target } = shape
            && let Some(value) = self.converters.target_from_source(target, source)
        {
            return Ok(Some(BoundModel::Value(value)));
        }

        Err(self.fail(
            BindingErrorKind::UnsupportedConversion,
            source,
            shape,
            false,
            false,
        ))
    }

    fn obtain_node(&self, source: &BindingSource) -> Option<Arc<dyn PublishedContent>> {
        match source {
            BindingSource::Content(node) => Some(node.clone()),
            BindingSource::Model(model) => Some(model.content()),
            BindingSource::Carrier(carrier) => Some(carrier.content()),
            BindingSource::Value(_) => self.converters.node_from_source(source),
        }
    }

    fn fail(
        &self,
        kind: BindingErrorKind,
        source: &BindingSource,
        shape: &ModelShape,
        source_is_content: bool,
        model_is_content: bool,
    ) -> ModelBindingError {
        let source_type = source.describe();
        let target_type = shape.describe();
        let message = compose_message(
            source_is_content,
            model_is_content,
            &source_type,
            &target_type,
        );
        let mut notice = BindingFailureNotice::new(source_type, target_type, message);
        for observer in &self.observers {
            observer.on_binding_failure(&mut notice);
        }
        warn!("{}", notice.message());
        ModelBindingError::from_notice(kind, source_is_content, model_is_content, notice)
    }
}

impl Default for ModelResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Step two of the decision procedure: the source already is a value of the
/// requested shape. Returns it unchanged, same node handle, same wrapper.
fn identity(source: &BindingSource, shape: &ModelShape) -> Option<BoundModel> {
    match (source, shape) {
        (BindingSource::Content(node), ModelShape::Content { constraint: None }) => {
            Some(BoundModel::Content(node.clone()))
        }
        (
            BindingSource::Content(node),
            ModelShape::Content {
                constraint: Some(constraint),
            },
        ) if node.content_type().satisfies(constraint) => {
            Some(BoundModel::Content(node.clone()))
        }
        (BindingSource::Model(model), ModelShape::Model) => {
            Some(BoundModel::Model(model.clone()))
        }
        (BindingSource::Model(model), ModelShape::TypedModel { constraint })
            if model.constraint() == Some(constraint.as_str()) =>
        {
            Some(BoundModel::Model(model.clone()))
        }
        _ => None,
    }
}
