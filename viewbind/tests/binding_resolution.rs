// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::collections::BTreeMap;
use std::sync::Arc;

use viewbind::binding::{
    BindingErrorKind, BindingSource, ContentCarrier, ContentModel, ModelResolver, ModelShape,
};
use viewbind::content::{ContentId, ContentTypeInfo, PublishedContent, PublishedNode};

fn page_node() -> Arc<dyn PublishedContent> {
    Arc::new(PublishedNode {
        id: ContentId(1),
        alias: "index".to_string(),
        name: "Home".to_string(),
        content_type: ContentTypeInfo::new("page"),
        properties: BTreeMap::new(),
    })
}

fn article_node() -> Arc<dyn PublishedContent> {
    Arc::new(PublishedNode {
        id: ContentId(2),
        alias: "news/launch".to_string(),
        name: "Launch".to_string(),
        content_type: ContentTypeInfo::with_composition("article", vec!["page".to_string()]),
        properties: BTreeMap::new(),
    })
}

#[test]
fn plain_wrapper_binds_to_wrapper_constrained_to_its_node_type() {
    let resolver = ModelResolver::new();
    let node = page_node();
    let source = BindingSource::Model(ContentModel::new(node.clone()));

    let bound = resolver
        .resolve(Some(&source), &ModelShape::typed_model("page"))
        .unwrap()
        .unwrap();
    let model = bound.as_model().unwrap();
    assert_eq!(model.constraint(), Some("page"));
    assert!(Arc::ptr_eq(&model.content(), &node));
}

#[test]
fn derived_node_binds_to_base_constrained_wrapper() {
    let resolver = ModelResolver::new();
    let node = article_node();
    let source = BindingSource::Content(node.clone());

    let bound = resolver
        .resolve(Some(&source), &ModelShape::typed_model("page"))
        .unwrap()
        .unwrap();
    let model = bound.as_model().unwrap();
    assert_eq!(model.constraint(), Some("page"));
    assert!(Arc::ptr_eq(&model.content(), &node));
}

#[test]
fn base_node_does_not_bind_to_derived_constrained_wrapper() {
    let resolver = ModelResolver::new();
    let source = BindingSource::Content(page_node());

    let err = resolver
        .resolve(Some(&source), &ModelShape::typed_model("article"))
        .unwrap_err();
    assert_eq!(err.kind(), BindingErrorKind::ContentTypeMismatch);
    assert!(err.source_is_content());
    assert!(err.model_is_content());
}

#[test]
fn wrapper_unwraps_to_raw_content_subject_to_constraint() {
    let resolver = ModelResolver::new();
    let node = article_node();
    let source = BindingSource::Model(ContentModel::new(node.clone()));

    let bound = resolver
        .resolve(Some(&source), &ModelShape::content_of("page"))
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&bound.as_content().unwrap(), &node));

    let source = BindingSource::Model(ContentModel::new(page_node()));
    let err = resolver
        .resolve(Some(&source), &ModelShape::content_of("article"))
        .unwrap_err();
    assert_eq!(err.kind(), BindingErrorKind::ContentTypeMismatch);
    assert!(err.source_is_content());
    assert!(!err.model_is_content());
}

struct RoutedView {
    node: Arc<dyn PublishedContent>,
}

impl ContentCarrier for RoutedView {
    fn content(&self) -> Arc<dyn PublishedContent> {
        self.node.clone()
    }
}

#[test]
fn any_content_carrier_unwraps_like_a_wrapper() {
    let resolver = ModelResolver::new();
    let node = article_node();
    let source = BindingSource::Carrier(Arc::new(RoutedView { node: node.clone() }));

    let bound = resolver
        .resolve(Some(&source), &ModelShape::model())
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&bound.as_model().unwrap().content(), &node));
}

#[test]
fn unrelated_value_with_no_conversion_path_fails() {
    let resolver = ModelResolver::new();
    let source = BindingSource::Value(serde_json::json!("not content"));

    let err = resolver
        .resolve(Some(&source), &ModelShape::content())
        .unwrap_err();
    assert_eq!(err.kind(), BindingErrorKind::UnsupportedConversion);
    assert!(!err.source_is_content());
    assert!(!err.model_is_content());
    assert_eq!(
        err.message(),
        "Cannot bind source type value to model type content."
    );
}

#[test]
fn absent_source_produces_no_value_for_every_shape() {
    let resolver = ModelResolver::new();
    for shape in [
        ModelShape::content(),
        ModelShape::content_of("article"),
        ModelShape::model(),
        ModelShape::typed_model("article"),
        ModelShape::custom("summary"),
    ] {
        assert!(resolver.resolve(None, &shape).unwrap().is_none());
    }
}

#[test]
fn satisfying_sources_pass_through_unchanged() {
    let resolver = ModelResolver::new();

    let node = article_node();
    let source = BindingSource::Content(node.clone());
    let bound = resolver
        .resolve(Some(&source), &ModelShape::content_of("page"))
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&bound.as_content().unwrap(), &node));

    let model = ContentModel::constrained(article_node(), "article").unwrap();
    let inner = model.content();
    let source = BindingSource::Model(model);
    let bound = resolver
        .resolve(Some(&source), &ModelShape::typed_model("article"))
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&bound.as_model().unwrap().content(), &inner));
}
