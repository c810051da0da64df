// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorNotFound};
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use std::future::{Ready, ready};
use std::sync::Arc;

use crate::app_state::AppState;
use crate::binding::{
    BindingSource, BoundModel, ContentModel, ModelBindingError, ModelResolver, ModelShape,
};
use crate::content::node::PublishedContent;

/// The well-known per-request key: whatever resolved the route attaches this
/// to the request extensions, and binding reads it back. An absent key means
/// there is nothing to bind, which is never an error.
pub struct RouteBinding {
    source: BindingSource,
}

impl RouteBinding {
    pub fn new(source: BindingSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &BindingSource {
        &self.source
    }
}

pub fn attach_route_binding(req: &HttpRequest, source: BindingSource) {
    req.extensions_mut().insert(RouteBinding::new(source));
}

pub fn routed_source(req: &HttpRequest) -> Option<BindingSource> {
    req.extensions()
        .get::<RouteBinding>()
        .map(|binding| binding.source().clone())
}

/// Direct binding entry for handlers that already hold the resolver.
pub fn bind_routed(
    req: &HttpRequest,
    resolver: &ModelResolver,
    shape: &ModelShape,
) -> Result<Option<BoundModel>, ModelBindingError> {
    let source = routed_source(req);
    resolver.resolve(source.as_ref(), shape)
}

impl actix_web::ResponseError for ModelBindingError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Extractor for the raw routed content node.
pub struct RoutedContent(pub Arc<dyn PublishedContent>);

/// Extractor for the routed content wrapped in a plain model.
pub struct RoutedModel(pub ContentModel);

impl std::fmt::Debug for RoutedContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RoutedContent").field(&self.0.alias()).finish()
    }
}

impl std::fmt::Debug for RoutedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RoutedModel").finish()
    }
}

impl FromRequest for RoutedContent {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_content(req))
    }
}

impl FromRequest for RoutedModel {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_model(req))
    }
}

fn state_from_request(req: &HttpRequest) -> Result<web::Data<AppState>, actix_web::Error> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| ErrorInternalServerError("application state is not configured"))
}

fn extract_content(req: &HttpRequest) -> Result<RoutedContent, actix_web::Error> {
    let state = state_from_request(req)?;
    match bind_routed(req, &state.resolver, &ModelShape::content())? {
        Some(BoundModel::Content(node)) => Ok(RoutedContent(node)),
        Some(_) => Err(ErrorInternalServerError(
            "binding produced an unexpected shape",
        )),
        None => Err(ErrorNotFound("no content routed for this request")),
    }
}

fn extract_model(req: &HttpRequest) -> Result<RoutedModel, actix_web::Error> {
    let state = state_from_request(req)?;
    match bind_routed(req, &state.resolver, &ModelShape::model())? {
        Some(BoundModel::Model(model)) => Ok(RoutedModel(model)),
        Some(_) => Err(ErrorInternalServerError(
            "binding produced an unexpected shape",
        )),
        None => Err(ErrorNotFound("no content routed for this request")),
    }
}
