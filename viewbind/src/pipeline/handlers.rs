// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::debug;
use std::sync::Arc;

use super::error;
use super::route_binding::{attach_route_binding, bind_routed};
use crate::app_state::AppState;
use crate::binding::{BindingSource, BoundModel, ContentModel, ModelShape};
use crate::config::ValidatedConfig;
use crate::content::node::{PublishedContent, PublishedNode, parse_content_id_hex};
use crate::content::store::{ContentStore, canonicalize_alias};
use crate::templates::{PageContext, render_minijinja_template};

const DEFAULT_HOME_ALIAS: &str = "index";
const ARTICLE_SECTION: &str = "articles";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/content/{path:.*}", web::get().to(raw_content))
        .route("/", web::get().to(index))
        .route("/{path:.*}", web::get().to(handle_route));
}

pub async fn index(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    serve_page(DEFAULT_HOME_ALIAS, &req, &config, &state)
}

pub async fn handle_route(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let raw_path: String = req.match_info().get("path").unwrap_or("").to_string();
    let alias = if raw_path.is_empty() {
        DEFAULT_HOME_ALIAS.to_string()
    } else {
        raw_path
    };
    serve_page(&alias, &req, &config, &state)
}

/// Routes under the articles section require the routed node to actually be
/// an article; everything else takes a plain wrapper.
fn shape_for(alias: &str) -> ModelShape {
    if alias == ARTICLE_SECTION || alias.starts_with("articles/") {
        ModelShape::typed_model("article")
    } else {
        ModelShape::model()
    }
}

fn lookup(store: &ContentStore, canonical: &str) -> Option<Arc<PublishedNode>> {
    if let Some(id_hex) = canonical.strip_prefix("id/") {
        if id_hex.contains('/') {
            return None;
        }
        let id = parse_content_id_hex(id_hex).ok()?;
        return store.get_by_id(id);
    }
    store.get_by_alias(canonical)
}

fn serve_page(
    alias: &str,
    req: &HttpRequest,
    config: &ValidatedConfig,
    state: &AppState,
) -> Result<HttpResponse> {
    let canonical = match canonicalize_alias(alias) {
        Some(canonical) => canonical,
        None => {
            return error::serve_404(&state.error_renderer, Some(state.templates.as_ref()));
        }
    };

    let node = match lookup(&state.store, &canonical) {
        Some(node) => node,
        None => {
            return error::serve_404(&state.error_renderer, Some(state.templates.as_ref()));
        }
    };

    debug!("Routing '{}' to content {}", canonical, node.alias);
    attach_route_binding(req, BindingSource::Content(node));

    let shape = shape_for(&canonical);
    let bound = match bind_routed(req, &state.resolver, &shape) {
        Ok(bound) => bound,
        Err(err) => {
            if err.restart_requested() {
                log::warn!("A binding observer requested an application restart");
            }
            return error::serve_500(&state.error_renderer, Some(state.templates.as_ref()));
        }
    };

    let model = match bound.as_ref().and_then(|bound| bound.as_model()) {
        Some(model) => model.clone(),
        None => {
            return error::serve_404(&state.error_renderer, Some(state.templates.as_ref()));
        }
    };

    render_page(&model, config, state)
}

fn render_page(
    model: &ContentModel,
    config: &ValidatedConfig,
    state: &AppState,
) -> Result<HttpResponse> {
    let context = PageContext::from_model(&config.app.name, model).to_value();
    let html = match render_minijinja_template(state.templates.as_ref(), "page.html", context) {
        Ok(html) => html,
        Err(err) => {
            log::error!("Failed to render page template: {}", err);
            return error::serve_500(&state.error_renderer, Some(state.templates.as_ref()));
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

pub async fn raw_content(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let raw_path: String = req.match_info().get("path").unwrap_or("").to_string();
    let canonical = match canonicalize_alias(&raw_path) {
        Some(canonical) => canonical,
        None => return Ok(not_found_json()),
    };

    let node = match lookup(&state.store, &canonical) {
        Some(node) => node,
        None => return Ok(not_found_json()),
    };

    attach_route_binding(&req, BindingSource::Content(node));

    match bind_routed(&req, &state.resolver, &ModelShape::content()) {
        Ok(Some(BoundModel::Content(node))) => Ok(HttpResponse::Ok().json(node.to_json())),
        Ok(_) => Ok(not_found_json()),
        Err(err) => Err(err.into()),
    }
}

fn not_found_json() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"error": "content not found"}))
}
