// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::binding::ModelResolver;
use crate::content::store::ContentStore;
use crate::pipeline::error::ErrorRenderer;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub resolver: Arc<ModelResolver>,
    pub store: ContentStore,
}

impl AppState {
    pub fn new(app_name: &str, resolver: Arc<ModelResolver>, store: ContentStore) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(app_name.to_string()),
            resolver,
            store,
        }
    }
}
