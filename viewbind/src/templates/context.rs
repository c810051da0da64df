// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Value, context};

use crate::binding::ContentModel;
use crate::content::node::PublishedContent;

#[derive(Debug, Clone)]
pub struct PageContext {
    app_name: String,
    title: String,
    type_alias: String,
    properties: serde_json::Value,
}

impl PageContext {
    pub fn from_model(app_name: &str, model: &ContentModel) -> Self {
        let content = model.content();
        let properties = content
            .to_json()
            .get("properties")
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}));
        Self {
            app_name: app_name.to_string(),
            title: content.name().to_string(),
            type_alias: content.content_type().alias.clone(),
            properties,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            title => &self.title,
            type_alias => &self.type_alias,
            properties => Value::from_serialize(&self.properties),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name
        }
    }
}
