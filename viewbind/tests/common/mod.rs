// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use std::sync::Arc;

use viewbind::app_state::AppState;
use viewbind::binding::{LogObserver, ModelResolver};
use viewbind::config::{Config, ValidatedConfig, validate};
use viewbind::content::store::ContentStore;
use viewbind::content::type_registry::TypeRegistry;
use viewbind::pipeline::handlers;
use viewbind::util::test_fixtures::TestFixtureRoot;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub config: Arc<ValidatedConfig>,
    pub state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub config: Arc<ValidatedConfig>,
    pub state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        let fixture = TestFixtureRoot::new_unique("pipeline-test-suite").expect("fixture root");
        fixture.init_runtime_layout().expect("fixture layout");
        seed_types(&fixture);
        seed_content(&fixture);

        let mut config = Config::default();
        config.app.name = "Test App".to_string();
        let config = Arc::new(validate(config).expect("config"));

        let registry = TypeRegistry::load(&fixture.types_file()).expect("type registry");
        let store = ContentStore::new();
        store
            .load_dir(&fixture.content_dir(), &registry)
            .expect("content load");

        let resolver = Arc::new(ModelResolver::new().with_observer(Arc::new(LogObserver)));
        let state = Arc::new(AppState::new(&config.app.name, resolver, store));

        Self {
            fixture,
            config,
            state,
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            config: self.config.clone(),
            state: self.state.clone(),
        }
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.state))
        .configure(handlers::configure)
}

fn seed_types(fixture: &TestFixtureRoot) {
    fixture
        .write_types(
            r#"(
    types: [
        (alias: "page"),
        (alias: "article", inherits: Some("page")),
    ],
)"#,
        )
        .expect("seed types");
}

fn seed_content(fixture: &TestFixtureRoot) {
    fixture
        .write_node(
            "home.ron",
            r#"(
    id: 1,
    alias: "index",
    name: "Home",
    content_type: "page",
    properties: {
        "body": "Welcome home.",
    },
)"#,
        )
        .expect("seed home");

    fixture
        .write_node(
            "intro.ron",
            r#"(
    id: 2,
    alias: "docs/intro",
    name: "Intro",
    content_type: "page",
    properties: {
        "body": "Getting started.",
    },
)"#,
        )
        .expect("seed intro");

    fixture
        .write_node(
            "first_article.ron",
            r#"(
    id: 3,
    alias: "articles/first",
    name: "First Article",
    content_type: "article",
    properties: {
        "body": "Article body.",
    },
)"#,
        )
        .expect("seed article");

    // A page filed under the articles section, so the typed article route
    // cannot bind it.
    fixture
        .write_node(
            "notice.ron",
            r#"(
    id: 4,
    alias: "articles/notice",
    name: "Notice",
    content_type: "page",
    properties: {},
)"#,
        )
        .expect("seed notice");
}
