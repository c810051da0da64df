// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod error;
pub mod handlers;
pub mod route_binding;

pub use route_binding::{
    RouteBinding, RoutedContent, RoutedModel, attach_route_binding, bind_routed, routed_source,
};
