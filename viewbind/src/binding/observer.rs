// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::error;

/// The notification handed to observers on a binding failure. Observers may
/// append to the message and request a restart; they cannot suppress the
/// failure itself.
#[derive(Debug, Clone)]
pub struct BindingFailureNotice {
    source_type: String,
    target_type: String,
    message: String,
    restart_requested: bool,
}

impl BindingFailureNotice {
    pub(crate) fn new(source_type: String, target_type: String, message: String) -> Self {
        Self {
            source_type,
            target_type,
            message,
            restart_requested: false,
        }
    }

    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn append_message(&mut self, text: &str) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        self.message.push_str(text);
    }

    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    pub(crate) fn into_message(self) -> String {
        self.message
    }
}

/// Notify-only failure observer. Registered on the resolver at construction;
/// the resolver calls each observer exactly once per failure, in registration
/// order, before surfacing the error.
pub trait BindingFailureObserver: Send + Sync {
    fn on_binding_failure(&self, notice: &mut BindingFailureNotice);
}

/// Observer that writes every failure to the error log.
pub struct LogObserver;

impl BindingFailureObserver for LogObserver {
    fn on_binding_failure(&self, notice: &mut BindingFailureNotice) {
        error!(
            "Model binding failed (source: {}, target: {}): {}",
            notice.source_type(),
            notice.target_type(),
            notice.message()
        );
    }
}
