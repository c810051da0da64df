// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::error::Error;
use std::fmt;

use super::observer::BindingFailureNotice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingErrorKind {
    /// The obtained node's concrete type does not satisfy the requested
    /// constraint.
    ContentTypeMismatch,
    /// No recognized shape matched and the generic fallback conversion
    /// failed too.
    UnsupportedConversion,
}

/// The single failure surfaced to binding callers. Carries the message as it
/// stood after observers were notified, plus whether any observer asked for a
/// restart.
#[derive(Debug, Clone)]
pub struct ModelBindingError {
    kind: BindingErrorKind,
    source_type: String,
    target_type: String,
    source_is_content: bool,
    model_is_content: bool,
    message: String,
    restart_requested: bool,
}

impl ModelBindingError {
    pub(crate) fn from_notice(
        kind: BindingErrorKind,
        source_is_content: bool,
        model_is_content: bool,
        notice: BindingFailureNotice,
    ) -> Self {
        Self {
            kind,
            source_is_content,
            model_is_content,
            restart_requested: notice.restart_requested(),
            source_type: notice.source_type().to_string(),
            target_type: notice.target_type().to_string(),
            message: notice.into_message(),
        }
    }

    pub fn kind(&self) -> BindingErrorKind {
        self.kind
    }

    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn source_is_content(&self) -> bool {
        self.source_is_content
    }

    pub fn model_is_content(&self) -> bool {
        self.model_is_content
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }
}

impl fmt::Display for ModelBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ModelBindingError {}

/// `Cannot bind source [content] type {T} to model [content] type {U}.` with
/// each bracketed word present only when the corresponding flag is set.
pub(crate) fn compose_message(
    source_is_content: bool,
    model_is_content: bool,
    source_type: &str,
    target_type: &str,
) -> String {
    format!(
        "Cannot bind source {}type {} to model {}type {}.",
        if source_is_content { "content " } else { "" },
        source_type,
        if model_is_content { "content " } else { "" },
        target_type
    )
}
