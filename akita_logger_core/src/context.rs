/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use tracing::span::Id;
use tracing::Span;

/// Request scoped context handed to every logger call.
///
/// Records emitted for a call are parented to the wrapped span, so fields
/// recorded on it (request id, trace id, tenant...) travel with each record.
#[derive(Debug, Clone)]
pub struct LogContext {
    span: Span,
}

impl LogContext {
    /// Context bound to the span the caller is currently in.
    pub fn current() -> Self {
        Self { span: Span::current() }
    }

    /// Context with no parent span, records become root events.
    pub fn root() -> Self {
        Self { span: Span::none() }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Explicit parent for emitted events, `None` when detached.
    pub fn parent(&self) -> Option<Id> {
        self.span.id()
    }
}

impl From<Span> for LogContext {
    fn from(span: Span) -> Self {
        Self { span }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::current()
    }
}
