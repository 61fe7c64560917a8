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
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use tracing::span::Id;
use tracing::{Dispatch, Span, Subscriber};

use akita_logger_core::{
    is_record_not_found, LogContext, LogLevel, Logger, ParamsFilter, SqlProducer, SqlValue,
    ROWS_UNKNOWN,
};
use crate::config::Config;
use crate::level::Severity;

/// Target of traced query records.
pub const SQL_TARGET: &str = "akita::sql";
/// Target of plain orm messages.
pub const ORM_TARGET: &str = "akita::orm";

/// `tracing::event!` wants a constant level, pick the callsite at runtime.
macro_rules! dyn_event {
    (parent: $parent:expr, $severity:expr, $($rest:tt)+) => {
        match $severity {
            Severity::Trace => tracing::event!(target: SQL_TARGET, parent: $parent, tracing::Level::TRACE, $($rest)+),
            Severity::Debug => tracing::event!(target: SQL_TARGET, parent: $parent, tracing::Level::DEBUG, $($rest)+),
            Severity::Info => tracing::event!(target: SQL_TARGET, parent: $parent, tracing::Level::INFO, $($rest)+),
            Severity::Warn => tracing::event!(target: SQL_TARGET, parent: $parent, tracing::Level::WARN, $($rest)+),
            Severity::Error => tracing::event!(target: SQL_TARGET, parent: $parent, tracing::Level::ERROR, $($rest)+),
        }
    };
}

/// How a finished query is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The query returned an error worth reporting
    Failed,
    /// The query ran longer than the slow threshold
    Slowed,
    /// Any other query
    Traced,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Failed => "Failed",
            Outcome::Slowed => "Slowed",
            Outcome::Traced => "Traced",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orm logger backed by `tracing`.
///
/// Records go to the dispatch given at construction, or to the default
/// subscriber in effect at call time when there is none. The logger never
/// changes after construction, [`TracingLogger::with_log_level`] returns a
/// new one.
///
/// A [`LogContext`] span is used as explicit parent only when it lives in the
/// subscriber records are sent to. Span ids are local to their subscriber, so
/// a foreign span is replaced by the current span of the logger's dispatch.
#[derive(Clone, Debug, Default)]
pub struct TracingLogger {
    config: Config,
    sink: Option<Sink>,
}

#[derive(Clone, Debug)]
struct Sink {
    dispatch: Dispatch,
    owner: Option<SubscriberAddr>,
}

/// Address of the subscriber behind a dispatch, and how to find it again
/// behind another one.
#[derive(Clone, Copy)]
struct SubscriberAddr {
    addr: usize,
    locate: fn(&Dispatch) -> Option<usize>,
}

impl fmt::Debug for SubscriberAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberAddr({:#x})", self.addr)
    }
}

fn locate<S: Subscriber + 'static>(dispatch: &Dispatch) -> Option<usize> {
    dispatch.downcast_ref::<S>().map(|subscriber| subscriber as *const S as usize)
}

impl Sink {
    /// Whether `span` was created by this sink's subscriber.
    fn owns(&self, span: &Span) -> bool {
        match self.owner {
            Some(owner) => span
                .with_subscriber(|(_, dispatch)| (owner.locate)(dispatch) == Some(owner.addr))
                .unwrap_or(false),
            None => false,
        }
    }
}

static DEFAULT_LOGGER: Lazy<TracingLogger> = Lazy::new(TracingLogger::default);

/// Process wide logger with the default configuration, reporting to the
/// default subscriber.
pub fn default_logger() -> &'static TracingLogger {
    &DEFAULT_LOGGER
}

impl TracingLogger {
    pub fn new(config: Config) -> Self {
        Self { config, sink: None }
    }

    /// Report to `subscriber`. Context spans created in it keep their parenting.
    pub fn with_subscriber<S>(subscriber: S, config: Config) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        let dispatch = Dispatch::new(subscriber);
        let locate: fn(&Dispatch) -> Option<usize> = locate::<S>;
        let owner = locate(&dispatch).map(|addr| SubscriberAddr { addr, locate });
        Self { config, sink: Some(Sink { dispatch, owner }) }
    }

    /// Report to `dispatch`. Its subscriber is opaque, so records are always
    /// parented to the current span of `dispatch`.
    pub fn with_dispatch(dispatch: Dispatch, config: Config) -> Self {
        Self { config, sink: Some(Sink { dispatch, owner: None }) }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dispatch(&self) -> Option<&Dispatch> {
        self.sink.as_ref().map(|sink| &sink.dispatch)
    }

    pub fn log_level(&self) -> LogLevel {
        self.config.log_level()
    }

    /// Same dispatch and configuration, reporting at `level`.
    pub fn with_log_level(&self, level: LogLevel) -> Self {
        Self {
            config: self.config.clone().set_log_level(level),
            sink: self.sink.clone(),
        }
    }

    /// Decide how a query that ran for `latency` and ended with `err` is reported.
    ///
    /// `None` means nothing is emitted at the current log level.
    pub fn classify(&self, latency: Duration, err: Option<&(dyn Error + 'static)>) -> Option<Outcome> {
        let level = self.config.log_level();
        if let Some(err) = err {
            let reportable = !self.config.ignore_record_not_found_error() || !is_record_not_found(err);
            if reportable && level.allows(LogLevel::Error) {
                return Some(Outcome::Failed);
            }
        }
        let threshold = self.config.slow_threshold();
        if !threshold.is_zero() && latency > threshold && level.allows(LogLevel::Warn) {
            return Some(Outcome::Slowed);
        }
        if level.allows(LogLevel::Info) {
            return Some(Outcome::Traced);
        }
        None
    }

    pub fn severity_of(&self, outcome: Outcome) -> Severity {
        match outcome {
            Outcome::Failed => self.config.failed_level(),
            Outcome::Slowed => self.config.slow_level(),
            Outcome::Traced => self.config.traced_level(),
        }
    }

    fn scoped<F: FnOnce()>(&self, f: F) {
        match &self.sink {
            Some(sink) => tracing::dispatcher::with_default(&sink.dispatch, f),
            None => f(),
        }
    }

    /// Parent of a record emitted for `ctx`, called from within [`Self::scoped`].
    fn parent(&self, ctx: &LogContext) -> Option<Id> {
        match &self.sink {
            Some(sink) if !sink.owns(ctx.span()) => Span::current().id(),
            _ => ctx.parent(),
        }
    }
}

impl Logger for TracingLogger {
    fn log_mode(&self, level: LogLevel) -> Box<dyn Logger> {
        Box::new(self.with_log_level(level))
    }

    fn info(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        if self.config.log_level().allows(LogLevel::Info) {
            self.scoped(|| tracing::info!(target: ORM_TARGET, parent: self.parent(ctx), "{}", args));
        }
    }

    fn warn(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        if self.config.log_level().allows(LogLevel::Warn) {
            self.scoped(|| tracing::warn!(target: ORM_TARGET, parent: self.parent(ctx), "{}", args));
        }
    }

    fn error(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        if self.config.log_level().allows(LogLevel::Error) {
            self.scoped(|| tracing::error!(target: ORM_TARGET, parent: self.parent(ctx), "{}", args));
        }
    }

    fn trace(
        &self,
        ctx: &LogContext,
        begin: Instant,
        fc: SqlProducer<'_>,
        err: Option<&(dyn Error + 'static)>,
    ) {
        if self.config.log_level() <= LogLevel::Silent {
            return;
        }
        let latency = begin.elapsed();
        let outcome = match self.classify(latency, err) {
            Some(outcome) => outcome,
            None => return,
        };

        let (sql, rows) = fc();
        let rows = (rows != ROWS_UNKNOWN).then_some(rows);
        let error = match outcome {
            Outcome::Failed => err.map(|err| err.to_string()),
            _ => None,
        };
        let latency_ms = latency.as_secs_f64() * 1000.0;
        let severity = self.severity_of(outcome);

        self.scoped(|| {
            dyn_event!(
                parent: self.parent(ctx),
                severity,
                latency = ?latency,
                latency_ms,
                sql = sql.as_str(),
                rows,
                error = error.as_deref(),
                "{}",
                outcome
            )
        });
    }
}

impl ParamsFilter for TracingLogger {
    fn params_filter<'a>(
        &self,
        _ctx: &LogContext,
        sql: &'a str,
        params: &'a [SqlValue],
    ) -> (&'a str, &'a [SqlValue]) {
        if self.config.parameterized_queries() {
            return (sql, &[]);
        }
        (sql, params)
    }
}

#[allow(dead_code)]
fn assert_orm_logger<T: Logger + ParamsFilter + Clone + 'static>() {}

const _: fn() = assert_orm_logger::<TracingLogger>;
