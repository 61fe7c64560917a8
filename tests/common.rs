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
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::field::{Field, Visit};
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// An event seen by the [`CaptureLayer`]
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
    pub span: Option<String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn latency_ms(&self) -> f64 {
        self.field("latency_ms").and_then(|v| v.parse().ok()).unwrap_or(-1.0)
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.insert(field.name().to_string(), format!("{:?}", value));
        }
    }
}

/// Layer keeping every event it sees
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
            span: ctx.event_span(event).map(|span| span.name().to_string()),
        };
        self.events.lock().unwrap().push(captured);
    }
}

/// A dispatch recording into the returned layer
pub fn capture_dispatch() -> (Dispatch, CaptureLayer) {
    let layer = CaptureLayer::default();
    let dispatch = Dispatch::new(tracing_subscriber::registry().with(layer.clone()));
    (dispatch, layer)
}

/// Run `f` with a capturing subscriber as the thread default
pub fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let (dispatch, layer) = capture_dispatch();
    tracing::dispatcher::with_default(&dispatch, f);
    layer.events()
}

/// Sql producer counting how often the logger asked for the statement
#[derive(Debug, Clone)]
pub struct TrackableProducer {
    sql: String,
    rows: i64,
    pub call_count: Arc<Mutex<usize>>,
}

impl TrackableProducer {
    pub fn new(sql: &str, rows: i64) -> Self {
        Self {
            sql: sql.to_string(),
            rows,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn produce(&self) -> (String, i64) {
        *self.call_count.lock().unwrap() += 1;
        (self.sql.clone(), self.rows)
    }

    pub fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

/// An instant `elapsed` in the past
pub fn started_ago(elapsed: Duration) -> Instant {
    Instant::now().checked_sub(elapsed).expect("monotonic clock too young")
}

#[derive(Debug)]
pub struct QueryError(pub &'static str);

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for QueryError {}

/// An orm error wrapping the record not found sentinel
#[derive(Debug)]
pub struct WrappedNotFound(pub akita_logger::RecordNotFound);

impl fmt::Display for WrappedNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "find user: {}", self.0)
    }
}

impl std::error::Error for WrappedNotFound {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Params filter counting how often the orm asked it to filter
#[derive(Debug, Clone, Default)]
pub struct TrackableFilter {
    pub call_count: Arc<Mutex<usize>>,
}

impl TrackableFilter {
    pub fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl akita_logger::ParamsFilter for TrackableFilter {
    fn params_filter<'a>(
        &self,
        _ctx: &akita_logger::LogContext,
        sql: &'a str,
        params: &'a [akita_logger::SqlValue],
    ) -> (&'a str, &'a [akita_logger::SqlValue]) {
        *self.call_count.lock().unwrap() += 1;
        (sql, params)
    }
}
