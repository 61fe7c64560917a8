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
use std::time::Instant;

use crate::{explain_sql, LogContext, Logger, ParamsFilter, SqlValue, ROWS_UNKNOWN};

/// A finished statement, as the orm reports it to its logger.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
    pub rows_affected: i64,
}

impl Statement {
    pub fn new<S: Into<String>>(sql: S) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            rows_affected: ROWS_UNKNOWN,
        }
    }

    pub fn with_params<I, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rows_affected(mut self, rows: i64) -> Self {
        self.rows_affected = rows;
        self
    }

    /// The sql as it would appear in logs, after `filter` had its say.
    pub fn explain(&self, ctx: &LogContext, filter: Option<&dyn ParamsFilter>) -> String {
        let (sql, params) = match filter {
            Some(filter) => filter.params_filter(ctx, &self.sql, &self.params),
            None => (self.sql.as_str(), self.params.as_slice()),
        };
        explain_sql(sql, params)
    }

    /// Report this statement to `logger`. Explaining is deferred until the
    /// logger decides to emit a record.
    pub fn trace(
        &self,
        logger: &dyn Logger,
        filter: Option<&dyn ParamsFilter>,
        ctx: &LogContext,
        begin: Instant,
        err: Option<&(dyn Error + 'static)>,
    ) {
        let producer = || (self.explain(ctx, filter), self.rows_affected);
        logger.trace(ctx, begin, &producer, err);
    }
}
