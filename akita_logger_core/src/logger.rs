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
use std::time::Instant;

use crate::{LogContext, LogLevel, SqlValue};

/// Row count reported by a query producer when the number of affected rows is unknown.
pub const ROWS_UNKNOWN: i64 = -1;

/// Deferred producer of the final sql text and the affected rows.
///
/// Loggers call it at most once, and only when a record is actually emitted.
pub type SqlProducer<'a> = &'a dyn Fn() -> (String, i64);

/// Logger plugged into the orm.
///
/// The orm keeps it as `Box<dyn Logger>` and reports every finished query
/// through [`Logger::trace`].
pub trait Logger: Send + Sync {
    /// A new logger reporting at `level`, the receiver is left untouched.
    fn log_mode(&self, level: LogLevel) -> Box<dyn Logger>;

    fn info(&self, ctx: &LogContext, args: fmt::Arguments<'_>);

    fn warn(&self, ctx: &LogContext, args: fmt::Arguments<'_>);

    fn error(&self, ctx: &LogContext, args: fmt::Arguments<'_>);

    /// Report a finished query started at `begin`.
    fn trace(
        &self,
        ctx: &LogContext,
        begin: Instant,
        fc: SqlProducer<'_>,
        err: Option<&(dyn Error + 'static)>,
    );
}

/// Decides which bound parameters may appear in logged sql.
pub trait ParamsFilter: Send + Sync {
    fn params_filter<'a>(
        &self,
        ctx: &LogContext,
        sql: &'a str,
        params: &'a [SqlValue],
    ) -> (&'a str, &'a [SqlValue]);
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log_mode(&self, level: LogLevel) -> Box<dyn Logger> {
        (**self).log_mode(level)
    }

    fn info(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        (**self).info(ctx, args)
    }

    fn warn(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        (**self).warn(ctx, args)
    }

    fn error(&self, ctx: &LogContext, args: fmt::Arguments<'_>) {
        (**self).error(ctx, args)
    }

    fn trace(
        &self,
        ctx: &LogContext,
        begin: Instant,
        fc: SqlProducer<'_>,
        err: Option<&(dyn Error + 'static)>,
    ) {
        (**self).trace(ctx, begin, fc, err)
    }
}

/// Log an informational message through an orm [`Logger`].
///
/// ```ignore
/// logger_info!(logger, &ctx, "migrating table {}", "t_system_user");
/// ```
#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            $logger.info($ctx, format_args!($($arg)+))
        }
    };
}

/// Log a warning through an orm [`Logger`].
#[macro_export]
macro_rules! logger_warn {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            $logger.warn($ctx, format_args!($($arg)+))
        }
    };
}

/// Log an error through an orm [`Logger`].
#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            $logger.error($ctx, format_args!($($arg)+))
        }
    };
}
