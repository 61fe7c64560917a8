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

//!
//! `tracing` backed logger for the akita orm.
//!
//! ```toml
//! [dependencies]
//! akita_logger = "0.1.0"
//! ```
//!
//! ## Reported records.
//!
//! Every finished query is classified, in this order:
//!
//! * ```Failed``` - the query returned an error (optionally not `RecordNotFound`), log level >= `Error`
//! * ```Slowed``` - the query ran longer than `slow_threshold`, log level >= `Warn`
//! * ```Traced``` - anything else, log level >= `Info`
//!
//! and emitted on the `akita::sql` target with the fields `latency`,
//! `latency_ms`, `sql`, `rows` (when known) and `error` (failed only).
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use akita_logger::*;
//!
//! let cfg = Config::new()
//!     .set_log_level(LogLevel::Info)
//!     .set_slow_threshold(Duration::from_millis(500))
//!     .set_ignore_record_not_found_error(true)
//!     .set_parameterized_queries(true);
//! let logger: Box<dyn Logger> = Box::new(TracingLogger::new(cfg));
//!
//! let ctx = LogContext::current();
//! logger_info!(logger, &ctx, "migrating table {}", "t_system_user");
//!
//! let begin = Instant::now();
//! let stmt = Statement::new("select * from t_system_user where name = ?")
//!     .with_params(["Jack"])
//!     .with_rows_affected(1);
//! logger.trace(&ctx, begin, &|| (stmt.sql.clone(), stmt.rows_affected), None);
//! ```
//!
mod config;
mod errors;
mod level;
mod logger;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use errors::{ConfigError, Result};
#[doc(inline)]
pub use level::Severity;
#[doc(inline)]
pub use logger::{default_logger, Outcome, TracingLogger, ORM_TARGET, SQL_TARGET};
pub use akita_logger_core::*;
