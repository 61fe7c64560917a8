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
//! Logger contract of the akita orm.
//!
//! The orm reports through a [`Logger`]: plain messages with
//! [`Logger::info`], [`Logger::warn`] and [`Logger::error`], and every
//! finished query with [`Logger::trace`]. A logger may also implement
//! [`ParamsFilter`] to keep bound parameter values out of logged sql.
//!
mod context;
mod error;
mod explain;
mod level;
mod logger;
mod statement;
mod value;

#[doc(inline)]
pub use context::LogContext;
#[doc(inline)]
pub use error::{is_record_not_found, RecordNotFound};
#[doc(inline)]
pub use explain::explain_sql;
#[doc(inline)]
pub use level::LogLevel;
#[doc(inline)]
pub use logger::{Logger, ParamsFilter, SqlProducer, ROWS_UNKNOWN};
#[doc(inline)]
pub use statement::Statement;
#[doc(inline)]
pub use value::SqlValue;
