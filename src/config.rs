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

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use akita_logger_core::LogLevel;
use crate::errors::{ConfigError, Result};
use crate::level::Severity;

/// Logger configuration.
///
/// Every field is optional when deserializing, `slow_threshold` is given in
/// milliseconds:
///
/// ```json
/// {
///     "log_level": "info",
///     "slow_threshold": 500,
///     "ignore_record_not_found_error": true,
///     "parameterized_queries": false
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    log_level: LogLevel,
    #[serde(with = "duration_millis")]
    slow_threshold: Duration,
    ignore_record_not_found_error: bool,
    parameterized_queries: bool,
    failed_level: Severity,
    slow_level: Severity,
    traced_level: Severity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::Warn,
            slow_threshold: Duration::from_millis(200),
            ignore_record_not_found_error: false,
            parameterized_queries: false,
            failed_level: Severity::Error,
            slow_level: Severity::Warn,
            traced_level: Severity::Debug,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn set_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Queries running longer are reported as slow, zero disables the check.
    pub fn set_slow_threshold(mut self, slow_threshold: Duration) -> Self {
        self.slow_threshold = slow_threshold;
        self
    }

    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    pub fn set_ignore_record_not_found_error(mut self, ignore: bool) -> Self {
        self.ignore_record_not_found_error = ignore;
        self
    }

    pub fn ignore_record_not_found_error(&self) -> bool {
        self.ignore_record_not_found_error
    }

    /// Keep bound parameter values out of logged sql.
    pub fn set_parameterized_queries(mut self, parameterized: bool) -> Self {
        self.parameterized_queries = parameterized;
        self
    }

    pub fn parameterized_queries(&self) -> bool {
        self.parameterized_queries
    }

    pub fn set_failed_level(mut self, level: Severity) -> Self {
        self.failed_level = level;
        self
    }

    pub fn failed_level(&self) -> Severity {
        self.failed_level
    }

    pub fn set_slow_level(mut self, level: Severity) -> Self {
        self.slow_level = level;
        self
    }

    pub fn slow_level(&self) -> Severity {
        self.slow_level
    }

    pub fn set_traced_level(mut self, level: Severity) -> Self {
        self.traced_level = level;
        self
    }

    pub fn traced_level(&self) -> Severity {
        self.traced_level
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Sub-millisecond thresholds round up to 1ms, zero stays "disabled".
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let mut millis = value.as_millis();
        if millis == 0 && !value.is_zero() {
            millis = 1;
        }
        let millis = u64::try_from(millis).map_err(S::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::new();
        assert_eq!(cfg.log_level(), LogLevel::Warn);
        assert_eq!(cfg.slow_threshold(), Duration::from_millis(200));
        assert!(!cfg.ignore_record_not_found_error());
        assert!(!cfg.parameterized_queries());
        assert_eq!(cfg.failed_level(), Severity::Error);
        assert_eq!(cfg.slow_level(), Severity::Warn);
        assert_eq!(cfg.traced_level(), Severity::Debug);
    }

    #[test]
    fn test_setters_return_modified_copy() {
        let base = Config::new();
        let cfg = base.clone().set_log_level(LogLevel::Info).set_parameterized_queries(true);
        assert_eq!(base.log_level(), LogLevel::Warn);
        assert_eq!(cfg.log_level(), LogLevel::Info);
        assert!(cfg.parameterized_queries());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let cfg = Config::from_json_str(r#"{"slow_threshold": 1500, "log_level": "info"}"#).unwrap();
        assert_eq!(cfg.slow_threshold(), Duration::from_millis(1500));
        assert_eq!(cfg.log_level(), LogLevel::Info);
        assert_eq!(cfg.traced_level(), Severity::Debug);
    }

    #[test]
    fn test_sub_millisecond_threshold_stays_enabled() {
        let cfg = Config::new().set_slow_threshold(Duration::from_micros(500));
        let back = Config::from_json_str(&cfg.to_json_string().unwrap()).unwrap();
        assert_eq!(back.slow_threshold(), Duration::from_millis(1));

        let cfg = Config::new().set_slow_threshold(Duration::from_micros(1500));
        let back = Config::from_json_str(&cfg.to_json_string().unwrap()).unwrap();
        assert_eq!(back.slow_threshold(), Duration::from_millis(1));

        let cfg = Config::new().set_slow_threshold(Duration::ZERO);
        let back = Config::from_json_str(&cfg.to_json_string().unwrap()).unwrap();
        assert_eq!(back.slow_threshold(), Duration::ZERO);
    }

    #[test]
    fn test_oversized_threshold_is_rejected() {
        let cfg = Config::new().set_slow_threshold(Duration::MAX);
        assert!(matches!(cfg.to_json_string(), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = Config::from_json_str(r#"{"log_level": "verbose"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
