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

/// Returned by the orm when a query succeeded but matched no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordNotFound;

impl fmt::Display for RecordNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record not found")
    }
}

impl Error for RecordNotFound {}

/// Whether `err`, or any error in its `source()` chain, is [`RecordNotFound`].
pub fn is_record_not_found(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.is::<RecordNotFound>() {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct QueryError {
        cause: Option<Box<dyn Error + Send + Sync + 'static>>,
    }

    impl fmt::Display for QueryError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "query failed")
        }
    }

    impl Error for QueryError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.cause.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_sentinel_matches_itself() {
        assert!(is_record_not_found(&RecordNotFound));
        assert_eq!(RecordNotFound.to_string(), "record not found");
    }

    #[test]
    fn test_sentinel_matches_through_source_chain() {
        let wrapped = QueryError { cause: Some(Box::new(RecordNotFound)) };
        assert!(is_record_not_found(&wrapped));
    }

    #[test]
    fn test_other_errors_do_not_match() {
        let plain = QueryError { cause: None };
        assert!(!is_record_not_found(&plain));
        // same text, different identity
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "record not found");
        assert!(!is_record_not_found(&io));
    }
}
