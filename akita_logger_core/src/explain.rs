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
use crate::SqlValue;

/// Interpolate bound parameters into `sql` for display.
///
/// Both `?` and `$N` placeholders are replaced, placeholders inside quoted
/// literals or identifiers are kept. A placeholder with no matching
/// parameter is left as written. The result is for logs only, never execute it.
pub fn explain_sql(sql: &str, params: &[SqlValue]) -> String {
    if params.is_empty() {
        return sql.to_string();
    }
    let mut out = String::with_capacity(sql.len() + params.len() * 8);
    let mut quote: Option<char> = None;
    let mut next = 0usize;
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    out.push(c);
                }
                '?' => {
                    match params.get(next) {
                        Some(v) => out.push_str(&v.to_string()),
                        None => out.push(c),
                    }
                    next += 1;
                }
                '$' => {
                    let mut digits = String::new();
                    while let Some(d) = chars.peek() {
                        if d.is_ascii_digit() {
                            digits.push(*d);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    let value = digits
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| params.get(i));
                    match value {
                        Some(v) => out.push_str(&v.to_string()),
                        None => {
                            out.push(c);
                            out.push_str(&digits);
                        }
                    }
                }
                _ => out.push(c),
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark_placeholders() {
        let sql = explain_sql(
            "select * from t_system_user where name = ? and age > ?",
            &["Jack".into(), 18.into()],
        );
        assert_eq!(sql, "select * from t_system_user where name = 'Jack' and age > 18");
    }

    #[test]
    fn test_numbered_placeholders() {
        let sql = explain_sql("update t set a = $2 where id = $1", &[7.into(), "x".into()]);
        assert_eq!(sql, "update t set a = 'x' where id = 7");
    }

    #[test]
    fn test_quoted_placeholders_are_kept() {
        let sql = explain_sql("select '?', \"$1\" from t where a = ?", &[1.into()]);
        assert_eq!(sql, "select '?', \"$1\" from t where a = 1");
    }

    #[test]
    fn test_missing_params_leave_placeholders() {
        assert_eq!(explain_sql("a = ? and b = ?", &[1.into()]), "a = 1 and b = ?");
        assert_eq!(explain_sql("a = $3", &[1.into()]), "a = $3");
        assert_eq!(explain_sql("select $", &[1.into()]), "select $");
        assert_eq!(explain_sql("a = ?", &[]), "a = ?");
    }
}
