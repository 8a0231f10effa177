// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.
//!
//! All formatters are locale independent and always render in UTC.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format time into http date: `Sun, 06 Nov 1994 08:49:37 GMT`
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse time from RFC3339.
///
/// All of them are valid time:
///
/// - `2022-03-13T07:20:04Z`
/// - `2022-03-01T08:12:34+00:00`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    let v = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e))?;
    Ok(v.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn test_time() -> DateTime {
        parse_rfc3339("2017-01-02T15:04:05Z").unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!("20170102", format_date(test_time()))
    }

    #[test]
    fn test_format_iso8601() {
        assert_eq!("20170102T150405Z", format_iso8601(test_time()))
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!("Mon, 02 Jan 2017 15:04:05 GMT", format_http_date(test_time()))
    }

    #[test_case("2017-01-02T15:04:05Z"; "utc")]
    #[test_case("2017-01-02T16:04:05+01:00"; "offset")]
    fn test_parse_rfc3339(input: &str) {
        assert_eq!(parse_rfc3339(input).unwrap(), test_time());
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        assert!(parse_rfc3339("20170102T150405Z").is_err());
    }
}
