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

//! Canonical request construction for USBL1.
//!
//! The canonical request is what the server recomputes from the raw http
//! request, so it has to be reproduced exactly:
//!
//! ```text
//! HTTPRequestMethod\n
//! Path\n
//! QueryString\n
//! date:<http date>\n
//! host:<host>\n\n
//! date;host\n
//! HashedPayload
//! ```

use usblsign_core::SigningRequest;

use crate::constants::{EMPTY_PAYLOAD_SHA256, ID_PLACEHOLDER, SIGNED_HEADERS};

/// Substitute `id` into the `:id` placeholder of a path template.
///
/// The wildcard id `*` is sent as `%2A`, which is the only form the server
/// decodes back to a wildcard. An absent or empty id leaves the template as
/// is, as does a template without placeholder.
///
/// ```
/// use usblsign_usabilla::resolve_path;
///
/// assert_eq!(resolve_path("/live/apps/:id/feedback", Some("42")), "/live/apps/42/feedback");
/// assert_eq!(resolve_path("/live/apps/:id/feedback", Some("*")), "/live/apps/%2A/feedback");
/// assert_eq!(resolve_path("/live/apps/:id/feedback", None), "/live/apps/:id/feedback");
/// ```
pub fn resolve_path(template: &str, id: Option<&str>) -> String {
    match id {
        Some("") | None => template.to_string(),
        Some("*") => template.replacen(ID_PLACEHOLDER, "%2A", 1),
        Some(id) => template.replacen(ID_PLACEHOLDER, id, 1),
    }
}

/// Build the query string: pairs sorted by key, joined as `key=value` with `&`.
///
/// A repeated key keeps its last value. Values are passed through verbatim,
/// without percent-encoding, so callers must pre-encode reserved characters
/// or the url is rejected when the http request is built.
pub fn build_query_string<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    SigningRequest::query_to_string(params, "=", "&")
}

/// Build the canonical request string.
///
/// The host line carries its own trailing newline, which together with the
/// line separator leaves a blank line before the signed headers.
pub fn canonical_request(
    method: &str,
    path: &str,
    query: &str,
    http_date: &str,
    host: &str,
) -> String {
    let date = format!("date:{http_date}");
    let host = format!("host:{host}\n");

    [
        method,
        path,
        query,
        date.as_str(),
        host.as_str(),
        SIGNED_HEADERS,
        EMPTY_PAYLOAD_SHA256,
    ]
    .join("\n")
}
