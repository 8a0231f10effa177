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

use crate::Result;
use std::collections::BTreeMap;
use bytes::Bytes;
use http::uri::Authority;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

/// Everything the signer needs to know about one outgoing request.
///
/// A `SigningRequest` is built fresh for every signing call and consumed by
/// it, so two in-flight calls never share or mutate the same value.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method, `GET` unless changed.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority, signed as the `host` header.
    pub authority: Authority,
    /// Resolved HTTP path, without query.
    pub path: String,
    /// HTTP query parameters, in caller order.
    ///
    /// Keys are unique: pushing an existing key replaces its value.
    pub query: Vec<(String, String)>,
}

impl SigningRequest {
    /// Create a new `GET` signing request for the given path.
    pub fn new(scheme: Scheme, authority: Authority, path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            scheme,
            authority,
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Replace the http method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append query parameters, later values win for repeated keys.
    pub fn with_query<K, V>(mut self, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in query {
            self.query_push(k, v);
        }
        self
    }

    /// Set a query pair, replacing the value of an existing key.
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.query.push((key, value)),
        }
    }

    /// Convert sorted query to string.
    ///
    /// Pairs are ordered byte-wise by key and a repeated key keeps its last
    /// value. Every pair keeps its separator even when the value is empty.
    /// Nothing is percent-encoded.
    ///
    /// ```shell
    /// [(c, d), (a, b)] => "a=b&c=d"
    /// ```
    pub fn query_to_string<K, V>(query: &[(K, V)], sep: &str, join: &str) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: BTreeMap<&str, &str> = query
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();

        let mut s = String::with_capacity(16);
        for (idx, (k, v)) in pairs.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(k);
            s.push_str(sep);
            s.push_str(v);
        }

        s
    }
}

/// The outcome of one signing call: the url to request and the headers that
/// must be sent with it.
///
/// Signatures are bound to the instant they were computed at, so a
/// `SignedRequest` is meant to be sent once and dropped.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Path plus optional `?query`, relative to `scheme://host`.
    pub url: String,
    /// Headers to send verbatim.
    pub headers: HeaderMap,
}

impl SignedRequest {
    /// Build the bodiless `GET` that carries this signature.
    pub fn to_http_request(
        &self,
        scheme: &Scheme,
        authority: &Authority,
    ) -> Result<http::Request<Bytes>> {
        let uri = Uri::builder()
            .scheme(scheme.clone())
            .authority(authority.clone())
            .path_and_query(self.url.as_str())
            .build()?;

        let mut req = http::Request::get(uri).body(Bytes::new())?;
        *req.headers_mut() = self.headers.clone();
        Ok(req)
    }
}
