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

use std::fmt::Write;

use http::header::{AUTHORIZATION, DATE};
use http::{HeaderMap, HeaderValue};
use log::debug;
use usblsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use usblsign_core::time::{format_date, format_http_date, format_iso8601, now, DateTime};
use usblsign_core::{Context, Error, Result, SignRequest, SignedRequest, SigningRequest};

use crate::canonical::{build_query_string, canonical_request};
use crate::constants::{ALGORITHM, KEY_PREFIX, SCOPE_TERMINATOR, SIGNED_HEADERS};
use crate::Credential;

/// One signing instant, rendered in the three forms USBL1 needs.
///
/// All three are derived from the same `DateTime`; never build them from
/// separate clock reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningTime {
    /// `Mon, 02 Jan 2017 15:04:05 GMT`, sent as the `date` header.
    pub http_date: String,
    /// `20170102`, the key derivation and credential scope.
    pub short_date: String,
    /// `20170102T150405Z`, part of the string to sign.
    pub long_date: String,
}

impl SigningTime {
    /// Render the given instant.
    pub fn new(time: DateTime) -> Self {
        Self {
            http_date: format_http_date(time),
            short_date: format_date(time),
            long_date: format_iso8601(time),
        }
    }
}

impl From<DateTime> for SigningTime {
    fn from(time: DateTime) -> Self {
        Self::new(time)
    }
}

/// RequestSigner that implements USBL1-HMAC-SHA256.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<SignedRequest> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = self.time.unwrap_or_else(now);

        sign(req, cred, now)
    }
}

/// Sign `req` with `cred` at the instant `now`.
///
/// The result carries the `date` and `authorization` headers plus the url,
/// which is the path followed by `?query` only when the query is non-empty.
/// Empty keys are not rejected: they produce a well formed signature that
/// the server will refuse.
pub fn sign(req: SigningRequest, cred: &Credential, now: DateTime) -> Result<SignedRequest> {
    let time = SigningTime::new(now);

    let query = build_query_string(&req.query);
    let creq = canonical_request(
        req.method.as_str(),
        &req.path,
        &query,
        &time.http_date,
        req.authority.as_str(),
    );
    debug!("calculated canonical request: {creq:?}");

    // Scope: "20170102/usbl1_request"
    let scope = format!("{}/{SCOPE_TERMINATOR}", time.short_date);
    debug!("calculated scope: {scope}");

    let string_to_sign = string_to_sign(&time, &scope, &creq)?;
    debug!("calculated string to sign: {string_to_sign:?}");

    let signing_key = generate_signing_key(&cred.secret_key, &time.short_date)?;
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes())?;

    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(DATE, HeaderValue::from_str(&time.http_date)?);
    headers.insert(AUTHORIZATION, {
        let mut value = HeaderValue::from_str(&format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            cred.access_key
        ))?;
        value.set_sensitive(true);

        value
    });

    let url = if query.is_empty() {
        req.path
    } else {
        format!("{}?{query}", req.path)
    };

    Ok(SignedRequest { url, headers })
}

/// StringToSign:
///
/// ```text
/// USBL1-HMAC-SHA256
/// 20170102T150405Z
/// 20170102/usbl1_request
/// <hashed_canonical_request>
/// ```
fn string_to_sign(time: &SigningTime, scope: &str, creq: &str) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{ALGORITHM}")?;
    writeln!(f, "{}", time.long_date)?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(creq.as_bytes()))?;
    Ok(f)
}

fn generate_signing_key(secret: &str, short_date: &str) -> Result<Vec<u8>> {
    let sign_date = generate_date_key(secret, short_date)?;
    hmac_sha256(&sign_date, SCOPE_TERMINATOR.as_bytes())
}

fn generate_date_key(secret: &str, short_date: &str) -> Result<Vec<u8>> {
    let secret = format!("{KEY_PREFIX}{secret}");
    hmac_sha256(secret.as_bytes(), short_date.as_bytes())
}
