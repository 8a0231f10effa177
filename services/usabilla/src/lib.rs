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

//! Signer for the Usabilla API (USBL1-HMAC-SHA256).
//!
//! Signing happens in two steps:
//!
//! - the canonical request is built from method, path, sorted query, `date`
//!   and `host`;
//! - a signing key is derived from the secret key and the date through an
//!   HMAC-SHA256 chain, and signs the hashed canonical request.
//!
//! ## Example
//!
//! ```no_run
//! use http::uri::{Authority, Scheme};
//! use usblsign_core::{Context, Signer, SigningRequest};
//! use usblsign_usabilla::{resolve_path, RequestSigner, StaticCredentialProvider};
//!
//! # async fn example() -> usblsign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("access_key", "secret_key"),
//!     RequestSigner::new(),
//! );
//!
//! let req = SigningRequest::new(
//!     Scheme::HTTPS,
//!     Authority::from_static("data.usabilla.com"),
//!     resolve_path("/live/websites/button/:id/feedback", Some("42")),
//! )
//! .with_query([("limit", "5")]);
//!
//! let signed = signer.sign(req).await?;
//! println!("GET {} with {:?}", signed.url, signed.headers);
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{build_query_string, canonical_request, resolve_path};

mod sign_request;
pub use sign_request::{sign, RequestSigner, SigningTime};

mod provide_credential;
pub use provide_credential::*;

mod constants;
