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

//! Usabilla API signing with convenience APIs.

pub use usblsign_usabilla::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default Usabilla signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default Usabilla signer.
///
/// This function creates a signer with:
/// - Default context (reqwest http client, OS environment)
/// - Default credential provider (reads `USABILLA_ACCESS_KEY` and
///   `USABILLA_SECRET_KEY`)
/// - USBL1 request signer
///
/// # Example
///
/// ```no_run
/// use http::uri::{Authority, Scheme};
/// use usblsign::SigningRequest;
///
/// # #[tokio::main]
/// # async fn main() -> usblsign::Result<()> {
/// let signer = usblsign::usabilla::default_signer();
///
/// let req = SigningRequest::new(
///     Scheme::HTTPS,
///     Authority::from_static("data.usabilla.com"),
///     "/live/websites/button",
/// );
/// let signed = signer.sign(req).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}
