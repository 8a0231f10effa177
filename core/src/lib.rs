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

//! Core components for signing Usabilla API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! usblsign crates.
//!
//! ## Overview
//!
//! - **Context**: holds the environment and http client implementations
//! - **Traits**: [`ProvideCredential`] loads credentials, [`SignRequest`] turns a
//!   [`SigningRequest`] into a [`SignedRequest`]
//! - **Signer**: loads the credential once and drives the request signer
//!
//! ## Example
//!
//! ```no_run
//! use usblsign_core::{
//!     Context, ProvideCredential, Result, SignRequest, SignedRequest, Signer,
//!     SigningCredential, SigningRequest,
//! };
//! use async_trait::async_trait;
//! use http::uri::{Authority, Scheme};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential { key: "my-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _: &Context,
//!         _req: SigningRequest,
//!         _cred: Option<&Self::Credential>,
//!     ) -> Result<SignedRequest> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//! let req = SigningRequest::new(
//!     Scheme::HTTPS,
//!     Authority::from_static("data.usabilla.com"),
//!     "/live/apps",
//! );
//! let signed = signer.sign(req).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::Context;
mod http;
pub use http::HttpSend;
mod env;
pub use env::{Env, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};
mod request;
pub use request::{SignedRequest, SigningRequest};
mod signer;
pub use signer::Signer;
