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

use std::fmt::{Debug, Formatter};

use http::uri::{Authority, Scheme};
use usblsign_core::{utils::Redact, Context, Error, Result};

use crate::constants::*;

/// Config carries all the configuration for the Usabilla API.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`USABILLA_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`USABILLA_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`USABILLA_HOST`]
    /// - default: `data.usabilla.com`
    pub host: Option<String>,
    /// `protocol` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`USABILLA_PROTOCOL`]
    /// - default: `https`
    pub protocol: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set protocol
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set on this config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(USABILLA_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(USABILLA_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(USABILLA_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(USABILLA_PROTOCOL) {
            self.protocol.get_or_insert(v);
        }

        self
    }

    /// The authority requests are sent to, and signed as the `host` header.
    pub fn authority(&self) -> Result<Authority> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        host.parse()
            .map_err(|e| Error::config_invalid(format!("invalid host '{host}'")).with_source(e))
    }

    /// The scheme requests are sent with.
    pub fn scheme(&self) -> Result<Scheme> {
        match self.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL) {
            "https" => Ok(Scheme::HTTPS),
            "http" => Ok(Scheme::HTTP),
            v => Err(Error::config_invalid(format!(
                "unsupported protocol '{v}', expected http or https"
            ))),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key.as_ref().map(Redact::from))
            .field("secret_key", &self.secret_key.as_ref().map(Redact::from))
            .field("host", &self.host)
            .field("protocol", &self.protocol)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use usblsign_core::{ErrorKind, StaticEnv};

    fn env_context() -> Context {
        Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (USABILLA_ACCESS_KEY.to_string(), "env_access_key".to_string()),
                (USABILLA_SECRET_KEY.to_string(), "env_secret_key".to_string()),
                (USABILLA_HOST.to_string(), "localhost:8080".to_string()),
                (USABILLA_PROTOCOL.to_string(), "http".to_string()),
            ]),
        })
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let cfg = Config::new();
        assert_eq!(cfg.authority()?.as_str(), "data.usabilla.com");
        assert_eq!(cfg.scheme()?, Scheme::HTTPS);
        Ok(())
    }

    #[test]
    fn test_from_env() -> Result<()> {
        let cfg = Config::new().from_env(&env_context());

        assert_eq!(cfg.access_key.as_deref(), Some("env_access_key"));
        assert_eq!(cfg.secret_key.as_deref(), Some("env_secret_key"));
        assert_eq!(cfg.authority()?.as_str(), "localhost:8080");
        assert_eq!(cfg.scheme()?, Scheme::HTTP);
        Ok(())
    }

    #[test]
    fn test_explicit_values_win_over_env() {
        let cfg = Config::new()
            .with_access_key("explicit_access_key")
            .with_host("data.example.com")
            .from_env(&env_context());

        assert_eq!(cfg.access_key.as_deref(), Some("explicit_access_key"));
        assert_eq!(cfg.secret_key.as_deref(), Some("env_secret_key"));
        assert_eq!(cfg.host.as_deref(), Some("data.example.com"));
    }

    #[test]
    fn test_invalid_protocol() {
        let err = Config::new().with_protocol("ftp").scheme().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_invalid_host() {
        let err = Config::new()
            .with_host("not a host")
            .authority()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_debug_is_redacted() {
        let cfg = Config::new().with_secret_key("a-very-long-secret-key");
        assert!(!format!("{cfg:?}").contains("a-very-long-secret-key"));
    }
}
