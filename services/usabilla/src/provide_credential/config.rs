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

use async_trait::async_trait;
use usblsign_core::{Context, ProvideCredential, Result};

use crate::{Config, Credential};

/// ConfigCredentialProvider provides the credential carried by a [`Config`].
///
/// Nothing is provided unless both keys are set.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.access_key, &self.config.secret_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak, sk))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_credential_provider() -> Result<()> {
        let provider = ConfigCredentialProvider::new(
            Config::new()
                .with_access_key("config_access_key")
                .with_secret_key("config_secret_key"),
        );

        let cred = provider
            .provide_credential(&Context::new())
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.access_key, "config_access_key");
        assert_eq!(cred.secret_key, "config_secret_key");
        Ok(())
    }

    #[tokio::test]
    async fn test_config_credential_provider_incomplete() -> Result<()> {
        let provider = ConfigCredentialProvider::new(Config::new().with_secret_key("only_secret"));

        assert!(provider.provide_credential(&Context::new()).await?.is_none());
        Ok(())
    }
}
