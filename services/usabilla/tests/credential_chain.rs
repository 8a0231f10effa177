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

//! Integration tests for ProvideCredentialChain with Usabilla credentials

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use usblsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result, StaticEnv};
use usblsign_usabilla::{
    Config, ConfigCredentialProvider, Credential, DefaultCredentialProvider,
    EnvCredentialProvider,
};

/// Mock provider that tracks how many times it was called
#[derive(Debug)]
struct CountingProvider {
    name: &'static str,
    return_credential: bool,
    call_count: Arc<AtomicUsize>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.return_credential {
            Ok(Some(Credential::new(
                format!("{}_key", self.name),
                format!("{}_secret", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

#[tokio::test]
async fn test_chain_stops_at_first_success() -> Result<()> {
    let counts: Vec<_> = (0..3).map(|_| Arc::new(AtomicUsize::new(0))).collect();

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1",
            return_credential: false,
            call_count: counts[0].clone(),
        })
        .push(CountingProvider {
            name: "provider2",
            return_credential: true,
            call_count: counts[1].clone(),
        })
        .push(CountingProvider {
            name: "provider3",
            return_credential: true,
            call_count: counts[2].clone(),
        });

    let cred = chain
        .provide_credential(&Context::new())
        .await?
        .expect("credential must be provided");
    assert_eq!(cred.access_key, "provider2_key");
    assert_eq!(cred.secret_key, "provider2_secret");

    assert_eq!(counts[0].load(Ordering::SeqCst), 1);
    assert_eq!(counts[1].load(Ordering::SeqCst), 1);
    assert_eq!(counts[2].load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_chain_with_real_providers() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("USABILLA_ACCESS_KEY".to_string(), "env_key".to_string()),
            ("USABILLA_SECRET_KEY".to_string(), "env_secret".to_string()),
        ]),
    });

    // Incomplete config yields nothing, so env is used.
    let chain = ProvideCredentialChain::new()
        .push(ConfigCredentialProvider::new(
            Config::new().with_access_key("config_key"),
        ))
        .push(EnvCredentialProvider::new());

    let cred = DefaultCredentialProvider::with_chain(chain)
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");
    assert_eq!(cred.access_key, "env_key");
    assert_eq!(cred.secret_key, "env_secret");
    Ok(())
}
