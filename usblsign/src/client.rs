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

use bytes::Bytes;
use http::uri::{Authority, Scheme};
use http::StatusCode;
use log::debug;
use usblsign_core::{Context, Error, Result, SignedRequest, Signer, SigningRequest};
use usblsign_usabilla::{
    resolve_path, Config, ConfigCredentialProvider, Credential, DefaultCredentialProvider,
    RequestSigner,
};

use crate::resource;

/// Client signs requests to the Usabilla API and sends them through the
/// context's [`HttpSend`](usblsign_core::HttpSend).
///
/// Every call builds and signs a fresh request, so a client can be cloned
/// and shared between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    signer: Signer<Credential>,
    scheme: Scheme,
    authority: Authority,
}

impl Client {
    /// Create a client from config.
    ///
    /// Every field set on the config takes precedence over its env value
    /// (`USABILLA_ACCESS_KEY`, `USABILLA_SECRET_KEY`, `USABILLA_HOST`,
    /// `USABILLA_PROTOCOL`), so the two keys may come from different sources.
    /// Host and protocol default to `https://data.usabilla.com`.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let config = config.from_env(&ctx);
        let scheme = config.scheme()?;
        let authority = config.authority()?;

        let provider =
            DefaultCredentialProvider::new().push_front(ConfigCredentialProvider::new(config));
        let signer = Signer::new(ctx, provider, RequestSigner::new());

        Ok(Self::with_signer(signer, scheme, authority))
    }

    /// Create a client around an existing signer.
    pub fn with_signer(signer: Signer<Credential>, scheme: Scheme, authority: Authority) -> Self {
        Self {
            signer,
            scheme,
            authority,
        }
    }

    /// Sign a `GET` for the given path template without sending it.
    pub async fn sign<K, V>(
        &self,
        path_template: &str,
        id: Option<&str>,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<SignedRequest>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let req = SigningRequest::new(
            self.scheme.clone(),
            self.authority.clone(),
            resolve_path(path_template, id),
        )
        .with_query(params);

        self.signer.sign(req).await
    }

    /// Sign and send a `GET` for the given path template.
    ///
    /// Returns the response body on `200 OK`. Any other status is an
    /// unexpected error carrying the status and the body.
    pub async fn get<K, V>(
        &self,
        path_template: &str,
        id: Option<&str>,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Bytes>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let signed = self.sign(path_template, id, params).await?;
        self.send(signed).await
    }

    /// Sign and send a `GET` for a resource addressed by its dotted name,
    /// like `websites.button.feedback`.
    ///
    /// Fails with a request error when the resource is unknown, has no
    /// endpoint or needs an id that is not given.
    pub async fn get_resource<K, V>(
        &self,
        name: &str,
        id: Option<&str>,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Bytes>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let resource = resource::lookup(name)
            .ok_or_else(|| Error::request_invalid(format!("unknown resource '{name}'")))?;
        let path_template = resource.path_template.ok_or_else(|| {
            Error::request_invalid(format!("resource '{name}' has no endpoint"))
        })?;
        if resource.requires_id() && id.map_or(true, str::is_empty) {
            return Err(Error::request_invalid(format!(
                "resource '{name}' requires an id"
            )));
        }

        self.get(path_template, id, params).await
    }

    async fn send(&self, signed: SignedRequest) -> Result<Bytes> {
        let req = signed.to_http_request(&self.scheme, &self.authority)?;
        debug!("sending signed request: GET {}", req.uri());

        let resp = self.signer.context().http_send(req).await?;
        let status = resp.status();
        debug!("got response for {}: {status}", signed.url);

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(resp.body());
            return Err(Error::unexpected(format!(
                "request to {} failed with status {status}: {body}",
                signed.url
            )));
        }

        Ok(resp.into_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use http::header::{AUTHORIZATION, DATE};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use usblsign_core::time::parse_rfc3339;
    use usblsign_core::{ErrorKind, HttpSend, StaticEnv};
    use usblsign_usabilla::StaticCredentialProvider;

    #[derive(Debug, Clone)]
    struct Recorded {
        method: http::Method,
        uri: http::Uri,
        headers: http::HeaderMap,
        body: Bytes,
    }

    #[derive(Debug, Clone)]
    struct MockHttpSend {
        status: StatusCode,
        body: &'static str,
        requests: Arc<Mutex<Vec<Recorded>>>,
    }

    impl MockHttpSend {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Arc::default(),
            }
        }

        fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpSend for MockHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            let (parts, body) = req.into_parts();
            self.requests.lock().unwrap().push(Recorded {
                method: parts.method,
                uri: parts.uri,
                headers: parts.headers,
                body,
            });
            Ok(http::Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))?)
        }
    }

    fn golden_client(mock: MockHttpSend) -> Client {
        let now = parse_rfc3339("2017-01-02T15:04:05Z").expect("must be valid time");
        let signer = Signer::new(
            Context::new().with_http_send(mock),
            StaticCredentialProvider::new("AK", "SK"),
            RequestSigner::new().with_time(now),
        );

        Client::with_signer(
            signer,
            Scheme::HTTPS,
            Authority::from_static("data.usabilla.com"),
        )
    }

    fn no_params() -> Vec<(String, String)> {
        Vec::new()
    }

    #[tokio::test]
    async fn test_get_sends_signed_request() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock = MockHttpSend::new(StatusCode::OK, r#"{"items":[]}"#);
        let client = golden_client(mock.clone());

        let body = client
            .get("/live/websites/button/:id/feedback", Some("42"), [("limit", "5")])
            .await?;
        assert_eq!(body, Bytes::from_static(br#"{"items":[]}"#));

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method, http::Method::GET);
        assert_eq!(
            req.uri.to_string(),
            "https://data.usabilla.com/live/websites/button/42/feedback?limit=5"
        );
        assert_eq!(req.headers[DATE], "Mon, 02 Jan 2017 15:04:05 GMT");
        assert_eq!(
            req.headers[AUTHORIZATION],
            "USBL1-HMAC-SHA256 Credential=AK/20170102/usbl1_request, \
             SignedHeaders=date;host, \
             Signature=fc10acc1cf374dec36b73d99559e538f77d2ff92f853bc784606a28265686692"
        );
        assert!(req.body.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_ok_status_is_error() {
        let mock = MockHttpSend::new(StatusCode::UNAUTHORIZED, r#"{"error":"denied"}"#);
        let client = golden_client(mock);

        let err = client
            .get("/live/websites/button", None, no_params())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.message().contains("401"), "{err}");
        assert!(err.message().contains(r#"{"error":"denied"}"#), "{err}");
    }

    #[tokio::test]
    async fn test_get_resource_with_wildcard_id() -> Result<()> {
        let mock = MockHttpSend::new(StatusCode::OK, "{}");
        let client = golden_client(mock.clone());

        client
            .get_resource("apps.feedback", Some("*"), [("limit", "10")])
            .await?;

        assert_eq!(
            mock.requests()[0].uri.path_and_query().map(|v| v.as_str()),
            Some("/live/apps/%2A/feedback?limit=10")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_get_resource_rejects_bad_names() {
        let mock = MockHttpSend::new(StatusCode::OK, "{}");
        let client = golden_client(mock.clone());

        for (name, id) in [
            ("websites.unknown", None),
            ("websites", None),
            ("websites.campaign.results", None),
            ("websites.campaign.results", Some("")),
        ] {
            let err = client
                .get_resource(name, id, no_params())
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::RequestInvalid, "{name}");
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_new_reads_env() -> Result<()> {
        let mock = MockHttpSend::new(StatusCode::OK, "{}");
        let ctx = Context::new()
            .with_http_send(mock.clone())
            .with_env(StaticEnv {
                envs: HashMap::from([
                    ("USABILLA_ACCESS_KEY".to_string(), "env_access_key".to_string()),
                    ("USABILLA_SECRET_KEY".to_string(), "env_secret_key".to_string()),
                    ("USABILLA_HOST".to_string(), "localhost:8080".to_string()),
                    ("USABILLA_PROTOCOL".to_string(), "http".to_string()),
                ]),
            });

        let client = Client::new(ctx, Config::new())?;
        client.get("/live/apps", None, no_params()).await?;

        let requests = mock.requests();
        let req = &requests[0];
        assert_eq!(req.uri.to_string(), "http://localhost:8080/live/apps");
        assert!(req.headers[AUTHORIZATION]
            .to_str()
            .expect("must be valid")
            .contains("Credential=env_access_key/"));
        Ok(())
    }

    #[tokio::test]
    async fn test_new_prefers_config_keys() -> Result<()> {
        let mock = MockHttpSend::new(StatusCode::OK, "{}");
        let ctx = Context::new()
            .with_http_send(mock.clone())
            .with_env(StaticEnv {
                envs: HashMap::from([
                    ("USABILLA_ACCESS_KEY".to_string(), "env_access_key".to_string()),
                    ("USABILLA_SECRET_KEY".to_string(), "env_secret_key".to_string()),
                ]),
            });

        let config = Config::new()
            .with_access_key("config_access_key")
            .with_secret_key("config_secret_key");
        let client = Client::new(ctx, config)?;
        let signed = client.sign("/live/apps", None, no_params()).await?;

        assert!(signed.headers[AUTHORIZATION]
            .to_str()
            .expect("must be valid")
            .contains("Credential=config_access_key/"));
        assert!(mock.requests().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_new_merges_keys_from_config_and_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                "USABILLA_SECRET_KEY".to_string(),
                "env_secret_key".to_string(),
            )]),
        });

        let client = Client::new(ctx, Config::new().with_access_key("config_access_key"))?;
        let signed = client.sign("/live/apps", None, no_params()).await?;

        assert!(signed.headers[AUTHORIZATION]
            .to_str()
            .expect("must be valid")
            .contains("Credential=config_access_key/"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_credential() -> Result<()> {
        let mock = MockHttpSend::new(StatusCode::OK, "{}");
        let client = Client::new(Context::new().with_http_send(mock.clone()), Config::new())?;

        let err = client
            .get("/live/apps", None, no_params())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(mock.requests().is_empty());
        Ok(())
    }

    #[test]
    fn test_new_rejects_invalid_protocol() {
        let err = Client::new(Context::new(), Config::new().with_protocol("ftp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
