/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::BuildError;
use crate::idempotency_token::IdempotencyTokenProvider;
use http::Uri;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// The AWS region requests are sent to, e.g. `us-east-1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Region(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Region(Cow::Borrowed(region))
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait ProvideRegion {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for &str {
    fn region(&self) -> Option<Region> {
        Some(Region::new((*self).to_owned()))
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
#[derive(Debug, Default)]
pub struct EnvironmentProvider {
    fake: Option<HashMap<String, String>>,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { fake: None }
    }

    /// Read variables from `env` instead of the process environment
    pub fn from_map(env: HashMap<String, String>) -> Self {
        EnvironmentProvider { fake: Some(env) }
    }

    fn get(&self, key: &str) -> Option<String> {
        match &self.fake {
            Some(env) => env.get(key).cloned(),
            None => std::env::var(key).ok(),
        }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        self.get("AWS_REGION")
            .or_else(|| self.get("AWS_DEFAULT_REGION"))
            .filter(|region| !region.is_empty())
            .map(Region::new)
    }
}

/// Configuration shared by every operation constructed for Rekognition.
#[derive(Clone, Debug)]
pub struct Config {
    region: Option<Region>,
    endpoint: Option<Uri>,
    idempotency_token_provider: IdempotencyTokenProvider,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region taken from the environment
    pub fn from_env() -> Self {
        Config::builder()
            .region(EnvironmentProvider::new())
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn idempotency_token_provider(&self) -> &IdempotencyTokenProvider {
        &self.idempotency_token_provider
    }

    /// The URI requests are sent to: the configured endpoint, or the regional endpoint.
    pub fn endpoint_uri(&self) -> Result<Uri, BuildError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self.region.as_ref().ok_or(BuildError::MissingRegion)?;
        let uri = format!("https://rekognition.{}.amazonaws.com/", region);
        uri.parse::<Uri>()
            .map_err(|_| BuildError::InvalidEndpoint(uri))
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Uri>,
    idempotency_token_provider: Option<IdempotencyTokenProvider>,
}

impl Builder {
    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Send requests to `endpoint` instead of the regional endpoint
    pub fn endpoint(mut self, endpoint: Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn set_endpoint(mut self, endpoint: Option<Uri>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn idempotency_token_provider(
        mut self,
        idempotency_token_provider: impl Into<IdempotencyTokenProvider>,
    ) -> Self {
        self.idempotency_token_provider = Some(idempotency_token_provider.into());
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
            idempotency_token_provider: self
                .idempotency_token_provider
                .unwrap_or_else(IdempotencyTokenProvider::random),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, EnvironmentProvider, ProvideRegion, Region};
    use crate::error::BuildError;
    use http::Uri;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> EnvironmentProvider {
        EnvironmentProvider::from_map(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn aws_region_takes_precedence() {
        let provider = env(&[("AWS_REGION", "eu-west-1"), ("AWS_DEFAULT_REGION", "us-east-1")]);
        assert_eq!(provider.region(), Some(Region::from_static("eu-west-1")));

        let provider = env(&[("AWS_DEFAULT_REGION", "us-east-1")]);
        assert_eq!(provider.region(), Some(Region::new("us-east-1")));

        assert_eq!(env(&[]).region(), None);
        assert_eq!(env(&[("AWS_REGION", "")]).region(), None);
    }

    #[test]
    fn regional_endpoint() {
        let config = Config::builder().region("ap-southeast-2").build();
        assert_eq!(
            config.endpoint_uri().unwrap(),
            Uri::from_static("https://rekognition.ap-southeast-2.amazonaws.com/")
        );
        assert_eq!(config.region().map(|r| r.as_ref()), Some("ap-southeast-2"));
    }

    #[test]
    fn endpoint_override_does_not_need_a_region() {
        let config = Config::builder()
            .endpoint(Uri::from_static("http://localhost:4566/"))
            .build();
        assert_eq!(
            config.endpoint_uri().unwrap(),
            Uri::from_static("http://localhost:4566/")
        );
    }

    #[test]
    fn missing_region() {
        let config = Config::builder().region(None::<Region>).build();
        assert!(matches!(
            config.endpoint_uri(),
            Err(BuildError::MissingRegion)
        ));
    }

    #[test]
    fn invalid_region() {
        let config = Config::builder().region("not a region").build();
        assert!(matches!(
            config.endpoint_uri(),
            Err(BuildError::InvalidEndpoint(_))
        ));
    }
}
