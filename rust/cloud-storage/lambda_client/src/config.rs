use anyhow::Context;

const DEFAULT_REGION: &str = "us-east-1";

/// Where the lambda client should send its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    /// The aws region, `LAMBDA_REGION`. Defaults to us-east-1
    pub region: String,
    /// Overrides the service endpoint, `LAMBDA_ENDPOINT_URL`. Used for local emulators
    pub endpoint_url: Option<String>,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
        }
    }
}

impl LambdaConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = var("LAMBDA_REGION").unwrap_or(DEFAULT_REGION.to_string());
        if region.trim().is_empty() {
            return Err(anyhow::anyhow!("LAMBDA_REGION must not be empty"))
                .context("invalid lambda config");
        }

        let endpoint_url = var("LAMBDA_ENDPOINT_URL").filter(|url| !url.is_empty());

        Ok(Self {
            region,
            endpoint_url,
        })
    }

    /// Loads the shared aws config for this region / endpoint.
    pub async fn load(&self) -> aws_config::SdkConfig {
        let loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        match &self.endpoint_url {
            Some(endpoint_url) => loader.endpoint_url(endpoint_url).load().await,
            None => loader.load().await,
        }
    }
}
