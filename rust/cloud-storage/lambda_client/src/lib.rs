mod config;
mod invoke;
pub mod proxy;
mod transport;

pub use config::LambdaConfig;
pub use invoke::AwsLambdaErr;
pub use transport::{AwsLambda, LambdaTransport};

use proxy::{EncodeErr, InvocationRequest, InvokeError};
use serde::{Serialize, de::DeserializeOwned};

#[cfg(test)]
pub use transport::MockLambdaTransport;

#[derive(Clone, Debug)]
pub struct Lambda<T = AwsLambda> {
    /// Whatever executes the function
    transport: T,
}

impl Lambda<AwsLambda> {
    pub fn new(inner: aws_sdk_lambda::Client) -> Self {
        Self::with_transport(AwsLambda::new(inner))
    }

    /// Builds the aws client from the provided config.
    pub async fn from_config(config: &LambdaConfig) -> Self {
        let aws_config = config.load().await;
        Self::new(aws_sdk_lambda::Client::new(&aws_config))
    }
}

impl<T> Lambda<T>
where
    T: LambdaTransport,
{
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Invokes the lambda as a proxy style http request and waits for the response.
    /// The json text in the response body is decoded into `O`.
    #[tracing::instrument(
        skip(self, request),
        fields(function_name = %request.service, resource = %request.resource)
    )]
    pub async fn invoke<B, O>(&self, request: InvocationRequest<B>) -> Result<O, InvokeError>
    where
        B: Serialize,
        O: DeserializeOwned,
    {
        let (function_name, payload) = proxy::encode_request(request).inspect_err(|err| {
            tracing::error!(error=?err, "could not encode payload");
        })?;

        let response = self
            .transport
            .invoke(&function_name, payload)
            .await
            .map_err(|err| {
                let err: Box<dyn std::error::Error + Send + Sync> = err.into();
                tracing::error!(error=?err, "lambda client error");
                InvokeError::Transport(err)
            })?;

        proxy::decode_response(&response)
    }

    /// Executes the lambda as an event.
    /// It does not wait for the response.
    #[tracing::instrument(skip(self, invoke_args))]
    pub async fn invoke_event<A>(
        &self,
        function_name: &str,
        invoke_args: &A,
    ) -> Result<(), InvokeError>
    where
        A: Serialize,
    {
        if function_name.is_empty() {
            return Err(EncodeErr::EmptyFunctionName.into());
        }

        let payload = serde_json::to_vec(invoke_args)
            .map_err(EncodeErr::from)
            .inspect_err(|err| tracing::error!(error=?err, "unable to serialize invoke args"))?;

        self.transport
            .invoke_event(function_name, payload)
            .await
            .map_err(|err| {
                let err: Box<dyn std::error::Error + Send + Sync> = err.into();
                tracing::error!(error=?err, "unable to invoke lambda");
                InvokeError::Transport(err)
            })
    }
}
