//! The seam between the invocation adapter and whatever actually executes the function.

use crate::invoke::{self, AwsLambdaErr};

/// Executes a remote function given its identifier and a raw payload.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait LambdaTransport: Send + Sync + 'static {
    /// the error type that can occur
    type Err: Into<Box<dyn std::error::Error + Send + Sync>> + Send;

    /// invoke the function and wait for the raw response payload
    fn invoke(
        &self,
        function_name: &str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Err>> + Send;

    /// invoke the function without waiting for it to complete
    fn invoke_event(
        &self,
        function_name: &str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// [LambdaTransport] backed by the AWS Lambda service.
#[derive(Clone, Debug)]
pub struct AwsLambda {
    /// Inner Lambda client
    inner: aws_sdk_lambda::Client,
}

impl AwsLambda {
    pub fn new(inner: aws_sdk_lambda::Client) -> Self {
        Self { inner }
    }
}

impl LambdaTransport for AwsLambda {
    type Err = AwsLambdaErr;

    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Vec<u8>, AwsLambdaErr> {
        invoke::invoke_request_response(&self.inner, function_name, payload).await
    }

    async fn invoke_event(
        &self,
        function_name: &str,
        payload: Vec<u8>,
    ) -> Result<(), AwsLambdaErr> {
        invoke::invoke_event(&self.inner, function_name, payload).await
    }
}
