use aws_sdk_lambda::operation::invoke::InvokeOutput;
use aws_sdk_lambda::types::InvocationType;
use aws_smithy_types::Blob;
use thiserror::Error;

/// Errors produced while talking to the Lambda service itself.
#[derive(Debug, Error)]
pub enum AwsLambdaErr {
    #[error("{0:?}")]
    Sdk(#[from] aws_sdk_lambda::Error),
    #[error("function {function_name} returned an unhandled error: {kind}")]
    Function { function_name: String, kind: String },
    #[error("lambda invocation failed with status code {0}")]
    UnexpectedStatus(i32),
}

/// Invokes the lambda and waits for its response payload.
#[tracing::instrument(skip(client, payload), fields(payload_len = payload.len()))]
pub(crate) async fn invoke_request_response(
    client: &aws_sdk_lambda::Client,
    function_name: &str,
    payload: Vec<u8>,
) -> Result<Vec<u8>, AwsLambdaErr> {
    let response = client
        .invoke()
        .function_name(function_name)
        .invocation_type(InvocationType::RequestResponse)
        .payload(Blob::new(payload))
        .send()
        .await
        .map_err(aws_sdk_lambda::Error::from)?;

    response_payload(function_name, response)
}

/// Takes the payload out of a RequestResponse invocation.
/// A function that threw is reported through `FunctionError` rather than the sdk error.
fn response_payload(function_name: &str, response: InvokeOutput) -> Result<Vec<u8>, AwsLambdaErr> {
    if let Some(kind) = response.function_error() {
        return Err(AwsLambdaErr::Function {
            function_name: function_name.to_string(),
            kind: kind.to_string(),
        });
    }

    Ok(response.payload.map(Blob::into_inner).unwrap_or_default())
}

/// Invokes the lambda as an event.
/// It does not wait for the response.
#[tracing::instrument(skip(client, payload), fields(payload_len = payload.len()))]
pub(crate) async fn invoke_event(
    client: &aws_sdk_lambda::Client,
    function_name: &str,
    payload: Vec<u8>,
) -> Result<(), AwsLambdaErr> {
    let response = client
        .invoke()
        .function_name(function_name)
        .invocation_type(InvocationType::Event)
        .payload(Blob::new(payload))
        .send()
        .await
        .map_err(aws_sdk_lambda::Error::from)?;

    event_accepted(&response)
}

// 202 is the expected status code for Event invocations
fn event_accepted(response: &InvokeOutput) -> Result<(), AwsLambdaErr> {
    match response.status_code() {
        202 => Ok(()),
        status_code => Err(AwsLambdaErr::UnexpectedStatus(status_code)),
    }
}

#[cfg(test)]
mod tests {
    use cool_asserts::assert_matches;

    use super::*;

    #[test]
    fn it_should_return_the_response_payload() {
        let response = InvokeOutput::builder()
            .status_code(200)
            .payload(Blob::new(r#"{"statusCode":200,"body":"{}"}"#))
            .build();

        let payload = response_payload("document-service", response).unwrap();
        assert_eq!(payload, br#"{"statusCode":200,"body":"{}"}"#);
    }

    #[test]
    fn it_should_return_an_empty_payload_when_none_is_sent() {
        let response = InvokeOutput::builder().status_code(200).build();
        assert_eq!(response_payload("document-service", response).unwrap(), b"");
    }

    #[test]
    fn it_should_map_function_errors() {
        let response = InvokeOutput::builder()
            .status_code(200)
            .function_error("Unhandled")
            .payload(Blob::new(r#"{"errorMessage":"boom"}"#))
            .build();

        assert_matches!(
            response_payload("document-service", response),
            Err(AwsLambdaErr::Function { function_name, kind }) => {
                assert_eq!(function_name, "document-service");
                assert_eq!(kind, "Unhandled");
            }
        );
    }

    #[test]
    fn it_should_accept_202_for_events() {
        let response = InvokeOutput::builder().status_code(202).build();
        assert_matches!(event_accepted(&response), Ok(()));
    }

    #[test]
    fn it_should_reject_other_event_statuses() {
        for status in [200, 204, 400, 500] {
            let response = InvokeOutput::builder().status_code(status).build();
            assert_matches!(
                event_accepted(&response),
                Err(AwsLambdaErr::UnexpectedStatus(status_code)) => {
                    assert_eq!(status_code, status);
                }
            );
        }
    }
}
