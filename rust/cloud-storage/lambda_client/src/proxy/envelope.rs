//! Wire types exchanged with a proxy style lambda.

use serde::{Deserialize, Serialize};

use super::error::{DecodeStage, EncodeErr, InvokeError};
use super::request::{InvocationRequest, Params};

/// The JSON document sent as the lambda payload.
///
/// Empty parameter maps are left out entirely since downstream handlers
/// treat a missing `queryStringParameters` differently from an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEnvelope<B> {
    pub resource: String,
    pub body: Option<B>,
    pub http_method: String,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub path_parameters: Params,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub query_string_parameters: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    pub authorizer: Params,
}

impl<B> From<InvocationRequest<B>> for InvocationEnvelope<B> {
    fn from(request: InvocationRequest<B>) -> Self {
        let http_method = request.http_method().as_str().to_string();
        let request_context = (!request.auth_context.is_empty()).then(|| RequestContext {
            authorizer: request.auth_context,
        });

        Self {
            resource: request.resource,
            body: request.body,
            http_method,
            path_parameters: request.path_params,
            query_string_parameters: request.query_params,
            request_context,
        }
    }
}

/// The JSON document a proxy style lambda responds with.
/// `body` holds the actual response as json text. Error responses may leave it out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    #[serde(alias = "StatusCode")]
    pub status_code: u16,
    #[serde(default, alias = "Body")]
    pub body: Option<String>,
}

/// Splits the request into the target function name and the serialized envelope.
pub fn encode_request<B>(request: InvocationRequest<B>) -> Result<(String, Vec<u8>), EncodeErr>
where
    B: Serialize,
{
    if request.service.is_empty() {
        return Err(EncodeErr::EmptyFunctionName);
    }

    let function_name = request.service.clone();
    let payload = serde_json::to_vec(&InvocationEnvelope::from(request))?;
    Ok((function_name, payload))
}

/// Parses the raw lambda response, checks the status and decodes the inner body.
pub fn decode_response<O>(payload: &[u8]) -> Result<O, InvokeError>
where
    O: serde::de::DeserializeOwned,
{
    let result: InvocationResult = serde_json::from_slice(payload).map_err(|source| {
        let payload = String::from_utf8_lossy(payload).into_owned();
        tracing::error!(
            error=?source,
            payload=%payload,
            "error during unmarshal of output payload"
        );
        InvokeError::Decoding {
            stage: DecodeStage::Envelope,
            payload,
            source,
        }
    })?;

    if result.status_code != 200 {
        let payload = String::from_utf8_lossy(payload).into_owned();
        tracing::warn!(status_code=%result.status_code, payload=%payload, "non 200 status code");
        return Err(InvokeError::NonSuccessStatus {
            status_code: result.status_code,
            payload,
        });
    }

    let body = result.body.unwrap_or_default();
    serde_json::from_str(&body).map_err(|source| {
        tracing::error!(
            error=?source,
            payload=%body,
            "error during unmarshal of response body"
        );
        InvokeError::Decoding {
            stage: DecodeStage::Body,
            payload: body,
            source,
        }
    })
}
