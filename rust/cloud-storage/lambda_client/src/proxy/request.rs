use http::Method;
use serde_json::{Map, Value};

/// A string keyed map of json values, used for path / query params and the auth context
pub type Params = Map<String, Value>;

/// An HTTP-like request to send to a lambda sitting behind a proxy style integration.
///
/// `B` is the request body, which is serialized as-is into the envelope.
#[derive(Debug, Clone)]
pub struct InvocationRequest<B = Value> {
    /// The name or arn of the function to invoke
    pub service: String,
    /// The logical route the function should handle
    pub resource: String,
    pub body: Option<B>,
    /// Defaults to GET when unset
    pub method: Option<Method>,
    pub path_params: Params,
    pub query_params: Params,
    /// Pre-validated authorizer claims forwarded as `requestContext.authorizer`
    pub auth_context: Params,
}

impl<B> InvocationRequest<B> {
    pub fn new(service: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            resource: resource.into(),
            body: None,
            method: None,
            path_params: Params::new(),
            query_params: Params::new(),
            auth_context: Params::new(),
        }
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.path_params.insert(key.into(), value.into());
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn auth_context(mut self, auth_context: Params) -> Self {
        self.auth_context = auth_context;
        self
    }

    /// The http method that will be sent, falling back to GET
    pub fn http_method(&self) -> &Method {
        self.method.as_ref().unwrap_or(&Method::GET)
    }
}
