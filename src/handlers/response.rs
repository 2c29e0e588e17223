use serde_json::{json, Value};

/// Cross-origin headers attached to an endpoint's responses
#[derive(Debug, Clone, Copy)]
pub struct CorsPolicy {
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
}

pub const UPLOAD_CORS: CorsPolicy = CorsPolicy {
    allow_methods: "POST,OPTIONS",
    allow_headers: "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,Content-Disposition",
};

pub const LISTING_CORS: CorsPolicy = CorsPolicy {
    allow_methods: "GET,OPTIONS",
    allow_headers: "Content-Type",
};

/// Transport-neutral HTTP response produced by the handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl HandlerResponse {
    pub fn json(status: u16, body: &Value, cors: &CorsPolicy) -> Self {
        let mut response = Self::with_cors(status, cors, body.to_string());
        response
            .headers
            .push(("Content-Type", "application/json".to_string()));
        response
    }

    /// `{message, error}` body used for every unexpected failure
    pub fn internal_error(error: &str, cors: &CorsPolicy) -> Self {
        Self::json(
            500,
            &json!({ "message": "Internal Server Error", "error": error }),
            cors,
        )
    }

    /// Empty 200 answering a CORS preflight
    pub fn preflight(cors: &CorsPolicy) -> Self {
        Self::with_cors(200, cors, String::new())
    }

    fn with_cors(status: u16, cors: &CorsPolicy, body: String) -> Self {
        Self {
            status,
            headers: vec![
                ("Access-Control-Allow-Origin", "*".to_string()),
                ("Access-Control-Allow-Methods", cors.allow_methods.to_string()),
                ("Access-Control-Allow-Headers", cors.allow_headers.to_string()),
            ],
            body,
        }
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
