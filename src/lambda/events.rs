use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// API Gateway REST proxy request (only the fields the handlers read)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    /// API Gateway sends `null` when there are no headers
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: Option<bool>,
}

impl ApiGatewayRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_preflight(&self) -> bool {
        self.http_method
            .as_deref()
            .is_some_and(|method| method.eq_ignore_ascii_case("OPTIONS"))
    }
}

/// API Gateway REST proxy response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// S3 object-created notification
#[derive(Debug, Default, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3EventRecord {
    #[serde(default)]
    pub event_name: Option<String>,

    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    /// URL-encoded, with `+` for spaces
    pub key: String,

    #[serde(default)]
    pub size: Option<u64>,
}

impl S3Object {
    /// The object key as stored in the bucket
    pub fn decoded_key(&self) -> String {
        let spaced = self.key.replace('+', " ");

        match urlencoding::decode(&spaced) {
            Ok(key) => key.into_owned(),
            Err(e) => {
                warn!("Key {:?} is not valid percent-encoding ({}); using it as-is", self.key, e);
                self.key.replace('+', " ")
            }
        }
    }
}

/// Acknowledgement returned to the runtime after a successful summarization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeAck {
    pub status_code: u16,
    pub body: String,
}
