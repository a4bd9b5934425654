use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for requesting signed direct-upload parameters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadSignatureRequestDto {
    pub folder: Option<String>,
    pub public_id: Option<String>,
}

/// Signed parameters the client forwards verbatim to the media CDN upload
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadSignatureDto {
    pub api_key: String,
    pub cloud_name: String,
    pub timestamp: i64,
    pub folder: Option<String>,
    pub public_id: Option<String>,
    pub signature: String,
}
