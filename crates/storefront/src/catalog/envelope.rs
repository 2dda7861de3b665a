//! The `{success, data, meta|pagination, error?}` response envelope.

use maybel_core::PageMeta;
use serde::Deserialize;

use super::CatalogError;

/// Envelope wrapping every catalog API response.
///
/// Older deployments name the pagination block `pagination`, newer ones
/// `meta`; both decode into [`Envelope::meta`].
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, alias = "pagination")]
    pub meta: Option<PageMeta>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// Server-supplied error details on a failed response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// `context` names the requested resource for error messages.
    ///
    /// # Errors
    ///
    /// `CatalogError::Api` when `success` is false, `CatalogError::NotFound`
    /// when a successful envelope carries no data.
    pub fn into_payload(self, context: &str) -> Result<(T, Option<PageMeta>), CatalogError> {
        if !self.success {
            let (code, message) = match self.error {
                Some(ApiErrorBody { code, message }) => (code, message),
                None => (None, None),
            };
            return Err(CatalogError::Api {
                code,
                message: message.unwrap_or_else(|| "unknown API error".to_string()),
            });
        }
        match self.data {
            Some(data) => Ok((data, self.meta)),
            None => Err(CatalogError::NotFound(context.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_successful_envelope_with_meta() {
        let json = r#"{
            "success": true,
            "data": [1, 2, 3],
            "meta": {"page": 2, "limit": 20, "total": 45, "total_pages": 3}
        }"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).expect("valid envelope");
        let (data, meta) = envelope.into_payload("/products").expect("success payload");
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(meta.map(|m| m.total), Some(45));
    }

    #[test]
    fn accepts_pagination_as_meta_alias() {
        let json = r#"{
            "success": true,
            "data": [],
            "pagination": {"page": 1, "limit": 20, "total": 0, "total_pages": 0}
        }"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).expect("valid envelope");
        assert!(envelope.meta.is_some());
    }

    #[test]
    fn success_false_surfaces_server_error() {
        let json = r#"{
            "success": false,
            "error": {"code": "CATEGORY_NOT_ACTIVE", "message": "category is inactive"}
        }"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).expect("valid envelope");
        let err = envelope
            .into_payload("/categories/c1")
            .expect_err("failure envelope");
        match err {
            CatalogError::Api { code, message } => {
                assert_eq!(code.as_deref(), Some("CATEGORY_NOT_ACTIVE"));
                assert_eq!(message, "category is inactive");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_false_without_body_gets_generic_message() {
        let json = r#"{"success": false}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).expect("valid envelope");
        let err = envelope.into_payload("/products").expect_err("failure");
        assert_eq!(err.to_string(), "API error: unknown API error");
    }

    #[test]
    fn missing_data_on_success_is_not_found() {
        let json = r#"{"success": true}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).expect("valid envelope");
        let err = envelope.into_payload("/products/p9").expect_err("no data");
        assert!(err.is_not_found());
    }
}
