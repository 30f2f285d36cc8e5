use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Commerce service domain error variants.
///
/// Every rejection carries a machine-readable `kind` and a human-readable
/// message; only `Internal` hides detail from the client.
#[derive(Debug, thiserror::Error)]
pub enum CommerceServiceError {
    #[error("missing or invalid credential")]
    Unauthenticated,
    #[error("invalid api key")]
    InvalidApiKey,
    #[error("forbidden")]
    Forbidden,
    #[error("business not found")]
    BusinessNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("sale not found")]
    SaleNotFound,
    #[error("invoice not found")]
    InvoiceNotFound,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("missing data")]
    MissingData,
    #[error("buyer name is required")]
    MissingBuyerName,
    #[error("sale requires at least one item")]
    EmptyItems,
    #[error("quantity must be a positive integer")]
    InvalidQuantity,
    #[error("price must be non-negative")]
    InvalidPrice,
    #[error("stock must be non-negative")]
    InvalidStock,
    #[error("seller does not belong to this business")]
    InvalidSeller,
    #[error("product {product} does not belong to this business")]
    ProductBusinessMismatch { product: String },
    #[error("insufficient stock for product {product}")]
    InsufficientStock { product: String },
    #[error("employee already exists")]
    EmployeeAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CommerceServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::Forbidden => "FORBIDDEN",
            Self::BusinessNotFound => "BUSINESS_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::SaleNotFound => "SALE_NOT_FOUND",
            Self::InvoiceNotFound => "INVOICE_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::MissingBuyerName => "MISSING_BUYER_NAME",
            Self::EmptyItems => "EMPTY_ITEMS",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidStock => "INVALID_STOCK",
            Self::InvalidSeller => "INVALID_SELLER",
            Self::ProductBusinessMismatch { .. } => "PRODUCT_BUSINESS_MISMATCH",
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            Self::EmployeeAlreadyExists => "EMPLOYEE_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CommerceServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated | Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BusinessNotFound
            | Self::ProductNotFound
            | Self::SaleNotFound
            | Self::InvoiceNotFound
            | Self::EmployeeNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::MissingData
            | Self::MissingBuyerName
            | Self::EmptyItems
            | Self::InvalidQuantity
            | Self::InvalidPrice
            | Self::InvalidStock
            | Self::InvalidSeller
            | Self::ProductBusinessMismatch { .. }
            | Self::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
            Self::EmployeeAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests; 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
