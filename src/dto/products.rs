use axum::extract::Multipart;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::Product;

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

/// An image part pulled out of a multipart form.
#[derive(Debug)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The admin product form: text fields arrive as strings and are validated
/// by the service layer; the image part is optional.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub category: Option<String>,
    pub image: Option<UploadedImage>,
}

impl ProductForm {
    /// Drain a multipart body into the form. Unknown fields are ignored;
    /// a file part without a filename (browsers send one when the picker is
    /// left empty) counts as no image.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?
        {
            let Some(name) = field.name().map(ToString::to_string) else {
                continue;
            };
            match name.as_str() {
                "image" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(e.to_string()))?;
                    if !filename.is_empty() {
                        form.image = Some(UploadedImage {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                other => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(e.to_string()))?;
                    match other {
                        "name" => form.name = value,
                        "price" => form.price = value,
                        "description" => form.description = non_empty(value),
                        "barcode" => form.barcode = non_empty(value),
                        "category" => form.category = non_empty(value),
                        _ => {}
                    }
                }
            }
        }
        Ok(form)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Parse a submitted price. Anything that is not a finite, non-negative
/// number is a validation error, never a fault.
pub fn parse_price(raw: &str) -> AppResult<f64> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid price: {raw:?}")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation(format!("invalid price: {raw:?}")));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_plain_numbers() {
        assert_eq!(parse_price("9.99").unwrap(), 9.99);
        assert_eq!(parse_price(" 0 ").unwrap(), 0.0);
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert!(matches!(parse_price("abc"), Err(AppError::Validation(_))));
        assert!(matches!(parse_price(""), Err(AppError::Validation(_))));
        assert!(matches!(parse_price("-1"), Err(AppError::Validation(_))));
        assert!(matches!(parse_price("NaN"), Err(AppError::Validation(_))));
    }
}
