//! Request extractors whose rejections use the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use deliverus_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized into `T` and then validated.
///
/// Malformed JSON, a wrong content type, or unknown fields reject with
/// `400 BAD_REQUEST`; rule violations reject with `400 VALIDATION_ERROR`.
/// Handlers therefore only ever see input that passed `T::validate`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters deserialized into `T`.
///
/// A segment that does not parse (for example `/restaurants/abc`) rejects
/// with `400 BAD_REQUEST` in the usual `{error, code}` shape instead of
/// axum's plain-text body.
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Path(value))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use deliverus_db::models::restaurant::{CreateRestaurant, UpdateRestaurant};

    use super::*;

    fn json_request(body: serde_json::Value) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_is_extracted() {
        let req = json_request(serde_json::json!({
            "name": "Casa Felix",
            "address": "Calle Sierpes 12",
            "postalCode": "41004",
            "shippingCosts": 0.0,
            "restaurantCategoryId": 1,
            "pinned": true
        }));

        let ValidatedJson(input) = ValidatedJson::<CreateRestaurant>::from_request(req, &())
            .await
            .expect("body should be accepted");
        assert_eq!(input.pinned, Some(true));
    }

    #[tokio::test]
    async fn unknown_field_is_a_bad_request() {
        let req = json_request(serde_json::json!({ "userId": 5 }));
        let result = ValidatedJson::<UpdateRestaurant>::from_request(req, &()).await;
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn missing_content_type_is_a_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("{}"))
            .unwrap();
        let result = ValidatedJson::<UpdateRestaurant>::from_request(req, &()).await;
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn rule_violation_is_a_validation_error() {
        let req = json_request(serde_json::json!({ "shippingCosts": -3.0 }));
        let result = ValidatedJson::<UpdateRestaurant>::from_request(req, &()).await;
        assert_matches!(
            result,
            Err(AppError::Core(CoreError::Validation(msg))) if msg.contains("shipping_costs")
        );
    }
}
