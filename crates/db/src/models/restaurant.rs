//! Restaurant entity model and DTOs.

use deliverus_core::restaurant::{
    validate_not_blank, validate_phone, validate_postal_code, validate_status,
};
use deliverus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::RestaurantCategory;
use crate::models::product::ProductWithCategory;
use crate::models::serde_helpers::double_option;

/// A restaurant row from the `restaurants` table.
///
/// The owner column is loaded so ownership can be checked server-side, but
/// it is never serialized into a response.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub status: String,
    /// Set while the owner has the restaurant pinned.
    pub pinned_at: Option<Timestamp>,
    pub restaurant_category_id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A restaurant together with its category, as returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithCategory {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_category: RestaurantCategory,
}

/// Public restaurant detail: category plus the menu ordered by display position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_category: RestaurantCategory,
    pub products: Vec<ProductWithCategory>,
}

/// DTO for creating a new restaurant. The owner is taken from the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRestaurant {
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub address: String,
    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: String,
    #[validate(url, length(max = 255))]
    pub url: Option<String>,
    #[validate(range(min = 0.0))]
    pub shipping_costs: f64,
    #[validate(range(min = 0.0))]
    pub average_service_minutes: Option<f64>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub logo: Option<String>,
    #[validate(length(max = 255))]
    pub hero_image: Option<String>,
    /// Defaults to `offline` if omitted.
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[validate(range(min = 1))]
    pub restaurant_category_id: DbId,
    /// When true the restaurant starts out pinned.
    pub pinned: Option<bool>,
}

/// DTO for updating an existing restaurant.
///
/// Absent fields keep their stored value. The nullable columns use
/// `Option<Option<T>>` so an explicit `null` clears them. Neither the owner
/// nor the pin state can be changed here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRestaurant {
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 5000))]
    pub description: Option<Option<String>>,
    #[validate(length(max = 255), custom(function = "validate_not_blank"))]
    pub address: Option<String>,
    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(url, length(max = 255))]
    pub url: Option<Option<String>>,
    #[validate(range(min = 0.0))]
    pub shipping_costs: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0.0))]
    pub average_service_minutes: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(email, length(max = 255))]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255))]
    pub logo: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255))]
    pub hero_image: Option<Option<String>>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[validate(range(min = 1))]
    pub restaurant_category_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_create() -> serde_json::Value {
        json!({
            "name": "Casa Felix",
            "address": "Calle Sierpes 12",
            "postalCode": "41004",
            "shippingCosts": 2.5,
            "restaurantCategoryId": 1
        })
    }

    #[test]
    fn create_accepts_minimal_body() {
        let input: CreateRestaurant = serde_json::from_value(valid_create()).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.pinned, None);
        assert_eq!(input.status, None);
    }

    #[test]
    fn create_rejects_unknown_fields() {
        let mut body = valid_create();
        body["userId"] = json!(99);
        let result: Result<CreateRestaurant, _> = serde_json::from_value(body);
        assert!(result.is_err(), "owner must not be settable from the body");
    }

    #[test]
    fn create_rejects_negative_shipping_costs_and_bad_email() {
        let mut body = valid_create();
        body["shippingCosts"] = json!(-1.0);
        body["email"] = json!("not-an-email");
        let input: CreateRestaurant = serde_json::from_value(body).unwrap();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("shipping_costs"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn create_rejects_unknown_status() {
        let mut body = valid_create();
        body["status"] = json!("sleeping");
        let input: CreateRestaurant = serde_json::from_value(body).unwrap();
        assert!(input.validate().unwrap_err().field_errors().contains_key("status"));
    }

    #[test]
    fn update_cannot_touch_pin_state() {
        let result: Result<UpdateRestaurant, _> =
            serde_json::from_value(json!({ "pinnedAt": "2024-01-01T00:00:00Z" }));
        assert!(result.is_err());
    }

    #[test]
    fn update_validates_only_present_fields() {
        let input: UpdateRestaurant = serde_json::from_value(json!({ "name": "New" })).unwrap();
        assert!(input.validate().is_ok());

        let input: UpdateRestaurant = serde_json::from_value(json!({ "name": "  " })).unwrap();
        assert!(input.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn update_tells_null_apart_from_absent() {
        let input: UpdateRestaurant =
            serde_json::from_value(json!({ "email": null, "phone": "+34 600 000 000" })).unwrap();
        assert_eq!(input.email, Some(None));
        assert_eq!(input.phone, Some(Some("+34 600 000 000".to_string())));
        assert_eq!(input.url, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_still_validates_present_nullable_fields() {
        let input: UpdateRestaurant =
            serde_json::from_value(json!({ "email": "nope", "averageServiceMinutes": -5.0 }))
                .unwrap();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("average_service_minutes"));
    }

    #[test]
    fn serialized_restaurant_hides_owner() {
        let now = chrono::Utc::now();
        let restaurant = Restaurant {
            id: 1,
            name: "Casa Felix".into(),
            description: None,
            address: "Calle Sierpes 12".into(),
            postal_code: "41004".into(),
            url: None,
            shipping_costs: 2.5,
            average_service_minutes: None,
            email: None,
            phone: None,
            logo: None,
            hero_image: None,
            status: "online".into(),
            pinned_at: None,
            restaurant_category_id: 1,
            user_id: 42,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&restaurant).unwrap();
        assert!(json.get("userId").is_none());
        assert!(json.get("user_id").is_none());
        assert_eq!(json["postalCode"], "41004");
        assert!(json["pinnedAt"].is_null());
    }
}
