//! Restaurant ownership extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use deliverus_core::error::CoreError;
use deliverus_core::types::DbId;
use deliverus_db::repositories::RestaurantRepo;

use super::auth::AuthUser;
use super::rbac::RequireOwner;
use crate::error::AppError;
use crate::extract::Path;
use crate::state::AppState;

/// Requires an `owner` caller who owns the restaurant named by the `{id}`
/// path segment. Rejects with 403 Forbidden when someone else owns it.
///
/// A restaurant that does not exist passes through, so the handler decides
/// how absence is reported.
///
/// ```ignore
/// async fn edit(RestaurantOwner(user): RestaurantOwner, Path(id): Path<DbId>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RestaurantOwner(pub AuthUser);

impl FromRequestParts<AppState> for RestaurantOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireOwner(user) = RequireOwner::from_request_parts(parts, state).await?;

        let Path(restaurant_id) = Path::<DbId>::from_request_parts(parts, state).await?;

        let owner_id = RestaurantRepo::find_owner_id(&state.pool, restaurant_id).await?;
        if owner_id.is_some_and(|owner_id| owner_id != user.user_id) {
            tracing::warn!(
                restaurant_id,
                user_id = user.user_id,
                "Rejected access to a restaurant owned by another user",
            );
            return Err(AppError::Core(CoreError::Forbidden(
                "Not the owner of this restaurant".into(),
            )));
        }

        Ok(RestaurantOwner(user))
    }
}
