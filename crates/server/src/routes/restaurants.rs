use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use service::restaurant::domain::{NewRestaurant, Restaurant, RestaurantFilter, RestaurantPatch};

use crate::{errors::ApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Restrict to this city when positive
    #[serde(default, deserialize_with = "lenient_id")]
    pub city_id: Option<i32>,
}

/// Empty, non-numeric or out-of-range values count as "no filter".
fn lenient_id<'de, D>(d: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

impl From<ListQuery> for RestaurantFilter {
    fn from(q: ListQuery) -> Self {
        RestaurantFilter { city_id: q.city_id }
    }
}

#[utoipa::path(
    post, path = "/restaurants", tag = "restaurants",
    request_body = crate::openapi::NewRestaurantDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::RestaurantDoc),
        (status = 400, description = "Malformed body or blank name", body = crate::openapi::ErrorBody),
        (status = 409, description = "Constraint violation", body = crate::openapi::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<NewRestaurant>, ApiError>,
) -> Result<Json<Restaurant>, ApiError> {
    let created = state.restaurants.create(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RestaurantDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Restaurant>, ApiError> {
    Ok(Json(state.restaurants.get(id).await?))
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::RestaurantDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, ApiError>,
) -> Result<Json<Vec<Restaurant>>, ApiError> {
    Ok(Json(state.restaurants.list(q.into()).await?))
}

/// Acknowledges with `{"ok":1}` whether or not the id exists.
#[utoipa::path(
    patch, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    request_body = crate::openapi::RestaurantPatchDoc,
    responses(
        (status = 200, description = "Acknowledged"),
        (status = 400, description = "Malformed body or id", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(patch), _): WithRejection<Json<RestaurantPatch>, ApiError>,
) -> Result<Json<Value>, ApiError> {
    state.restaurants.update(id, patch).await?;
    Ok(Json(json!({"ok": 1})))
}

/// Acknowledges with `"ok"` whether or not a row was removed.
#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Acknowledged"),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<&'static str>, ApiError> {
    state.restaurants.delete(id).await?;
    Ok(Json("ok"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(qs: &str) -> Option<i32> {
        let uri: axum::http::Uri = format!("/restaurants?{qs}").parse().unwrap();
        Query::<ListQuery>::try_from_uri(&uri).unwrap().0.city_id
    }

    #[test]
    fn city_id_parses_leniently() {
        assert_eq!(parse("city_id=7"), Some(7));
        assert_eq!(parse(""), None);
        assert_eq!(parse("city_id="), None);
        assert_eq!(parse("city_id=abc"), None);
        assert_eq!(parse("city_id=99999999999"), None);
        assert_eq!(parse("other=1"), None);
    }
}
