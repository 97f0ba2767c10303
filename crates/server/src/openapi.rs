use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct PongDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String }

#[derive(ToSchema)]
pub struct RestaurantDoc { pub id: i32, pub name: String, pub addr: String }

#[derive(ToSchema)]
pub struct NewRestaurantDoc { pub name: String, pub addr: String }

#[derive(ToSchema)]
pub struct RestaurantPatchDoc { pub name: Option<String>, pub addr: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ping,
        crate::routes::restaurants::create,
        crate::routes::restaurants::get,
        crate::routes::restaurants::list,
        crate::routes::restaurants::update,
        crate::routes::restaurants::delete,
    ),
    components(
        schemas(
            PongDoc,
            ErrorBody,
            RestaurantDoc,
            NewRestaurantDoc,
            RestaurantPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants")
    )
)]
pub struct ApiDoc;
