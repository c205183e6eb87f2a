use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::categories::list_categories,
        api::sessions::create_session,
        api::sessions::get_session,
        api::sessions::end_session,
        api::sessions::recommend,
        api::sessions::reset_session,
    ),
    components(
        schemas(
            crate::models::BookRecord,
            crate::models::SessionState,
            crate::models::Status,
            crate::services::Recommendation,
            api::sessions::RecommendRequest,
        )
    ),
    tags(
        (name = "moodshelf", description = "Moodshelf API")
    )
)]
pub struct ApiDoc;
