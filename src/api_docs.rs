use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::chat::chat_handler,
        api::recommendations::by_genre,
        api::recommendations::any_genre,
        api::recommendations::list_genres,
    ),
    components(
        schemas(
            api::chat::ChatRequest,
            api::chat::ChatResponse,
            api::recommendations::RecommendationsResponse,
            api::recommendations::GenresResponse,
            crate::models::book::Book,
            crate::domain::genre::Genre,
        )
    ),
    tags(
        (name = "bibliobot", description = "Book recommendation chat API")
    )
)]
pub struct ApiDoc;
