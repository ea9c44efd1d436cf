use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Genre;
use crate::infrastructure::AppState;
use crate::models::Book;
use crate::services::recommendation_service::DEFAULT_LIMIT;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationQuery {
    /// Maximum number of books (default 3)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenresResponse {
    pub genres: Vec<Genre>,
}

#[utoipa::path(
    get,
    path = "/recommendations/{genre}",
    params(
        ("genre" = String, Path, description = "Genre, matched case-insensitively"),
        RecommendationQuery
    ),
    responses(
        (status = 200, description = "Up to `limit` random books of the genre", body = RecommendationsResponse)
    )
)]
pub async fn by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
    Query(params): Query<RecommendationQuery>,
) -> Json<RecommendationsResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let recommendations = state.recommender().recommend(Some(&genre), limit);
    Json(RecommendationsResponse { recommendations })
}

#[utoipa::path(
    get,
    path = "/recommendations",
    params(RecommendationQuery),
    responses(
        (status = 200, description = "Up to `limit` random books from the whole catalog", body = RecommendationsResponse)
    )
)]
pub async fn any_genre(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> Json<RecommendationsResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let recommendations = state.recommender().recommend(None, limit);
    Json(RecommendationsResponse { recommendations })
}

#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "Known genres in canonical order", body = GenresResponse)
    )
)]
pub async fn list_genres() -> Json<GenresResponse> {
    Json(GenresResponse {
        genres: Genre::ALL.to_vec(),
    })
}
