use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;

use crate::game_service::GameService;
use hangman_types::{
    ApiError, CreateUserRequest, GameHistoryResponse, MakeMoveRequest, NewGameRequest,
};

pub mod config;
pub mod game_service;
pub mod stats;

#[derive(Deserialize)]
struct TopScoresQuery {
    results: Option<i64>,
}

pub fn create_routes(
    service: Arc<GameService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map({
        let service = service.clone();
        move || service.clone()
    });

    // Health check endpoint
    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let create_user = warp::path!("user")
        .and(warp::post())
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(handle_create_user);

    let new_game = warp::path!("game")
        .and(warp::post())
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(handle_new_game);

    let make_move = warp::path!("game" / String)
        .and(warp::put())
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(handle_make_move);

    let get_game = warp::path!("game" / String)
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_get_game);

    let game_history = warp::path!("game" / String / "history")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_game_history);

    let cancel_game = warp::path!("game" / String)
        .and(warp::delete())
        .and(service_filter.clone())
        .and_then(handle_cancel_game);

    let list_scores = warp::path!("scores")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_list_scores);

    let top_scores = warp::path!("high_scores")
        .and(warp::get())
        .and(warp::query::<TopScoresQuery>())
        .and(service_filter.clone())
        .and_then(handle_top_scores);

    let user_rankings = warp::path!("user" / "rankings")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_user_rankings);

    let user_games = warp::path!("user" / String / "games")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_user_games);

    let user_scores = warp::path!("scores" / "user" / String)
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_user_scores);

    let average_attempts = warp::path!("games" / "average_attempts")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_average_attempts);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    health
        .or(create_user)
        .or(new_game)
        .or(game_history)
        .or(make_move)
        .or(get_game)
        .or(cancel_game)
        .or(user_rankings)
        .or(user_games)
        .or(user_scores)
        .or(top_scores)
        .or(list_scores)
        .or(average_attempts)
        .with(cors)
        .with(warp::log("hangman"))
}

fn error_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApiError::Conflict { .. } => StatusCode::CONFLICT,
        ApiError::InvalidInput { .. }
        | ApiError::InvalidGuess { .. }
        | ApiError::RepeatedGuess { .. } => StatusCode::BAD_REQUEST,
        ApiError::TerminalGame | ApiError::InvalidOperation { .. } => StatusCode::CONFLICT,
        ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<T: serde::Serialize>(
    result: Result<T, ApiError>,
) -> warp::reply::WithStatus<warp::reply::Json> {
    match result {
        Ok(value) => warp::reply::with_status(warp::reply::json(&value), StatusCode::OK),
        Err(err) => warp::reply::with_status(
            warp::reply::json(&serde_json::json!({ "error": err.to_string() })),
            error_status(&err),
        ),
    }
}

fn parse_game_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidInput {
        reason: format!("invalid game id: {raw}"),
    })
}

async fn handle_create_user(
    request: CreateUserRequest,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond(
        service.create_user(&request.name, request.email).await,
    ))
}

async fn handle_new_game(
    request: NewGameRequest,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond(service.new_game(&request.user_name).await))
}

async fn handle_make_move(
    game_id: String,
    request: MakeMoveRequest,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = match parse_game_id(&game_id) {
        Ok(id) => service.make_move(id, &request.guess).await,
        Err(err) => Err(err),
    };
    Ok(respond(result))
}

async fn handle_get_game(
    game_id: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = match parse_game_id(&game_id) {
        Ok(id) => service.get_game(id).await,
        Err(err) => Err(err),
    };
    Ok(respond(result))
}

async fn handle_game_history(
    game_id: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = match parse_game_id(&game_id) {
        Ok(id) => service
            .game_history(id)
            .await
            .map(|events| GameHistoryResponse { events }),
        Err(err) => Err(err),
    };
    Ok(respond(result))
}

async fn handle_cancel_game(
    game_id: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = match parse_game_id(&game_id) {
        Ok(id) => service.cancel_game(id).await,
        Err(err) => Err(err),
    };
    Ok(respond(result))
}

async fn handle_list_scores(
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond(service.list_scores().await))
}

async fn handle_top_scores(
    query: TopScoresQuery,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let limit = query.results.unwrap_or(10);
    Ok(respond(service.top_scores(limit).await))
}

async fn handle_user_rankings(
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond(service.user_rankings().await))
}

async fn handle_user_games(
    user_name: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond(service.user_games(&user_name).await))
}

async fn handle_user_scores(
    user_name: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond(service.user_scores(&user_name).await))
}

async fn handle_average_attempts(
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(respond::<hangman_types::ApiMessage>(Ok(
        service.average_attempts().await,
    )))
}
