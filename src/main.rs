mod advisor;
mod recommend;

use dotenv::dotenv;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::LevelFilter;
use recommend::gardener::Gardener;
use recommend::matching::UserPreferences;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

#[macro_use]
extern crate log;

lazy_static! {
    static ref TOP_N: usize = std::env::var("TOP_N")
        .unwrap_or_else(|_| "10".to_string())
        .parse::<usize>()
        .unwrap();
    static ref CHAT_MODEL: String =
        std::env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
}

#[derive(Deserialize, Serialize)]
struct SeedQuery {
    name: String,
}

#[derive(Deserialize, Serialize)]
struct AdviceReply {
    advice: String,
}

#[derive(Deserialize, Serialize)]
struct ImageReply {
    image: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // read .env
    dotenv().ok();

    // init logger
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    if log_level == "debug" {
        Builder::new()
            .filter(None, LevelFilter::Off)
            .filter(Some("seedai::recommend"), LevelFilter::Debug)
            .filter(Some("seedai"), LevelFilter::Debug)
            .init();
    } else if log_level == "info" {
        Builder::new()
            .filter(None, LevelFilter::Off)
            .filter(Some("seedai::recommend"), LevelFilter::Info)
            .filter(Some("seedai"), LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }

    // load and check the catalog
    let catalog = recommend::catalog::load_default()?;
    info!("catalog check succeed: {} seeds", catalog.len());

    let gardener = Arc::new(Gardener::new(catalog));
    let gardener_for_recommend = Arc::clone(&gardener);
    let gardener_for_advice = Arc::clone(&gardener);
    let gardener_for_image = Arc::clone(&gardener);

    let index_route = warp::path::end().and(warp::get()).and_then(index);

    let recommend_route = warp::path("recommend")
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::any().map(move || Arc::clone(&gardener_for_recommend)))
        .and_then(handle_recommend);

    let advice_route = warp::path("advice")
        .and(warp::get())
        .and(warp::query::<SeedQuery>())
        .and(warp::any().map(move || Arc::clone(&gardener_for_advice)))
        .and_then(handle_advice);

    let image_route = warp::path("image")
        .and(warp::get())
        .and(warp::query::<SeedQuery>())
        .and(warp::any().map(move || Arc::clone(&gardener_for_image)))
        .and_then(handle_image);

    let seeds_route = warp::path("seeds")
        .and(warp::get())
        .and(warp::any().map(move || Arc::clone(&gardener)))
        .and_then(handle_seeds);

    let routes = index_route
        .or(recommend_route)
        .or(advice_route)
        .or(image_route)
        .or(seeds_route);

    info!("server running at port: 8080");
    warp::serve(routes).run(([0, 0, 0, 0], 8080)).await;

    Ok(())
}

async fn index() -> Result<impl Reply, Rejection> {
    let index_html = include_str!("../index.html");
    Ok(warp::reply::html(index_html))
}

async fn handle_recommend(
    preferences: UserPreferences,
    gardener: Arc<Gardener>,
) -> Result<impl Reply, Rejection> {
    info!("get recommend request: {:?}", preferences);
    let top = gardener.recommend(&preferences, *TOP_N);
    Ok(warp::reply::json(&top))
}

async fn handle_advice(query: SeedQuery, gardener: Arc<Gardener>) -> Result<impl Reply, Rejection> {
    info!("get advice request: {}", query.name);
    let advice = match gardener.advise(&query.name).await {
        Ok(text) => text,
        Err(e) => {
            warn!("handle advice request failed: {}", e);
            advisor::ERROR_ADVICE.to_string()
        }
    };
    Ok(warp::reply::json(&AdviceReply { advice }))
}

async fn handle_image(query: SeedQuery, gardener: Arc<Gardener>) -> Result<impl Reply, Rejection> {
    info!("get image request: {}", query.name);
    let image = match gardener.illustrate(&query.name).await {
        Ok(image) => image,
        Err(e) => {
            warn!("handle image request failed: {}", e);
            None
        }
    };
    Ok(warp::reply::json(&ImageReply { image }))
}

async fn handle_seeds(gardener: Arc<Gardener>) -> Result<impl Reply, Rejection> {
    let names = gardener.seed_names();
    info!("get seeds request return: {:?}", names);
    Ok(warp::reply::json(&names))
}
