//! REST calls against the game API.
//!
//! Every failure maps to [`Error::NetworkFailure`]; callers log it and show
//! an inline message, nothing propagates past the page.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use rpsls::endpoints::Endpoints;
use rpsls::model::{Choice, PlayResult, ScoreRecord};
use rpsls::Error;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, Error> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| Error::NetworkFailure(e.to_string()))?;
    if !response.ok() {
        return Err(Error::NetworkFailure(format!("HTTP {}", response.status())));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| Error::NetworkFailure(e.to_string()))
}

pub(super) async fn fetch_choices(api: &Endpoints) -> Result<Vec<Choice>, Error> {
    get_json(&api.choices()).await
}

pub(super) async fn play(
    api: &Endpoints,
    choice_id: u32,
    player_name: &str,
) -> Result<PlayResult, Error> {
    let body = serde_json::json!({ "player": choice_id, "playerName": player_name });
    let response = Request::post(&api.play())
        .json(&body)
        .map_err(|e| Error::NetworkFailure(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::NetworkFailure(e.to_string()))?;
    if !response.ok() {
        return Err(Error::NetworkFailure(format!("HTTP {}", response.status())));
    }
    response
        .json::<PlayResult>()
        .await
        .map_err(|e| Error::NetworkFailure(e.to_string()))
}

pub(super) async fn fetch_recent_results(api: &Endpoints) -> Result<Vec<ScoreRecord>, Error> {
    get_json(&api.recent_results()).await
}

pub(super) async fn fetch_recent_results_for(
    api: &Endpoints,
    player_name: &str,
) -> Result<Vec<ScoreRecord>, Error> {
    get_json(&api.recent_results_by_player(player_name)).await
}

pub(super) async fn reset_player(api: &Endpoints, player_name: &str) -> Result<(), Error> {
    let response = Request::delete(&api.reset_by_player(player_name))
        .send()
        .await
        .map_err(|e| Error::NetworkFailure(e.to_string()))?;
    if !response.ok() {
        return Err(Error::NetworkFailure(format!("HTTP {}", response.status())));
    }
    Ok(())
}
