//! REST client shared by all entity screens
//!
//! One resource per entity: `GET /{path}`, `POST /{path}`,
//! `PUT /{path}/{id}`, `DELETE /{path}/{id}`. JSON bodies both ways.

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_staff_grade::aggregate::StaffGrade;
use contracts::domain::a003_staff::aggregate::Staff;
use contracts::domain::a004_campaign_manager::aggregate::CampaignManager;
use contracts::domain::a005_campaign::aggregate::Campaign;
use contracts::domain::a006_advert::aggregate::Advert;
use contracts::domain::common::{Entity, EntityId, EntityKind};
use contracts::shared::api_error::ApiError;
use contracts::shared::resolver::ReferenceOption;
use contracts::shared::wire::decode_collection;
use gloo_net::http::{Request, Response};
use web_sys::AbortSignal;

use super::api_utils::api_config;

fn transport_error(err: gloo_net::Error, signal: Option<&AbortSignal>) -> ApiError {
    if signal.is_some_and(AbortSignal::aborted) {
        ApiError::Aborted
    } else {
        ApiError::Transport(err.to_string())
    }
}

/// Body of a 2xx response, or the status error with the server's message
async fn read_body(response: Response, signal: Option<&AbortSignal>) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(e, signal))?;
    if ok {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, &body))
    }
}

fn log_outcome<T>(operation: &str, url: &str, result: &Result<T, ApiError>) {
    match result {
        Ok(_) => log::debug!("{} {} ok", operation, url),
        Err(err) if err.is_aborted() => log::debug!("{} {} aborted", operation, url),
        Err(err) => log::error!("{} {} failed: {}", operation, url, err),
    }
}

/// Получить всю коллекцию сущности
pub async fn fetch_all<E: Entity>(signal: Option<AbortSignal>) -> Result<Vec<E>, ApiError> {
    let url = api_config().collection_url(E::KIND);
    let result = async {
        let response = Request::get(&url)
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| transport_error(e, signal.as_ref()))?;
        let body = read_body(response, signal.as_ref()).await?;
        decode_collection::<E>(&body)
    }
    .await;
    log_outcome("GET", &url, &result);
    result
}

pub async fn create<E: Entity>(
    payload: &E::Payload,
    signal: Option<AbortSignal>,
) -> Result<(), ApiError> {
    let url = api_config().collection_url(E::KIND);
    let result = async {
        let request = Request::post(&url)
            .abort_signal(signal.as_ref())
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, signal.as_ref()))?;
        read_body(response, signal.as_ref()).await.map(|_| ())
    }
    .await;
    log_outcome("POST", &url, &result);
    result
}

pub async fn update<E: Entity>(
    id: EntityId,
    payload: &E::Payload,
    signal: Option<AbortSignal>,
) -> Result<(), ApiError> {
    let url = api_config().item_url(E::KIND, id);
    let result = async {
        let request = Request::put(&url)
            .abort_signal(signal.as_ref())
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, signal.as_ref()))?;
        read_body(response, signal.as_ref()).await.map(|_| ())
    }
    .await;
    log_outcome("PUT", &url, &result);
    result
}

pub async fn delete<E: Entity>(id: EntityId, signal: Option<AbortSignal>) -> Result<(), ApiError> {
    let url = api_config().item_url(E::KIND, id);
    let result = async {
        let response = Request::delete(&url)
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| transport_error(e, signal.as_ref()))?;
        read_body(response, signal.as_ref()).await.map(|_| ())
    }
    .await;
    log_outcome("DELETE", &url, &result);
    result
}

async fn fetch_options<E: Entity>(
    signal: Option<AbortSignal>,
) -> Result<Vec<ReferenceOption>, ApiError> {
    let items = fetch_all::<E>(signal).await?;
    Ok(items.iter().map(E::reference_option).collect())
}

/// Related collection reduced to select options
pub async fn fetch_reference_options(
    kind: EntityKind,
    signal: Option<AbortSignal>,
) -> Result<Vec<ReferenceOption>, ApiError> {
    match kind {
        EntityKind::Client => fetch_options::<Client>(signal).await,
        EntityKind::StaffGrade => fetch_options::<StaffGrade>(signal).await,
        EntityKind::Staff => fetch_options::<Staff>(signal).await,
        EntityKind::CampaignManager => fetch_options::<CampaignManager>(signal).await,
        EntityKind::Campaign => fetch_options::<Campaign>(signal).await,
        EntityKind::Advert => fetch_options::<Advert>(signal).await,
    }
}
