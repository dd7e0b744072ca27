//! Snapshot and screenshot fetching over the static asset paths.

use podium_stats::{Dataset, StatsError};
use thiserror::Error;

/// Errors surfaced by the page-level fetch boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error(transparent)]
    Data(#[from] StatsError),
}

/// Fetch and parse the snapshot document.
///
/// # Errors
///
/// Returns [`FetchError::Http`] for transport failures and non-success
/// statuses, [`FetchError::Data`] when the body is not a valid snapshot.
pub async fn fetch_stats() -> Result<Dataset, FetchError> {
    let url = crate::paths::stats_url();
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| FetchError::Http(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Http(format!("status {}", response.status())));
    }
    let text = response
        .text()
        .await
        .map_err(|err| FetchError::Http(err.to_string()))?;
    Ok(Dataset::from_json(&text)?)
}

/// Fetch one tournament's screenshot filename list. Any failure is an
/// empty gallery, never an error.
pub async fn fetch_screenshots(tournament: &str) -> Vec<String> {
    let url = crate::paths::screenshot_index_url(tournament);
    let Ok(response) = gloo_net::http::Request::get(&url).send().await else {
        return Vec::new();
    };
    if !response.ok() {
        return Vec::new();
    }
    match response.json::<Vec<String>>().await {
        Ok(files) => files,
        Err(err) => {
            log::warn!("screenshot index for {tournament} is malformed: {err}");
            Vec::new()
        }
    }
}

/// One page's view of an in-flight snapshot fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Ready(std::rc::Rc<T>),
    Failed(String),
}

#[cfg(target_arch = "wasm32")]
mod hooks {
    use super::{RemoteData, fetch_stats};
    use podium_stats::Dataset;
    use std::rc::Rc;
    use yew::prelude::*;

    /// Fetch the snapshot once per page view. The returned callback
    /// restarts the fetch, for the error panel's retry button.
    #[hook]
    pub fn use_dataset() -> (RemoteData<Dataset>, Callback<()>) {
        let data = use_state(|| RemoteData::Loading);
        let attempt = use_state(|| 0_u32);

        {
            let data = data.clone();
            use_effect_with(*attempt, move |_| {
                data.set(RemoteData::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_stats().await {
                        Ok(dataset) => data.set(RemoteData::Ready(Rc::new(dataset))),
                        Err(err) => {
                            log::error!("failed to load stats snapshot: {err}");
                            data.set(RemoteData::Failed(err.to_string()));
                        }
                    }
                });
                || {}
            });
        }

        let retry = {
            let attempt = attempt.clone();
            Callback::from(move |()| attempt.set(*attempt + 1))
        };
        ((*data).clone(), retry)
    }
}

#[cfg(target_arch = "wasm32")]
pub use hooks::use_dataset;
