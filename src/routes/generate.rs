use std::time::Duration;

use axum::Form;
use log::{info, warn};
use serde::Deserialize;
use tokio::time::timeout;

use super::*;

use crate::error::Error;
use crate::html::pages::{FormValues, Outcome};
use crate::options::{self, VisualOptions};
use crate::{cloud, youtube};

/// How long the whole pagination walk may run before the request gives
/// up. Individual page requests carry their own shorter timeout.
const FETCH_DEADLINE: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
pub struct GenerateBody {
    video_id: String,
    api_key: String,
    font: String,
    font_size: u32,
    background: String,
    color: String,
}

pub async fn generate(State(state): State<AppState>, Form(body): Form<GenerateBody>) -> Markup {
    let outcome = match run(&state, &body).await {
        Ok(outcome) => outcome,
        Err(err) => {
            let kind = match &err {
                Error::Validation(_) => "validation",
                Error::Remote(_) => "remote",
                Error::Render(_) => "render",
            };
            warn!("word cloud generation failed ({kind}): {err}");
            Outcome::Failed {
                kind,
                message: err.to_string(),
            }
        }
    };

    let values = FormValues {
        video_id: body.video_id,
        api_key: body.api_key,
        font: body.font,
        font_size: body.font_size.to_string(),
        background: body.background,
        color: body.color,
    };
    html::pages::home(&values, outcome)
}

async fn run(state: &AppState, body: &GenerateBody) -> Result<Outcome, Error> {
    let video_id = body.video_id.trim();
    let api_key = body.api_key.trim();

    // Validation happens before anything touches the network.
    if video_id.is_empty() {
        return Err(options::Error::MissingVideoId.into());
    }
    if api_key.is_empty() {
        return Err(options::Error::MissingApiKey.into());
    }
    let options = VisualOptions::new(&body.font, body.font_size, &body.background, &body.color)?;

    let fetch = youtube::fetch_all_comments(state.youtube.as_ref(), api_key, video_id);
    let comments = match timeout(FETCH_DEADLINE, fetch).await {
        Ok(result) => result?,
        Err(_) => return Err(youtube::Error::Timeout.into()),
    };

    info!("fetched {} comments for {video_id}", comments.len());
    if comments.is_empty() {
        return Ok(Outcome::NoComments);
    }

    let image = cloud::render(&comments.joined(), &options)?;
    let png = cloud::encode_png(&image)?;

    Ok(Outcome::Rendered {
        data_uri: cloud::png_data_uri(&png),
        truncated: comments.truncated(),
    })
}
