use maud::{html, Markup};

use crate::options::{FontFamily, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::youtube::{MAX_PAGES, PAGE_SIZE};

use super::wrappers;

/// Raw form values, echoed back so a submission never clears the form.
pub struct FormValues {
    pub video_id: String,
    pub api_key: String,
    pub font: String,
    pub font_size: String,
    pub background: String,
    pub color: String,
}

impl Default for FormValues {
    fn default() -> Self {
        FormValues {
            video_id: String::new(),
            api_key: String::new(),
            font: FontFamily::SansSerif.id().to_owned(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            background: "#ffffff".to_owned(),
            color: "#000000".to_owned(),
        }
    }
}

/// What happened to the submission, rendered below the form.
pub enum Outcome {
    /// Nothing submitted yet.
    Blank,

    /// Aggregation succeeded but the video has no comments.
    NoComments,

    /// A finished cloud, inlined as a data URI.
    Rendered { data_uri: String, truncated: bool },

    /// A tagged failure; `kind` becomes a CSS class.
    Failed {
        kind: &'static str,
        message: String,
    },
}

pub fn home(values: &FormValues, outcome: Outcome) -> Markup {
    let body = html! {
        h1 #title { "YouTube Comment Word Cloud Generator" }
        form #generator method="post" action="/generate" {
            aside #options {
                h2 { "Word Cloud Customization" }
                label for="font" { "Font" }
                select #font name="font" {
                    @for family in FontFamily::all() {
                        option value=(family.id()) selected[values.font == family.id()] {
                            (family.label())
                        }
                    }
                }
                label for="font-size" { "Font Size" }
                input #font-size name="font_size" type="range"
                    min=(MIN_FONT_SIZE) max=(MAX_FONT_SIZE) value=(values.font_size);
                label for="background" { "Background Color" }
                input #background name="background" type="color" value=(values.background);
                label for="color" { "Word Cloud Color" }
                input #color name="color" type="color" value=(values.color);
            }
            section #inputs {
                label for="video-id" { "Enter YouTube Video ID:" }
                input #video-id name="video_id" type="text" value=(values.video_id);
                label for="api-key" { "Enter YouTube Data API Key:" }
                input #api-key name="api_key" type="password" value=(values.api_key);
                button type="submit" { "Generate Word Cloud" }
            }
        }
        (outcome_section(outcome))
    };

    wrappers::universal(body, "Generator")
}

fn outcome_section(outcome: Outcome) -> Markup {
    match outcome {
        Outcome::Blank => html! {},
        Outcome::NoComments => html! {
            p .notice { "No comments found for this video." }
        },
        Outcome::Failed { kind, message } => html! {
            p .error .(kind) { (message) }
        },
        Outcome::Rendered { data_uri, truncated } => html! {
            section #result {
                img #cloud src=(data_uri) alt="Word cloud built from the video's comments";
                @if truncated {
                    p .notice {
                        "This video has a very long comment list; the cloud uses the first "
                        (MAX_PAGES * PAGE_SIZE)
                        " comments."
                    }
                }
                a #save download="wordcloud.png" href=(data_uri) { "Save Word Cloud" }
            }
        },
    }
}
