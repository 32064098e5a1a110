use axum::extract::{Path as ReqPath, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use maud::Markup;

use crate::html;
use crate::AppState;

pub mod files;
pub mod generate;
pub mod pages;
