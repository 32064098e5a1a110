use std::fs;
use std::path::Path;

use super::*;

pub async fn style(ReqPath(file_name): ReqPath<String>) -> impl IntoResponse {
    static_file(format!("static/styles/{file_name}"), "text/css")
}

fn static_file(path: String, content_type: &'static str) -> Response {
    match fs::read_to_string(Path::new(&path)) {
        Ok(content) => ([(header::CONTENT_TYPE, content_type)], content).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
