use maud::{html, Markup, DOCTYPE};

pub(super) fn universal(body: Markup, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en-us" {
            head {
                title { "Comment Cloud | " (title) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link type="text/css" rel="stylesheet" href="/style/cloud.css";
            }
            body {
                (body)
            }
        }
    }
}
