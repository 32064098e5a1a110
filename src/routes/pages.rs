use super::*;

use crate::html::pages::{FormValues, Outcome};

pub async fn home() -> Markup {
    html::pages::home(&FormValues::default(), Outcome::Blank)
}
