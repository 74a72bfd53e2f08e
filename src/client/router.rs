use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{NotFound, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Services {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
