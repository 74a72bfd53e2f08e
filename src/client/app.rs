use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    router::Route,
    store::{toast::use_toast_provider, unit::use_unit_provider},
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_toast_provider();
    use_unit_provider();

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Catálogo de serviços e preços para salões e barbearias"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
