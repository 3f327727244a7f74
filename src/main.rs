use log::{info, Level};
use yew::prelude::*;

mod theme;
mod motion {
    pub mod gates;
    pub mod scroll;
    pub mod spring;
    pub mod transform;
    pub mod value;
}
mod pages {
    pub mod landing;
}
mod components {
    pub mod content;
    pub mod custom_button;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
