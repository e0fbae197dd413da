use log::{info, Level};
use yew::prelude::*;

mod config;
mod form {
    pub mod contact;
    pub mod phone;
    pub mod validate;
}
mod pages {
    pub mod landing;
}
mod ui {
    pub mod menu;
    pub mod nav;
    pub mod reveal;
    pub mod scroll;
}

use pages::landing::Landing;
use ui::nav::Nav;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
