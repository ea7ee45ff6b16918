// App shell: owns the session and theme flags, renders header + routed page
//

mod components;
pub mod conf;
mod router;
mod switch;

use components::{DefaultStyling, Header};
use router::Route;
use switch::switch;

use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    // the header itself stays a pure function of these props
    let is_logged_in = use_state(|| {
        LocalStorage::get::<interfacing::users::User>("session").is_ok()
    });
    let is_darkmode = use_state(|| false);

    let on_toggle_theme = {
        let is_darkmode = is_darkmode.clone();
        Callback::from(move |_| is_darkmode.set(!*is_darkmode))
    };

    let on_logout = {
        let is_logged_in = is_logged_in.clone();
        Callback::from(move |_| {
            LocalStorage::delete("session");
            is_logged_in.set(false);
        })
    };

    html! {
        <BrowserRouter>
            <DefaultStyling dark={*is_darkmode}>
                <Header
                    is_logged_in={*is_logged_in}
                    is_darkmode={*is_darkmode}
                    {on_toggle_theme}
                    {on_logout}
                />
                <Switch<Route> render={switch} />
            </DefaultStyling>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
