#![allow(unused)]
pub use crate::components::DefaultStyling;
pub use crate::conf;
pub use crate::router::Route;
pub use static_routes::*;

pub use gloo_console as console;
pub use gloo_net::http::{Request, Response};
pub use stylist::yew::{styled_component, Global};
pub use stylist::{css, style, Style};
pub use web_sys::{HtmlInputElement, HtmlTextAreaElement};
pub use yew::prelude::*;
pub use yew_router::prelude::*;

fn api_base() -> String {
    conf::base_url(conf::Env::current()).to_owned()
}

pub trait RequestExtend {
    fn static_get(static_path: impl Get) -> Self;
    fn static_post(static_path: impl Post) -> Self;
}

impl RequestExtend for Request {
    fn static_get(static_path: impl Get) -> Self {
        Request::get(&static_path.get().with_base(&api_base()).complete())
    }

    fn static_post(static_path: impl Post) -> Self {
        Request::post(&static_path.post().with_base(&api_base()).complete())
    }
}

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}
