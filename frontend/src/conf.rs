// Client-side environment and API base URL resolution
//

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Env {
    Local,
    Prod,
}

impl Env {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Local
        } else {
            Self::Prod
        }
    }
}

/// Base the API paths are joined onto. Production serves the client and the
/// API from one origin, so the base collapses to same-origin paths; local
/// development talks to the backend directly.
pub fn base_url(env: Env) -> &'static str {
    match env {
        Env::Prod => "/",
        Env::Local => "http://localhost:5001",
    }
}
