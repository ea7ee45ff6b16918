// Server and router definition
//

use crate::conf::Conf;
use crate::db::{Connector, Readiness};
use crate::routes;

use axum::routing::{get, Router};
use mongodb::Database;
use static_routes::Get;

use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit, ServiceBuilderExt,
};

type ServerOutput = hyper::Result<()>;
type Server = std::pin::Pin<Box<dyn std::future::Future<Output = ServerOutput> + Send>>;

#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: Arc<std::sync::atomic::AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .to_string()
            .parse()
            .unwrap();

        Some(tower_http::request_id::RequestId::new(request_id))
    }
}

/// Everything handlers need, wired once at the composition root.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<Database>,
    pub readiness: Readiness,
}

pub fn router(_conf: &Conf, state: AppState) -> Router {
    let paths = static_routes::routes().api;

    let request_tracing_layer = tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &hyper::http::Request<hyper::Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request.headers().get("x-request-id").unwrap().to_str().unwrap(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id();

    Router::new()
        .nest("/api/users", routes::users::router())
        .nest("/api/blogs", routes::blogs::router())
        .route(paths.hello.get().postfix(), get(routes::hello))
        .route(paths.health.get().postfix(), get(routes::health))
        .route(paths.ready.get().postfix(), get(routes::ready))
        .layer(CorsLayer::permissive())
        .layer(request_tracing_layer)
        .with_state(state)
}

pub struct Application {
    host: String,
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(conf: &Conf) -> Self {
        let connector = Connector::initialize(conf).await;
        let state = AppState {
            db: connector.database(&conf.env_conf.mongo.database),
            readiness: connector.readiness(),
        };

        let address = format!("{}:{}", conf.env_conf.host, conf.env_conf.port);
        tracing::debug!("Binding to {}", address);
        let listener = std::net::TcpListener::bind(&address).expect("vacant port");
        let host = conf.env_conf.host.clone();
        let port = listener.local_addr().unwrap().port();
        tracing::info!("Serving on http://{}:{}", host, port);

        Self {
            server: Box::pin(
                axum::Server::from_tcp(listener)
                    .unwrap()
                    .serve(router(conf, state).into_make_service()),
            ),
            port,
            host,
        }
    }

    // consumes self, at most one server per application
    pub fn server(self) -> Server {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
