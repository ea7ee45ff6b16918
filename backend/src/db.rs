// Database connector and readiness reporting
//

use crate::conf;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use std::time::Duration;
use tokio::sync::watch;

#[derive(Clone, Debug, PartialEq)]
pub enum ConnState {
    Starting,
    Ready,
    Degraded(String),
}

/// Cloneable view over the connector's state machine. Handed to the HTTP
/// application so readiness reporting never relies on process-wide globals.
#[derive(Clone)]
pub struct Readiness {
    rx: watch::Receiver<ConnState>,
}

impl Readiness {
    pub fn current(&self) -> ConnState {
        self.rx.borrow().clone()
    }

    /// Waits until the connector leaves `Starting`.
    pub async fn settled(&mut self) -> ConnState {
        loop {
            let state = self.rx.borrow().clone();
            if state != ConnState::Starting {
                return state;
            }
            if self.rx.changed().await.is_err() {
                return self.rx.borrow().clone();
            }
        }
    }
}

pub struct Connector {
    client: Option<Client>,
    readiness: Readiness,
}

impl Connector {
    /// Test-environment stub: no client, no network I/O, immediately ready.
    pub fn disabled() -> Self {
        let (_tx, rx) = watch::channel(ConnState::Ready);
        Self {
            client: None,
            readiness: Readiness { rx },
        }
    }

    /// Builds the client and lets a background ping settle readiness.
    /// One attempt only; a failed attempt leaves the process serving degraded,
    /// which `/health/ready` reports.
    pub async fn initialize(conf: &conf::Conf) -> Self {
        if conf.env.test() {
            return Self::disabled();
        }

        let (tx, rx) = watch::channel(ConnState::Starting);
        let readiness = Readiness { rx };
        let mongo = &conf.env_conf.mongo;

        let mut options = match ClientOptions::parse(&mongo.uri).await {
            Ok(options) => options,
            Err(e) => {
                tracing::error!("invalid mongo uri: {}", e);
                let _ = tx.send(ConnState::Degraded(e.to_string()));
                return Self {
                    client: None,
                    readiness,
                };
            }
        };
        options.server_selection_timeout =
            Some(Duration::from_secs(mongo.server_selection_timeout_secs));

        let client = match Client::with_options(options) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("mongo client setup failed: {}", e);
                let _ = tx.send(ConnState::Degraded(e.to_string()));
                return Self {
                    client: None,
                    readiness,
                };
            }
        };

        // the ping must not gate startup, requests are accepted meanwhile
        let ping_client = client.clone();
        tokio::spawn(async move {
            match ping_client
                .database("admin")
                .run_command(doc! {"ping": 1}, None)
                .await
            {
                Ok(_) => {
                    tracing::info!("connected!");
                    let _ = tx.send(ConnState::Ready);
                }
                Err(e) => {
                    tracing::error!("mongo connection failed: {}", e);
                    let _ = tx.send(ConnState::Degraded(e.to_string()));
                }
            }
        });

        Self {
            client: Some(client),
            readiness,
        }
    }

    pub fn database(&self, name: &str) -> Option<Database> {
        self.client.as_ref().map(|client| client.database(name))
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness.clone()
    }
}
