// Tracing setup shared by the binary and the test harness
//

use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub struct TracingSubscriber {
    name: String,
    pretty: bool,
}

impl TracingSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn build<Sink>(self, sink: Sink) -> Box<dyn Subscriber + Send + Sync>
    where
        Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        // RUST_LOG wins; the crate itself defaults to debug
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("info,{}=debug", self.name)));

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(sink);

        if self.pretty {
            Box::new(Registry::default().with(env_filter).with(fmt_layer.pretty()))
        } else {
            Box::new(Registry::default().with(env_filter).with(fmt_layer.compact()))
        }
    }
}

pub fn init_global_default(subscriber: Box<dyn Subscriber + Send + Sync>) {
    LogTracer::init().expect("set logger");
    set_global_default(subscriber).expect("set tracing subscriber");
}
