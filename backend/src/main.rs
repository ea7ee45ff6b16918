use backend::conf;
use backend::startup::Application;
use backend::telemetry;

#[tokio::main]
async fn main() -> hyper::Result<()> {
    let env = conf::Env::current();
    let env_conf = conf::EnvConf::current();

    let subscriber = telemetry::TracingSubscriber::new("backend")
        .pretty(env_conf.log.pretty)
        .build(std::io::stdout);
    telemetry::init_global_default(subscriber);

    tracing::info!("BLOGSAPP_ENV={}", env.as_ref());

    let conf = conf::Conf { env, env_conf };

    let application = Application::build(&conf).await;

    application.server().await
}
