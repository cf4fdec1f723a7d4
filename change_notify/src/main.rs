use change_notify::config::Config;
use change_notify::{function_handler, ChangeNotifier};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .with_max_level(if config.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let notifier = ChangeNotifier::from_config(&config);
    let notifier = &notifier;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(notifier, event).await
    }))
    .await
}
