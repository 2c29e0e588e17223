use lambda_runtime::{run, service_fn, Error};
use meeting_minutes::{lambda, telemetry, AwsServices, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_lambda();

    let cfg = Config::from_env()?;
    let handler = AwsServices::load().await.ingest_handler(&cfg)?;

    run(service_fn(|event| lambda::handle_upload(event, &handler))).await
}
