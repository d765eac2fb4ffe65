use risinghorn_contact::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber_as_global_default},
};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let subscriber = get_subscriber("risinghorn-contact".into(), "info".into(), std::io::stdout);
    init_subscriber_as_global_default(subscriber);
    // Panic if we cant read configuration
    let configuration = get_configuration().expect("Failed to read configuration");

    let application = Application::build(configuration).await?;

    application.run_until_stopped().await?;
    Ok(())
}
