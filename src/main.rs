use contactform::configuration::get_configuration;
use contactform::startup::Application;
use contactform::telemetry::init_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration.");
    init_subscriber(
        "contactform".into(),
        "info".into(),
        std::io::stdout,
        &configuration.telemetry,
    );

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
