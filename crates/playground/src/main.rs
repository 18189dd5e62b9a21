use solidkit_core::ConsoleSink;
use solidkit_playground::{PlaygroundConfig, demos};

fn main() -> anyhow::Result<()> {
    solidkit_observability::init();

    let config = PlaygroundConfig::from_env()?;
    let effects = demos::run_all(&config, ConsoleSink::shared())?;

    tracing::info!(effects = effects.len(), "playground finished");
    Ok(())
}
