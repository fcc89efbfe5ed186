//! Config command - prints the effective configuration

/// Print the resolved configuration as pretty JSON, secrets redacted
pub fn run() -> anyhow::Result<()> {
    let (config, load_error) = super::load_config();

    if let Some(e) = load_error {
        eprintln!("warning: failed to load configuration, showing defaults: {}", e);
    }

    println!("{}", serde_json::to_string_pretty(&config.redacted())?);

    Ok(())
}
