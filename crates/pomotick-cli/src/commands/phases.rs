use pomotick_core::{format_duration, Config};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let phases = config.phase_list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(phases.as_slice())?);
        return Ok(());
    }
    for (index, phase) in phases.iter().enumerate() {
        println!(
            "{index}  {:<12} {}",
            phase.name,
            format_duration(phase.duration_secs())
        );
    }
    Ok(())
}
