pub mod config;
pub mod phases;
pub mod run;
pub mod simulate;

/// clap value parser for `--phase`. Oversized numbers saturate so the
/// range check reports them.
pub fn parse_phase_arg(raw: &str) -> Result<i64, String> {
    pomotick_core::parse_phase_index(raw).ok_or_else(|| format!("'{raw}' is not a phase number"))
}
