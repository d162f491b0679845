/// Format seconds as zero-padded `HH:MM:SS`.
///
/// Hours are padded to two digits but never truncated, so 100 hours renders
/// as `100:00:00`.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
