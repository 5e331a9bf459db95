/// Display name of the host operating system, used in console messages
///
/// Each desktop environment on Unix-like systems has its own trash, so the
/// name only tells the user which family of trash their files went to.
pub fn os_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "macOS"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else {
        "Unknown"
    }
}
