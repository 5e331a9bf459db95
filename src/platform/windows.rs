/// Display name of the host operating system, used in console messages
pub fn os_name() -> &'static str {
    "Windows"
}
