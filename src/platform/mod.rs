#[cfg(windows)]
pub mod windows;

#[cfg(not(windows))]
pub mod unix;

#[cfg(windows)]
pub use windows::os_name;

#[cfg(not(windows))]
pub use unix::os_name;
