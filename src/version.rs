/// Server version: build-time `APP_VERSION` override, falling back to the
/// crate version.
pub const VERSION: &str = match option_env!("APP_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
