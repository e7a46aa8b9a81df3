/// Protocol version strings understood by the robot.
///
/// Headers carry the version as a plain string claim. A command whose version
/// the robot does not know is rejected as a whole.
pub const VERSION_1: &str = "1.0";

pub const DEFAULT_VERSION: &str = VERSION_1;

pub const SUPPORTED_VERSIONS: &[&str] = &[VERSION_1];

/// Advisory check for clients. Header constructors never call this.
pub fn is_supported(version: &str) -> bool {
  SUPPORTED_VERSIONS.contains(&version)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_version_1() {
    assert_eq!(DEFAULT_VERSION, "1.0");
    assert!(is_supported(DEFAULT_VERSION));
  }

  #[test]
  fn unknown_versions() {
    assert!(!is_supported("2.0"));
    assert!(!is_supported(""));
    assert!(!is_supported("1.0 "));
  }
}
