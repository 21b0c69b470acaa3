//! Application-wide constants.

/// Directory name used under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "cvgen";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "CVGEN_CONFIG_DIR";

/// Default base directory for the scaffolded Swift package.
pub const DEFAULT_SCAFFOLD_DIR: &str = "./CVCore";

/// Default asset catalog folder that receives the colorsets.
pub const DEFAULT_ASSETS_DIR: &str = "./ConVenuence/ConVenuence/Assets.xcassets/Colors";
