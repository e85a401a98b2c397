/// Configuration constants for the mesh config file
pub mod meshconfig {
    /// Directory under HOME holding the config file
    pub const DIR_NAME: &str = ".meshctl";

    /// Config file name
    pub const FILE_NAME: &str = "config.yaml";

    /// Environment variable overriding the config file path
    pub const PATH_ENV_VAR: &str = "MESHCTL_CONFIG";
}

/// Configuration constants for context resolution
pub mod context {
    /// Environment variable naming the active context
    pub const ENV_VAR: &str = "MESHCTL_CONTEXT";
}

/// Default values for CLI
pub mod defaults {
    /// Location stored for a token created without --filepath
    pub const TOKEN_LOCATION: &str = "auth.json";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

