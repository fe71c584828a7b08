//! Engine build options
//!
//! Each flag is an independent boolean the build engine understands; the
//! set is order-independent and target-agnostic. Flags that don't apply to
//! the selected target are passed through and silently ignored by the
//! engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Bitmask of engine build options attached to a profile.
    ///
    /// Persisted as a raw integer. Bits this tool has no name for are kept
    /// as-is, so settings written by a newer editor survive a round trip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BuildFlags: u32 {
        /// Build a development version of the player
        const DEVELOPMENT = 1 << 0;
        /// Run the built player
        const AUTO_RUN_PLAYER = 1 << 1;
        /// Show the built player
        const SHOW_BUILT_PLAYER = 1 << 2;
        /// Build a compressed asset bundle of streamed scenes
        const BUILD_ADDITIONAL_STREAMED_SCENES = 1 << 3;
        /// Generate a project usable from an external IDE
        const ACCEPT_EXTERNAL_MODIFICATIONS = 1 << 4;
        /// Install the player into the build folder
        const INSTALL_IN_BUILD_FOLDER = 1 << 5;
        /// Start the player connected to the profiler
        const CONNECT_WITH_PROFILER = 1 << 6;
        /// Allow script debuggers to attach remotely
        const ALLOW_DEBUGGING = 1 << 7;
        /// Symlink runtime libraries when generating IDE projects
        const SYMLINK_LIBRARIES = 1 << 8;
        /// Don't compress asset bundle data
        const UNCOMPRESSED_ASSET_BUNDLE = 1 << 9;
        /// Set the player to connect to the editor
        const CONNECT_TO_HOST = 1 << 10;
        /// Build the standalone player in headless mode
        const ENABLE_HEADLESS_MODE = 1 << 11;
        /// Only build the project's scripts
        const BUILD_SCRIPTS_ONLY = 1 << 12;
        /// Patch an existing development package instead of rebuilding
        const PATCH_PACKAGE = 1 << 13;
        /// Include assertions outside development builds
        const FORCE_ENABLE_ASSERTIONS = 1 << 14;
        /// Chunk-based LZ4 compression for player data
        const COMPRESS_WITH_LZ4 = 1 << 15;
        /// Chunk-based LZ4 high-compression for player data
        const COMPRESS_WITH_LZ4_HC = 1 << 16;
        /// Compute and record the CRC of the built output
        const COMPUTE_CRC = 1 << 17;
        /// Fail the build on any error reported during it
        const STRICT_MODE = 1 << 18;
        /// Include test assemblies in the build
        const INCLUDE_TEST_ASSEMBLIES = 1 << 19;
        /// Force the build GUID to all zeros
        const NO_UNIQUE_IDENTIFIER = 1 << 20;
        /// Wait for a player connection on startup
        const WAIT_FOR_PLAYER_CONNECTION = 1 << 21;
        /// Enable code coverage in the player
        const ENABLE_CODE_COVERAGE = 1 << 22;
        /// Enable deep profiling support in the player
        const ENABLE_DEEP_PROFILING = 1 << 23;
    }
}

impl Serialize for BuildFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BuildFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // retain, not truncate: unknown bits must survive a resave
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_order_independent() {
        let a = BuildFlags::DEVELOPMENT | BuildFlags::STRICT_MODE;
        let b = BuildFlags::STRICT_MODE | BuildFlags::DEVELOPMENT;
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_as_integer() {
        let flags = BuildFlags::DEVELOPMENT | BuildFlags::ALLOW_DEBUGGING;
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, "129");

        let parsed: BuildFlags = serde_json::from_str("129").unwrap();
        assert_eq!(parsed, flags);
    }

    #[test]
    fn test_unknown_bits_retained() {
        let parsed: BuildFlags = serde_json::from_str("2147483648").unwrap();
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "2147483648");
    }

    #[test]
    fn test_empty_by_default() {
        assert!(BuildFlags::default().is_empty());
        assert_eq!(serde_json::to_string(&BuildFlags::default()).unwrap(), "0");
    }
}
