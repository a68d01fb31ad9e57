use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the CookShare application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/CookShare
/// - Windows: %APPDATA%\CookShare
/// - Linux: $XDG_DATA_HOME/CookShare or ~/.local/share/CookShare
///
/// The directory is not created here; the caller decides when.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("CookShare"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get macOS data directory"))
    }

    #[cfg(target_os = "windows")]
    {
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get Windows APPDATA directory"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_DATA_HOME wins over the ~/.local/share fallback
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            Ok(PathBuf::from(xdg_data_home))
        } else {
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get Linux data directory"))
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        compile_error!("Unsupported platform for app_data_dir")
    }
}
