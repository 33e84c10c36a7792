use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::bail;

use super::PlatformExtensions;
use crate::system::source::{PackageCount, SocketReading};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery_percent() -> Result<Option<f32>> {
        bail!("battery level is not supported on this platform")
    }

    fn cache_size_kb() -> Result<u64> {
        bail!("cache size is not supported on this platform")
    }

    fn thermal_zone_celsius() -> Result<f32> {
        bail!("thermal zones are not supported on this platform")
    }

    fn wireless_interface() -> Result<String> {
        bail!("wireless interface lookup is not supported on this platform")
    }

    fn sockets() -> Result<Vec<SocketReading>> {
        bail!("socket table is not supported on this platform")
    }

    fn os_pretty_name() -> Result<String> {
        bail!("os-release is not available on this platform")
    }

    fn package_count(_timeout: Duration) -> Result<PackageCount> {
        bail!("package counting is not supported on this platform")
    }
}
