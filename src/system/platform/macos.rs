use std::ffi::CStr;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};

use super::PlatformExtensions;
use crate::system::source::{PackageCount, SocketReading};

pub struct Platform;

fn sysctl_u64(name: &CStr) -> Option<u64> {
    let mut value: u64 = 0;
    let mut size = std::mem::size_of::<u64>();
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            (&mut value as *mut u64).cast(),
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };
    (rc == 0 && size > 0).then_some(value)
}

impl PlatformExtensions for Platform {
    fn battery_percent() -> Result<Option<f32>> {
        bail!("battery level is not exposed without IOKit")
    }

    fn cache_size_kb() -> Result<u64> {
        // Prefer the last-level cache, as /proc/cpuinfo does on Linux.
        sysctl_u64(c"hw.l3cachesize")
            .filter(|&bytes| bytes > 0)
            .or_else(|| sysctl_u64(c"hw.l2cachesize"))
            .map(|bytes| bytes / 1024)
            .ok_or_else(|| eyre!("sysctl reported no cache size"))
    }

    fn thermal_zone_celsius() -> Result<f32> {
        bail!("no thermal zones on macOS")
    }

    fn wireless_interface() -> Result<String> {
        bail!("wireless interface lookup is not supported on macOS")
    }

    fn sockets() -> Result<Vec<SocketReading>> {
        bail!("socket table is not supported on macOS")
    }

    fn os_pretty_name() -> Result<String> {
        bail!("no os-release on macOS")
    }

    fn package_count(_timeout: Duration) -> Result<PackageCount> {
        bail!("package counting is not supported on macOS")
    }
}
