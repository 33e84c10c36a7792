use std::time::Duration;

use color_eyre::Result;

use super::source::{PackageCount, SocketReading};

pub trait PlatformExtensions {
    fn battery_percent() -> Result<Option<f32>>;
    fn cache_size_kb() -> Result<u64>;
    fn thermal_zone_celsius() -> Result<f32>;
    fn wireless_interface() -> Result<String>;
    fn sockets() -> Result<Vec<SocketReading>>;
    fn os_pretty_name() -> Result<String>;
    fn package_count(timeout: Duration) -> Result<PackageCount>;
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod fallback;
#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
use fallback as platform_impl;
#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;

pub fn battery_percent() -> Result<Option<f32>> {
    platform_impl::Platform::battery_percent()
}

pub fn cache_size_kb() -> Result<u64> {
    platform_impl::Platform::cache_size_kb()
}

pub fn thermal_zone_celsius() -> Result<f32> {
    platform_impl::Platform::thermal_zone_celsius()
}

pub fn wireless_interface() -> Result<String> {
    platform_impl::Platform::wireless_interface()
}

pub fn sockets() -> Result<Vec<SocketReading>> {
    platform_impl::Platform::sockets()
}

pub fn os_pretty_name() -> Result<String> {
    platform_impl::Platform::os_pretty_name()
}

pub fn package_count(timeout: Duration) -> Result<PackageCount> {
    platform_impl::Platform::package_count(timeout)
}
