use std::fs;
use std::path::Path;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};

use super::PlatformExtensions;
use crate::system::command;
use crate::system::parse;
use crate::system::sample::Protocol;
use crate::system::source::{PackageCount, SocketReading};

pub struct Platform;

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read {path}"))
}

impl PlatformExtensions for Platform {
    fn battery_percent() -> Result<Option<f32>> {
        let supplies = fs::read_dir("/sys/class/power_supply")
            .wrap_err("failed to list /sys/class/power_supply")?;
        for supply in supplies.flatten() {
            let path = supply.path();
            let kind = fs::read_to_string(path.join("type")).unwrap_or_default();
            if kind.trim() != "Battery" {
                continue;
            }
            let capacity = fs::read_to_string(path.join("capacity"))
                .wrap_err_with(|| format!("failed to read capacity of {}", path.display()))?;
            let percent = capacity
                .trim()
                .parse::<f32>()
                .wrap_err("battery capacity is not a number")?;
            return Ok(Some(percent));
        }
        Ok(None)
    }

    fn cache_size_kb() -> Result<u64> {
        let cpuinfo = read("/proc/cpuinfo")?;
        parse::cpuinfo_cache_kb(&cpuinfo).ok_or_else(|| eyre!("no cache size in /proc/cpuinfo"))
    }

    fn thermal_zone_celsius() -> Result<f32> {
        let raw = read("/sys/class/thermal/thermal_zone0/temp")?;
        parse::millidegrees(&raw).ok_or_else(|| eyre!("unreadable thermal zone value {raw:?}"))
    }

    fn wireless_interface() -> Result<String> {
        let table = read("/proc/net/wireless")?;
        parse::wireless_interface(&table).ok_or_else(|| eyre!("no wireless interface listed"))
    }

    fn sockets() -> Result<Vec<SocketReading>> {
        // IPv4 tables only; the tcp6/udp6 tables are never read.
        let mut sockets = parse::proc_net_sockets(&read("/proc/net/tcp")?, Protocol::Tcp);
        if let Ok(udp) = read("/proc/net/udp") {
            sockets.extend(parse::proc_net_sockets(&udp, Protocol::Udp));
        }
        Ok(sockets)
    }

    fn os_pretty_name() -> Result<String> {
        let release = read("/etc/os-release")?;
        parse::os_release_pretty_name(&release).ok_or_else(|| eyre!("no PRETTY_NAME in os-release"))
    }

    fn package_count(timeout: Duration) -> Result<PackageCount> {
        if Path::new("/usr/bin/dpkg").exists() {
            let status = read("/var/lib/dpkg/status")?;
            return Ok(PackageCount {
                count: parse::dpkg_installed_count(&status),
                manager: "dpkg".to_string(),
            });
        }
        if Path::new("/usr/bin/pacman").exists() {
            // One entry per package plus the ALPM_DB_VERSION marker.
            let entries = fs::read_dir("/var/lib/pacman/local")
                .wrap_err("failed to list /var/lib/pacman/local")?
                .count() as u64;
            return Ok(PackageCount {
                count: entries.saturating_sub(1),
                manager: "pacman".to_string(),
            });
        }
        if Path::new("/usr/bin/rpm").exists() {
            let listing = command::run("rpm", &["-qa"], timeout)?;
            return Ok(PackageCount {
                count: listing.lines().filter(|l| !l.trim().is_empty()).count() as u64,
                manager: "rpm".to_string(),
            });
        }
        Err(eyre!("no supported package manager found"))
    }
}
