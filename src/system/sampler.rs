use std::net::IpAddr;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use color_eyre::Result;

use super::rate::RateTracker;
use super::sample::{ConnectionInfo, NULL, ProcessInfo, Sample, SystemInfo, UNKNOWN};
use super::source::{MetricsSource, SocketReading, SsidLookup};

const GIB: u64 = 1024 * 1024 * 1024;
pub const PROCESS_NAME_LEN: usize = 12;
const LOOPBACK: &str = "lo";
const VIRTUAL_PREFIXES: [&str; 4] = ["docker", "br-", "veth", "virbr"];
const CPU_SENSOR_GROUPS: [&str; 3] = ["coretemp", "cpu_thermal", "k10temp"];

pub fn try_read<T>(field: &'static str, result: Result<T>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(field, error = %err, "metric unavailable, using sentinel");
            default
        }
    }
}

/// Builds a [`Sample`] per cycle from a [`MetricsSource`]. Never fails.
pub struct Sampler<S> {
    source: S,
    rates: RateTracker,
}

impl<S: MetricsSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Sampler {
            source,
            rates: RateTracker::new(),
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn sample(&mut self) -> Sample {
        self.sample_at(unix_now())
    }

    pub fn sample_at(&mut self, now: f64) -> Sample {
        let _span = tracing::trace_span!("sampler.sample").entered();
        let src = &mut self.source;

        let cpu_percent = try_read("cpu_percent", src.cpu_percent(), 0.0);

        let (mem_percent, mem_used_gb, mem_total_gb) = try_read(
            "memory",
            src.memory().map(|mem| {
                (
                    percent_of(mem.used_bytes, mem.total_bytes),
                    mem.used_bytes / GIB,
                    mem.total_bytes / GIB,
                )
            }),
            (0.0, 0, 0),
        );

        let (disk_percent, disk_used_gb, disk_total_gb) = try_read(
            "disk",
            src.root_disk().map(|disk| {
                (
                    percent_of(disk.used_bytes, disk.total_bytes),
                    disk.used_bytes / GIB,
                    disk.total_bytes / GIB,
                )
            }),
            (0.0, 0, 0),
        );

        let battery_percent = try_read("battery", src.battery_percent(), None);
        let cpu_temp = resolve_cpu_temp(src);
        let cache_size_kb = try_read("cache_size", src.cache_size_kb(), 0);
        let cpu_freq_mhz = try_read("cpu_frequency", src.cpu_frequency_mhz(), None);

        let interfaces = try_read("interfaces", src.interface_names(), Vec::new());
        let network_interface = select_interface(&interfaces)
            .unwrap_or(NULL)
            .to_string();
        let ssid = resolve_ssid(src);

        let rates = &mut self.rates;
        let (net_counters, throughput) = try_read(
            "net_counters",
            src.net_counters()
                .map(|counters| (counters, rates.update(counters, now))),
            Default::default(),
        );

        let processes = try_read("processes", src.processes(), Vec::new())
            .into_iter()
            .map(|p| ProcessInfo {
                name: p.name.chars().take(PROCESS_NAME_LEN).collect(),
                pid: p.pid,
                mem_percent: p.mem_percent,
                cpu_percent: p.cpu_percent,
            })
            .collect();

        let connections = try_read("sockets", src.sockets(), Vec::new())
            .iter()
            .filter_map(established_ipv4)
            .collect();

        let system_info = read_system_info(src, mem_total_gb);

        Sample {
            cpu_percent,
            mem_percent,
            mem_used_gb,
            mem_total_gb,
            disk_percent,
            disk_used_gb,
            disk_total_gb,
            battery_percent,
            cpu_temp,
            cache_size_kb,
            cpu_freq_mhz,
            network_interface,
            ssid,
            net_counters,
            throughput,
            processes,
            connections,
            system_info,
        }
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 100.0) as f32
    }
}

pub fn select_interface(names: &[String]) -> Option<&str> {
    let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.into_iter().find(|name| {
        *name != LOOPBACK && !VIRTUAL_PREFIXES.iter().any(|p| name.starts_with(p))
    })
}

fn resolve_cpu_temp<S: MetricsSource>(src: &mut S) -> f32 {
    let readings = try_read("sensors", src.sensor_temperatures(), Vec::new());
    CPU_SENSOR_GROUPS
        .iter()
        .find_map(|group| readings.iter().find(|r| r.group == *group))
        .map(|r| r.celsius)
        .unwrap_or_else(|| try_read("thermal_zone", src.thermal_zone_celsius(), 0.0))
}

fn resolve_ssid<S: MetricsSource>(src: &mut S) -> String {
    let Some(interface) = try_read("wireless_interface", src.wireless_interface().map(Some), None)
    else {
        return NULL.to_string();
    };
    for method in SsidLookup::ORDER {
        match src.lookup_ssid(method, &interface) {
            Ok(ssid) if !ssid.trim().is_empty() => return ssid.trim().to_string(),
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(?method, error = %err, "ssid lookup failed");
            }
        }
    }
    NULL.to_string()
}

fn established_ipv4(socket: &SocketReading) -> Option<ConnectionInfo> {
    if !socket.established {
        return None;
    }
    match (socket.local.ip(), socket.remote.ip()) {
        (IpAddr::V4(local), IpAddr::V4(remote)) => Some(ConnectionInfo {
            local_addr: local,
            local_port: socket.local.port(),
            remote_addr: remote,
            remote_port: socket.remote.port(),
            protocol: socket.protocol,
        }),
        _ => None,
    }
}

fn read_system_info<S: MetricsSource>(src: &mut S, mem_total_gb: u64) -> SystemInfo {
    let unknown = || UNKNOWN.to_string();
    let defaults = SystemInfo::default();

    let desktop = src
        .env_var("XDG_CURRENT_DESKTOP")
        .or_else(|_| src.env_var("DESKTOP_SESSION"));
    let shell = src
        .env_var("SHELL")
        .map(|shell| match Path::new(&shell).file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => shell.clone(),
        });
    let terminal = src.env_var("TERM_PROGRAM").or_else(|_| src.env_var("TERM"));
    let (package_count, package_manager) = try_read(
        "packages",
        src.package_count().map(|p| (p.count, p.manager)),
        (defaults.package_count, defaults.package_manager),
    );
    let (physical_cores, logical_cores) = try_read(
        "cores",
        src.core_counts().map(|c| (c.physical, c.logical)),
        (0, 0),
    );
    let (screen_resolution, refresh_rate) = try_read(
        "screen",
        src.screen_mode().map(|mode| (mode.resolution, mode.refresh_hz)),
        (unknown(), unknown()),
    );

    SystemInfo {
        os_name: try_read("os_name", src.os_name(), unknown()),
        kernel: try_read("kernel", src.kernel_version(), unknown()),
        desktop: try_read("desktop", desktop, unknown()),
        shell: try_read("shell", shell, unknown()),
        terminal: try_read("terminal", terminal, unknown()),
        uptime_secs: try_read("uptime", src.uptime_secs(), 0),
        hostname: try_read("hostname", src.hostname(), unknown()),
        local_ip: try_read(
            "local_ip",
            src.local_ip().map(|ip| ip.to_string()),
            unknown(),
        ),
        package_count,
        package_manager,
        cpu_model: try_read("cpu_model", src.cpu_model(), unknown()),
        physical_cores,
        logical_cores,
        screen_resolution,
        refresh_rate,
        arch: try_read("arch", src.arch(), unknown()),
        mem_total_gb,
    }
}
