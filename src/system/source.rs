use std::net::{IpAddr, SocketAddr};

use color_eyre::Result;

use super::sample::{NetCounters, Protocol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReading {
    pub total_bytes: u64,
    pub used_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskReading {
    pub total_bytes: u64,
    pub used_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub group: String,
    pub label: String,
    pub celsius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReading {
    pub name: String,
    pub pid: u32,
    pub mem_percent: Option<f32>,
    pub cpu_percent: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketReading {
    pub protocol: Protocol,
    pub local: SocketAddr,
    pub remote: SocketAddr,
    pub established: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCount {
    pub count: u64,
    pub manager: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreCounts {
    pub physical: usize,
    pub logical: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenMode {
    pub resolution: String,
    pub refresh_hz: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsidLookup {
    Iwgetid,
    IwLink,
    Nmcli,
}

impl SsidLookup {
    /// Tried in this order; the first non-empty answer wins.
    pub const ORDER: [SsidLookup; 3] = [SsidLookup::Iwgetid, SsidLookup::IwLink, SsidLookup::Nmcli];
}

/// Raw telemetry provider. Any call may fail; callers substitute sentinels.
pub trait MetricsSource {
    fn cpu_percent(&mut self) -> Result<f32>;
    fn memory(&mut self) -> Result<MemoryReading>;
    fn root_disk(&mut self) -> Result<DiskReading>;
    fn battery_percent(&mut self) -> Result<Option<f32>>;
    fn sensor_temperatures(&mut self) -> Result<Vec<SensorReading>>;
    fn thermal_zone_celsius(&mut self) -> Result<f32>;
    fn cache_size_kb(&mut self) -> Result<u64>;
    fn cpu_frequency_mhz(&mut self) -> Result<Option<f32>>;
    fn interface_names(&mut self) -> Result<Vec<String>>;
    fn net_counters(&mut self) -> Result<NetCounters>;
    fn wireless_interface(&mut self) -> Result<String>;
    fn lookup_ssid(&mut self, method: SsidLookup, interface: &str) -> Result<String>;
    fn processes(&mut self) -> Result<Vec<ProcessReading>>;
    fn sockets(&mut self) -> Result<Vec<SocketReading>>;
    fn os_name(&mut self) -> Result<String>;
    fn kernel_version(&mut self) -> Result<String>;
    fn uptime_secs(&mut self) -> Result<u64>;
    fn hostname(&mut self) -> Result<String>;
    fn local_ip(&mut self) -> Result<IpAddr>;
    fn package_count(&mut self) -> Result<PackageCount>;
    fn cpu_model(&mut self) -> Result<String>;
    fn core_counts(&mut self) -> Result<CoreCounts>;
    fn screen_mode(&mut self) -> Result<ScreenMode>;
    fn arch(&mut self) -> Result<String>;
    fn env_var(&mut self, key: &str) -> Result<String>;
}
