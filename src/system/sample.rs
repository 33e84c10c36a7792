use std::net::Ipv4Addr;

use super::rate::Throughput;

/// Placeholder for textual facts that could not be read.
pub const UNKNOWN: &str = "Unknown";
/// Placeholder for network identity (interface, SSID) that could not be resolved.
pub const NULL: &str = "NULL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub bytes_recv: u64,
    pub bytes_sent: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    pub name: String,
    pub pid: u32,
    pub mem_percent: Option<f32>,
    pub cpu_percent: Option<f32>,
}

impl ProcessInfo {
    pub fn cpu_or_zero(&self) -> f32 {
        self.cpu_percent.filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    pub fn mem_or_zero(&self) -> f32 {
        self.mem_percent.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    pub fn label(self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub local_addr: Ipv4Addr,
    pub local_port: u16,
    pub remote_addr: Ipv4Addr,
    pub remote_port: u16,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub os_name: String,
    pub kernel: String,
    pub desktop: String,
    pub shell: String,
    pub terminal: String,
    pub uptime_secs: u64,
    pub hostname: String,
    pub local_ip: String,
    pub package_count: u64,
    pub package_manager: String,
    pub cpu_model: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    pub screen_resolution: String,
    pub refresh_rate: String,
    pub arch: String,
    pub mem_total_gb: u64,
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os_name: UNKNOWN.to_string(),
            kernel: UNKNOWN.to_string(),
            desktop: UNKNOWN.to_string(),
            shell: UNKNOWN.to_string(),
            terminal: UNKNOWN.to_string(),
            uptime_secs: 0,
            hostname: UNKNOWN.to_string(),
            local_ip: UNKNOWN.to_string(),
            package_count: 0,
            package_manager: "unknown".to_string(),
            cpu_model: UNKNOWN.to_string(),
            physical_cores: 0,
            logical_cores: 0,
            screen_resolution: UNKNOWN.to_string(),
            refresh_rate: UNKNOWN.to_string(),
            arch: UNKNOWN.to_string(),
            mem_total_gb: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub cpu_percent: f32,
    pub mem_percent: f32,
    pub mem_used_gb: u64,
    pub mem_total_gb: u64,
    pub disk_percent: f32,
    pub disk_used_gb: u64,
    pub disk_total_gb: u64,
    pub battery_percent: Option<f32>,
    pub cpu_temp: f32,
    pub cache_size_kb: u64,
    pub cpu_freq_mhz: Option<f32>,
    pub network_interface: String,
    pub ssid: String,
    pub net_counters: NetCounters,
    pub throughput: Throughput,
    pub processes: Vec<ProcessInfo>,
    pub connections: Vec<ConnectionInfo>,
    pub system_info: SystemInfo,
}

impl Default for Sample {
    fn default() -> Self {
        Sample {
            cpu_percent: 0.0,
            mem_percent: 0.0,
            mem_used_gb: 0,
            mem_total_gb: 0,
            disk_percent: 0.0,
            disk_used_gb: 0,
            disk_total_gb: 0,
            battery_percent: None,
            cpu_temp: 0.0,
            cache_size_kb: 0,
            cpu_freq_mhz: None,
            network_interface: NULL.to_string(),
            ssid: NULL.to_string(),
            net_counters: NetCounters::default(),
            throughput: Throughput::default(),
            processes: Vec::new(),
            connections: Vec::new(),
            system_info: SystemInfo::default(),
        }
    }
}
