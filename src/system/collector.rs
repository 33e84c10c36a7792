use std::net::{IpAddr, UdpSocket};
use std::path::Path;
use std::time::{Duration, Instant};

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use sysinfo::{
    Components, Disks, MINIMUM_CPU_UPDATE_INTERVAL, Networks, ProcessRefreshKind,
    ProcessesToUpdate, System,
};

use super::command;
use super::parse;
use super::platform;
use super::sample::NetCounters;
use super::source::{
    CoreCounts, DiskReading, MemoryReading, MetricsSource, PackageCount, ProcessReading,
    ScreenMode, SensorReading, SocketReading, SsidLookup,
};

pub struct Collector {
    sys: System,
    disks: Disks,
    networks: Networks,
    components: Components,
    command_timeout: Duration,
    primed_at: Instant,
}

impl Collector {
    pub fn new(command_timeout: Duration) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            components: Components::new_with_refreshed_list(),
            command_timeout,
            primed_at: Instant::now(),
        }
    }

    // CPU usage is a delta between refreshes; sysinfo reports ~0 until one full window has passed.
    fn wait_for_cpu_window(&self) {
        let elapsed = self.primed_at.elapsed();
        if elapsed < MINIMUM_CPU_UPDATE_INTERVAL {
            std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL - elapsed);
        }
    }
}

impl MetricsSource for Collector {
    fn cpu_percent(&mut self) -> Result<f32> {
        self.wait_for_cpu_window();
        self.sys.refresh_cpu_usage();
        let usage = self.sys.global_cpu_usage();
        if !usage.is_finite() {
            bail!("cpu usage is not a number");
        }
        Ok(usage)
    }

    fn memory(&mut self) -> Result<MemoryReading> {
        self.sys.refresh_memory();
        let total_bytes = self.sys.total_memory();
        if total_bytes == 0 {
            bail!("total memory reported as zero");
        }
        Ok(MemoryReading {
            total_bytes,
            used_bytes: self.sys.used_memory(),
        })
    }

    fn root_disk(&mut self) -> Result<DiskReading> {
        self.disks.refresh(true);
        let root = Path::new("/");
        let disk = self
            .disks
            .list()
            .iter()
            .find(|d| d.mount_point() == root)
            .or_else(|| self.disks.list().iter().max_by_key(|d| d.total_space()))
            .ok_or_else(|| eyre!("no disks mounted"))?;
        let total_bytes = disk.total_space();
        Ok(DiskReading {
            total_bytes,
            used_bytes: total_bytes.saturating_sub(disk.available_space()),
        })
    }

    fn battery_percent(&mut self) -> Result<Option<f32>> {
        platform::battery_percent()
    }

    fn sensor_temperatures(&mut self) -> Result<Vec<SensorReading>> {
        self.components.refresh(true);
        Ok(self
            .components
            .list()
            .iter()
            .filter_map(|component| {
                let celsius = component.temperature()?;
                let label = component.label().to_string();
                let group = label.split_whitespace().next()?.to_lowercase();
                Some(SensorReading {
                    group,
                    label,
                    celsius,
                })
            })
            .collect())
    }

    fn thermal_zone_celsius(&mut self) -> Result<f32> {
        platform::thermal_zone_celsius()
    }

    fn cache_size_kb(&mut self) -> Result<u64> {
        platform::cache_size_kb()
    }

    fn cpu_frequency_mhz(&mut self) -> Result<Option<f32>> {
        self.sys.refresh_cpu_frequency();
        Ok(self
            .sys
            .cpus()
            .first()
            .map(|cpu| cpu.frequency())
            .filter(|&mhz| mhz > 0)
            .map(|mhz| mhz as f32))
    }

    fn interface_names(&mut self) -> Result<Vec<String>> {
        self.networks.refresh(true);
        Ok(self.networks.list().keys().cloned().collect())
    }

    fn net_counters(&mut self) -> Result<NetCounters> {
        self.networks.refresh(true);
        if self.networks.list().is_empty() {
            bail!("no network interfaces");
        }
        Ok(self
            .networks
            .list()
            .iter()
            .fold(NetCounters::default(), |acc, (_, data)| NetCounters {
                bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
                bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
            }))
    }

    fn wireless_interface(&mut self) -> Result<String> {
        platform::wireless_interface()
    }

    fn lookup_ssid(&mut self, method: SsidLookup, interface: &str) -> Result<String> {
        let timeout = self.command_timeout;
        match method {
            SsidLookup::Iwgetid => Ok(command::run("iwgetid", &["-r"], timeout)?
                .trim()
                .to_string()),
            SsidLookup::IwLink => {
                let output = command::run("iw", &["dev", interface, "link"], timeout)?;
                parse::iw_link_ssid(&output).ok_or_else(|| eyre!("iw reports no SSID"))
            }
            SsidLookup::Nmcli => {
                let output =
                    command::run("nmcli", &["-t", "-f", "active,ssid", "dev", "wifi"], timeout)?;
                parse::nmcli_active_ssid(&output).ok_or_else(|| eyre!("nmcli reports no SSID"))
            }
        }
    }

    fn processes(&mut self) -> Result<Vec<ProcessReading>> {
        self.wait_for_cpu_window();
        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let total_memory = self.sys.total_memory();

        Ok(self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                let mem_percent = (total_memory > 0)
                    .then(|| (process.memory() as f64 / total_memory as f64 * 100.0) as f32);
                let cpu = process.cpu_usage();
                ProcessReading {
                    name: process.name().to_string_lossy().to_string(),
                    pid: pid.as_u32(),
                    mem_percent,
                    cpu_percent: cpu.is_finite().then_some(cpu),
                }
            })
            .collect())
    }

    fn sockets(&mut self) -> Result<Vec<SocketReading>> {
        platform::sockets()
    }

    fn os_name(&mut self) -> Result<String> {
        platform::os_pretty_name()
            .or_else(|_| System::long_os_version().ok_or_else(|| eyre!("unknown OS")))
    }

    fn kernel_version(&mut self) -> Result<String> {
        System::kernel_version().ok_or_else(|| eyre!("unknown kernel version"))
    }

    fn uptime_secs(&mut self) -> Result<u64> {
        Ok(System::uptime())
    }

    fn hostname(&mut self) -> Result<String> {
        System::host_name().ok_or_else(|| eyre!("unknown host name"))
    }

    fn local_ip(&mut self) -> Result<IpAddr> {
        // Connecting a UDP socket only selects a route; nothing is sent.
        let socket = UdpSocket::bind("0.0.0.0:0").wrap_err("failed to bind probe socket")?;
        socket
            .connect("8.8.8.8:80")
            .wrap_err("no route to the outside world")?;
        Ok(socket.local_addr()?.ip())
    }

    fn package_count(&mut self) -> Result<PackageCount> {
        platform::package_count(self.command_timeout)
    }

    fn cpu_model(&mut self) -> Result<String> {
        self.sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .ok_or_else(|| eyre!("unknown CPU model"))
    }

    fn core_counts(&mut self) -> Result<CoreCounts> {
        let logical = self.sys.cpus().len();
        if logical == 0 {
            bail!("no CPUs reported");
        }
        Ok(CoreCounts {
            physical: System::physical_core_count().unwrap_or(0),
            logical,
        })
    }

    fn screen_mode(&mut self) -> Result<ScreenMode> {
        let output = command::run("xrandr", &[], self.command_timeout)?;
        parse::xrandr_current_mode(&output).ok_or_else(|| eyre!("xrandr reports no active mode"))
    }

    fn arch(&mut self) -> Result<String> {
        Ok(std::env::consts::ARCH.to_string())
    }

    fn env_var(&mut self, key: &str) -> Result<String> {
        std::env::var(key).wrap_err_with(|| format!("{key} is not set"))
    }
}
