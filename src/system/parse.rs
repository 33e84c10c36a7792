//! Parsers for the text formats read from `/proc`, `/sys`, `/etc` and helper commands.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use super::sample::Protocol;
use super::source::{ScreenMode, SocketReading};

const ESTABLISHED: &str = "01";

pub fn cpuinfo_cache_kb(cpuinfo: &str) -> Option<u64> {
    cpuinfo
        .lines()
        .find(|line| line.to_lowercase().contains("cache size"))
        .and_then(|line| line.split_once(':'))
        .and_then(|(_, value)| value.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}

pub fn millidegrees(contents: &str) -> Option<f32> {
    let raw: i64 = contents.trim().parse().ok()?;
    Some(raw as f32 / 1000.0)
}

pub fn wireless_interface(contents: &str) -> Option<String> {
    let row = contents.lines().nth(2)?;
    let (name, _) = row.split_once(':')?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

pub fn iw_link_ssid(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.split_once("SSID:"))
        .map(|(_, ssid)| ssid.trim().to_string())
        .filter(|ssid| !ssid.is_empty())
}

pub fn nmcli_active_ssid(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("yes:"))
        .map(|ssid| ssid.replace("\\:", ":"))
        .filter(|ssid| !ssid.is_empty())
}

pub fn os_release_pretty_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

/// Current mode (the one flagged `*`) from `xrandr` output.
pub fn xrandr_current_mode(output: &str) -> Option<ScreenMode> {
    output.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        let resolution = tokens.next()?;
        if !resolution.contains('x') {
            return None;
        }
        let current = tokens.find(|t| t.contains('*'))?;
        Some(ScreenMode {
            resolution: resolution.to_string(),
            refresh_hz: current.replace(['*', '+'], ""),
        })
    })
}

pub fn dpkg_installed_count(status: &str) -> u64 {
    status
        .lines()
        .filter(|line| *line == "Status: install ok installed")
        .count() as u64
}

/// IPv4 socket table as printed in `/proc/net/tcp` and `/proc/net/udp`.
/// Malformed rows are skipped.
pub fn proc_net_sockets(table: &str, protocol: Protocol) -> Vec<SocketReading> {
    table
        .lines()
        .skip(1)
        .filter_map(|row| {
            let fields: Vec<&str> = row.split_whitespace().collect();
            let local = hex_socket_addr(fields.get(1)?)?;
            let remote = hex_socket_addr(fields.get(2)?)?;
            let state = fields.get(3)?;
            Some(SocketReading {
                protocol,
                local,
                remote,
                established: *state == ESTABLISHED,
            })
        })
        .collect()
}

// The kernel prints the raw in-memory address word, so native byte order recovers the octets.
fn hex_socket_addr(field: &str) -> Option<SocketAddr> {
    let (addr, port) = field.split_once(':')?;
    if addr.len() != 8 {
        return None;
    }
    let raw = u32::from_str_radix(addr, 16).ok()?;
    let port = u16::from_str_radix(port, 16).ok()?;
    Some(SocketAddr::V4(SocketAddrV4::new(
        Ipv4Addr::from(raw.to_ne_bytes()),
        port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_size_from_cpuinfo() {
        let cpuinfo = "processor\t: 0\nmodel name\t: Some CPU\ncache size\t: 8192 KB\n";
        assert_eq!(cpuinfo_cache_kb(cpuinfo), Some(8192));
        assert_eq!(cpuinfo_cache_kb("processor\t: 0\n"), None);
        assert_eq!(cpuinfo_cache_kb("cache size\t: lots\n"), None);
    }

    #[test]
    fn thermal_zone_millidegrees() {
        assert_eq!(millidegrees("45500\n"), Some(45.5));
        assert_eq!(millidegrees("warm"), None);
    }

    #[test]
    fn wireless_table() {
        let table = "Inter-| sta-|   Quality        |   Discarded packets\n face | tus | link level noise |  nwid  crypt\nwlp2s0: 0000   61.  -49.  -256        0      0\n";
        assert_eq!(wireless_interface(table), Some("wlp2s0".to_string()));
        assert_eq!(wireless_interface("header\nheader\n"), None);
    }

    #[test]
    fn ssid_from_helpers() {
        let iw = "Connected to aa:bb:cc:dd:ee:ff (on wlp2s0)\n\tSSID: CoffeeShop\n\tfreq: 2412\n";
        assert_eq!(iw_link_ssid(iw), Some("CoffeeShop".to_string()));
        assert_eq!(iw_link_ssid("Not connected.\n"), None);

        let nmcli = "no:Neighbour\nyes:Home\\:5G\n";
        assert_eq!(nmcli_active_ssid(nmcli), Some("Home:5G".to_string()));
        assert_eq!(nmcli_active_ssid("no:Neighbour\n"), None);
    }

    #[test]
    fn pretty_name() {
        let release = "NAME=\"Ubuntu\"\nPRETTY_NAME=\"Ubuntu 24.04.1 LTS\"\nID=ubuntu\n";
        assert_eq!(
            os_release_pretty_name(release),
            Some("Ubuntu 24.04.1 LTS".to_string())
        );
        assert_eq!(os_release_pretty_name("ID=arch\n"), None);
    }

    #[test]
    fn xrandr_mode() {
        let output = "Screen 0: minimum 320 x 200, current 1920 x 1080\neDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm\n   1920x1080     60.01*+  59.97    59.96\n   1680x1050     59.95\n";
        assert_eq!(
            xrandr_current_mode(output),
            Some(ScreenMode {
                resolution: "1920x1080".to_string(),
                refresh_hz: "60.01".to_string(),
            })
        );
        assert_eq!(xrandr_current_mode("eDP-1 disconnected\n"), None);
    }

    #[test]
    fn dpkg_status_count() {
        let status = "Package: a\nStatus: install ok installed\n\nPackage: b\nStatus: deinstall ok config-files\n\nPackage: c\nStatus: install ok installed\n";
        assert_eq!(dpkg_installed_count(status), 2);
    }

    #[test]
    fn socket_table() {
        let loopback = u32::from_ne_bytes([127, 0, 0, 1]);
        let remote = u32::from_ne_bytes([93, 184, 216, 34]);
        let table = format!(
            "  sl  local_address rem_address   st tx_queue rx_queue\n   0: {loopback:08X}:0277 00000000:0000 0A 00000000:00000000\n   1: {loopback:08X}:A2C4 {remote:08X}:01BB 01 00000000:00000000\n   2: garbage\n"
        );
        let sockets = proc_net_sockets(&table, Protocol::Tcp);
        assert_eq!(sockets.len(), 2);
        assert!(!sockets[0].established);
        assert_eq!(sockets[0].local, "127.0.0.1:631".parse().unwrap());
        assert!(sockets[1].established);
        assert_eq!(sockets[1].local, "127.0.0.1:41668".parse().unwrap());
        assert_eq!(sockets[1].remote, "93.184.216.34:443".parse().unwrap());
    }
}
