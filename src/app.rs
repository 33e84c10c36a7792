use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::action::Action;
use crate::config::load_config;
use crate::event::{Event, EventHandler};
use crate::logging;
use crate::system::collector::Collector;
use crate::system::sample::Sample;
use crate::system::sampler::Sampler;
use crate::system::source::MetricsSource;
use crate::terminal;
use crate::ui;
use crate::ui::layout::{LayoutNode, Variant, build_layout};
use crate::ui::theme::{Theme, detect_color_support};

/// Time between samples. Fixed; not configurable.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Terminating,
}

pub struct App<S> {
    pub state: LoopState,
    pub variant: Variant,
    pub theme: Theme,
    sampler: Option<Sampler<S>>,
    sample: Sample,
    layout: Option<LayoutNode>,
    cycles: u64,
}

impl<S: MetricsSource> App<S> {
    pub fn new(source: S, variant: Variant, theme: Theme) -> Self {
        App {
            state: LoopState::Idle,
            variant,
            theme,
            sampler: Some(Sampler::new(source)),
            sample: Sample::default(),
            layout: None,
            cycles: 0,
        }
    }

    pub fn start(&mut self) {
        if self.enter_running() {
            self.refresh_data();
        }
    }

    fn enter_running(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        tracing::info!(variant = ?self.variant, "dashboard running");
        true
    }

    pub fn refresh_data(&mut self) {
        if let Some(sampler) = self.sampler.as_mut() {
            let sample = sampler.sample();
            self.apply(sample);
        }
    }

    fn apply(&mut self, sample: Sample) {
        self.sample = sample;
        let _span = tracing::trace_span!("app.build_layout").entered();
        self.layout = Some(build_layout(self.variant, &self.sample, &self.theme));
        self.cycles += 1;
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn layout(&self) -> Option<&LayoutNode> {
        self.layout.as_ref()
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn map_event(&self, event: &Event) -> Action {
        match event {
            Event::Tick => Action::Refresh,
            Event::Resize => Action::Redraw,
            Event::Interrupt => Action::Terminate,
            Event::Key(key) => map_key(*key),
        }
    }

    /// Applies `action`; returns whether the screen needs repainting.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Refresh if self.is_running() => {
                self.refresh_data();
                true
            }
            Action::Redraw => self.is_running(),
            Action::Terminate => {
                if self.state != LoopState::Terminating {
                    tracing::info!(cycles = self.cycles, "interrupt received, terminating");
                }
                self.state = LoopState::Terminating;
                false
            }
            Action::Refresh | Action::None => false,
        }
    }
}

impl<S: MetricsSource + Send + 'static> App<S> {
    pub async fn start_detached(&mut self) -> Result<()> {
        if self.enter_running() {
            self.refresh_detached().await?;
        }
        Ok(())
    }

    pub async fn refresh_detached(&mut self) -> Result<()> {
        let mut sampler = self
            .sampler
            .take()
            .ok_or_else(|| eyre!("sampler lost by an earlier failed cycle"))?;
        let (sampler, sample) = tokio::task::spawn_blocking(move || {
            let sample = sampler.sample();
            (sampler, sample)
        })
        .await
        .wrap_err("sampling task failed")?;
        self.sampler = Some(sampler);
        self.apply(sample);
        Ok(())
    }

    async fn handle(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Refresh if self.is_running() => {
                self.refresh_detached().await?;
                Ok(true)
            }
            other => Ok(self.dispatch(other)),
        }
    }
}

/// In raw mode Ctrl+C arrives as a key press rather than a signal.
fn map_key(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Terminate,
        _ => Action::None,
    }
}

fn draw<S: MetricsSource>(terminal: &mut DefaultTerminal, app: &App<S>) -> Result<()> {
    let _span = tracing::trace_span!("ui.draw").entered();
    terminal.draw(|frame| {
        if let Some(layout) = app.layout() {
            ui::draw(frame, layout, &app.theme);
        }
    })?;
    Ok(())
}

pub async fn run<S: MetricsSource + Send + 'static>(
    terminal: &mut DefaultTerminal,
    app: &mut App<S>,
    mut events: EventHandler,
) -> Result<()> {
    app.start_detached().await?;
    draw(terminal, app)?;

    while app.is_running() {
        let Some(event) = events.next().await else {
            app.dispatch(Action::Terminate);
            break;
        };
        let action = app.map_event(&event);
        if app.handle(action).await? {
            draw(terminal, app)?;
        }
    }

    Ok(())
}

pub async fn launch(variant: Variant) -> Result<()> {
    let config = load_config();
    logging::init(&config.logging)?;

    let theme = Theme::for_support(detect_color_support());
    let collector = Collector::new(config.collectors.command_timeout());
    let mut app = App::new(collector, variant, theme);

    // Listen for SIGINT before raw mode so an early interrupt still restores the terminal.
    let events = EventHandler::new(REFRESH_INTERVAL);
    let mut terminal = terminal::init()?;
    let result = run(&mut terminal, &mut app, events).await;
    let restored = terminal::restore();

    result.and(restored)
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use color_eyre::eyre::bail;

    use super::*;
    use crate::system::sample::NetCounters;
    use crate::system::source::{
        CoreCounts, DiskReading, MemoryReading, PackageCount, ProcessReading, ScreenMode,
        SensorReading, SocketReading, SsidLookup,
    };

    struct CountingSource {
        reads: u32,
    }

    impl MetricsSource for CountingSource {
        fn cpu_percent(&mut self) -> Result<f32> {
            self.reads += 1;
            Ok(self.reads as f32)
        }
        fn memory(&mut self) -> Result<MemoryReading> {
            bail!("no memory")
        }
        fn root_disk(&mut self) -> Result<DiskReading> {
            bail!("no disk")
        }
        fn battery_percent(&mut self) -> Result<Option<f32>> {
            bail!("no battery")
        }
        fn sensor_temperatures(&mut self) -> Result<Vec<SensorReading>> {
            bail!("no sensors")
        }
        fn thermal_zone_celsius(&mut self) -> Result<f32> {
            bail!("no thermal zone")
        }
        fn cache_size_kb(&mut self) -> Result<u64> {
            bail!("no cache")
        }
        fn cpu_frequency_mhz(&mut self) -> Result<Option<f32>> {
            bail!("no frequency")
        }
        fn interface_names(&mut self) -> Result<Vec<String>> {
            bail!("no interfaces")
        }
        fn net_counters(&mut self) -> Result<NetCounters> {
            bail!("no counters")
        }
        fn wireless_interface(&mut self) -> Result<String> {
            bail!("no wireless")
        }
        fn lookup_ssid(&mut self, _method: SsidLookup, _interface: &str) -> Result<String> {
            bail!("no ssid")
        }
        fn processes(&mut self) -> Result<Vec<ProcessReading>> {
            bail!("no processes")
        }
        fn sockets(&mut self) -> Result<Vec<SocketReading>> {
            bail!("no sockets")
        }
        fn os_name(&mut self) -> Result<String> {
            bail!("no os")
        }
        fn kernel_version(&mut self) -> Result<String> {
            bail!("no kernel")
        }
        fn uptime_secs(&mut self) -> Result<u64> {
            bail!("no uptime")
        }
        fn hostname(&mut self) -> Result<String> {
            bail!("no hostname")
        }
        fn local_ip(&mut self) -> Result<IpAddr> {
            bail!("no ip")
        }
        fn package_count(&mut self) -> Result<PackageCount> {
            bail!("no packages")
        }
        fn cpu_model(&mut self) -> Result<String> {
            bail!("no model")
        }
        fn core_counts(&mut self) -> Result<CoreCounts> {
            bail!("no cores")
        }
        fn screen_mode(&mut self) -> Result<ScreenMode> {
            bail!("no screen")
        }
        fn arch(&mut self) -> Result<String> {
            bail!("no arch")
        }
        fn env_var(&mut self, key: &str) -> Result<String> {
            bail!("{key} unset")
        }
    }

    fn make_app() -> App<CountingSource> {
        App::new(CountingSource { reads: 0 }, Variant::System, Theme::mono())
    }

    #[test]
    fn start_moves_idle_to_running_with_first_layout() {
        let mut app = make_app();
        assert_eq!(app.state, LoopState::Idle);
        assert!(app.layout().is_none());

        app.start();
        assert_eq!(app.state, LoopState::Running);
        assert!(app.layout().is_some());
        assert_eq!(app.sample().cpu_percent, 1.0);
        assert_eq!(app.cycles(), 1);
    }

    #[test]
    fn start_is_idempotent() {
        let mut app = make_app();
        app.start();
        app.start();
        assert_eq!(app.cycles(), 1);
    }

    #[test]
    fn tick_resamples_and_redraws() {
        let mut app = make_app();
        app.start();
        let action = app.map_event(&Event::Tick);
        assert_eq!(action, Action::Refresh);
        assert!(app.dispatch(action));
        assert_eq!(app.sample().cpu_percent, 2.0);
        assert_eq!(app.cycles(), 2);
    }

    #[test]
    fn resize_redraws_without_sampling() {
        let mut app = make_app();
        app.start();
        let action = app.map_event(&Event::Resize);
        assert_eq!(action, Action::Redraw);
        assert!(app.dispatch(action));
        assert_eq!(app.cycles(), 1);
    }

    #[test]
    fn interrupt_terminates_and_stops_refreshing() {
        let mut app = make_app();
        app.start();
        let action = app.map_event(&Event::Interrupt);
        assert_eq!(action, Action::Terminate);
        assert!(!app.dispatch(action));
        assert_eq!(app.state, LoopState::Terminating);
        assert!(!app.is_running());

        assert!(!app.dispatch(Action::Refresh));
        assert_eq!(app.cycles(), 1);
    }

    #[test]
    fn ctrl_c_key_terminates() {
        let app = make_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_event(&Event::Key(key)), Action::Terminate);
    }

    #[test]
    fn other_keys_are_ignored() {
        let app = make_app();
        for code in [KeyCode::Char('q'), KeyCode::Esc, KeyCode::Char('c')] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(app.map_event(&Event::Key(key)), Action::None);
        }
    }

    #[tokio::test]
    async fn detached_sampling_keeps_the_sampler() {
        let mut app = make_app();
        app.start_detached().await.unwrap();
        assert_eq!(app.state, LoopState::Running);
        assert_eq!(app.sample().cpu_percent, 1.0);

        assert!(app.handle(Action::Refresh).await.unwrap());
        assert!(app.handle(Action::Refresh).await.unwrap());
        assert_eq!(app.sample().cpu_percent, 3.0);
        assert_eq!(app.cycles(), 3);

        assert!(!app.handle(Action::Terminate).await.unwrap());
        assert!(!app.handle(Action::Refresh).await.unwrap());
        assert_eq!(app.cycles(), 3);
    }

    #[test]
    fn refresh_before_start_is_ignored() {
        let mut app = make_app();
        assert!(!app.dispatch(Action::Refresh));
        assert!(app.layout().is_none());
    }
}
