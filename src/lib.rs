//! Live terminal telemetry dashboards drawn with fixed-width glyph gauges.
//!
//! A [`system::sampler::Sampler`] turns a [`system::source::MetricsSource`] into a
//! [`system::sample::Sample`] every cycle; [`ui::layout::build_layout`] turns the
//! sample into a tree of panels; [`app`] drives the refresh loop.

pub mod action;
pub mod app;
pub mod config;
pub mod encode;
pub mod event;
pub mod format;
pub mod logging;
pub mod system;
pub mod terminal;
pub mod ui;
