pub mod collector;
pub mod command;
pub mod parse;
pub mod platform;
pub mod rate;
pub mod sample;
pub mod sampler;
pub mod source;
