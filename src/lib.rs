pub mod address;
pub mod allocator;
pub mod cli;
pub mod commands;
pub mod common;
pub mod constants;
pub mod error;
pub mod ipv6_utils;
pub mod output;
pub mod output_common;
pub mod overlap;
pub mod parse;
pub mod prefix;
pub mod range;
