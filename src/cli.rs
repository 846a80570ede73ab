use crate::constants::{IPV6_PREFIX_LEN_MAX, IPV6_PREFIX_LEN_MIN};
use crate::prefix::PrefixBounds;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "This tool finds the next free IPv6 address in a range and validates IPv6 ranges and CIDR blocks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        short = 'f',
        long = "format",
        global = true,
        default_value = "txt",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'txt' or 'json'.\ndefault: txt"
    )]
    pub output_format: String,

    #[arg(
        short = 'o',
        long = "output",
        global = true,
        required = false,
        help = "Write the result to this file instead of stdout."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "mode",
        global = true,
        default_value = "overwrite",
        required = false,
        hide_default_value = true,
        help = "Select file output mode: 'append' or 'overwrite'.\ndefault: overwrite"
    )]
    pub mode: String,

    #[arg(
        long = "min-prefix",
        global = true,
        default_value_t = IPV6_PREFIX_LEN_MIN,
        value_parser = clap::value_parser!(u8).range(0..=128),
        help = "Smallest prefix length accepted as a unicast network."
    )]
    pub min_prefix: u8,

    #[arg(
        long = "max-prefix",
        global = true,
        default_value_t = IPV6_PREFIX_LEN_MAX,
        value_parser = clap::value_parser!(u8).range(0..=128),
        help = "Largest prefix length accepted as a unicast network."
    )]
    pub max_prefix: u8,
}

impl Cli {
    pub fn prefix_bounds(&self) -> PrefixBounds {
        PrefixBounds {
            min: self.min_prefix,
            max: self.max_prefix,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the first unallocated address in [start, end].
    Next {
        #[arg(short = 's', long = "start", help = "First address of the range.")]
        start: String,

        #[arg(short = 'e', long = "end", help = "Last address of the range.")]
        end: String,

        #[arg(
            short = 'a',
            long = "allocated",
            num_args = 1..,
            required = false,
            help = "Files listing allocated addresses, one per line.\nExample: used1.txt used2.txt"
        )]
        allocated: Vec<PathBuf>,

        #[arg(
            long = "strict",
            default_value = "false",
            help = "Reject unsorted or duplicated allocated lists instead of sorting them."
        )]
        strict: bool,
    },

    /// Show the derived addresses of a CIDR block.
    Cidr {
        #[arg(help = "Network CIDR.\nExample: 2001:db8::/64")]
        cidr: String,
    },

    /// Check that end and gateway lie inside start/prefix-len.
    CheckRange {
        #[arg(short = 's', long = "start")]
        start: String,

        #[arg(short = 'e', long = "end")]
        end: String,

        #[arg(short = 'g', long = "gateway")]
        gateway: String,

        #[arg(
            short = 'p',
            long = "prefix-len",
            value_parser = clap::value_parser!(u8).range(0..=128)
        )]
        prefix_len: u8,
    },

    /// Check whether two ranges overlap and list the shared CIDR blocks.
    Overlap {
        #[arg(long = "start1")]
        start1: String,

        #[arg(long = "end1")]
        end1: String,

        #[arg(long = "start2")]
        start2: String,

        #[arg(long = "end2")]
        end2: String,
    },
}
