//! ossim - page-replacement and disk-scheduling simulator

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use log::info;
use ossim::disk::{self, Direction, SchedulingPolicy};
use ossim::input;
use ossim::paging::{self, PagingPolicy};
use ossim::report;

/// Simulate classic OS page-replacement and disk-scheduling policies
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a page-replacement simulation
    Paging {
        /// Number of frames
        #[arg(short = 'n', long)]
        frames: String,

        /// Reference string, comma separated (e.g. "7,0,1,2,0,3,0,4")
        #[arg(short, long)]
        refs: String,

        /// Replacement policy
        #[arg(short, long, value_enum, default_value_t = PagingArg::Fifo)]
        policy: PagingArg,
    },
    /// Run a disk-scheduling simulation
    Disk {
        /// Number of cylinders
        #[arg(short, long)]
        cylinders: String,

        /// Starting head position
        #[arg(short = 'H', long)]
        head: String,

        /// Pending requests, comma separated
        #[arg(short, long)]
        requests: String,

        /// Initial direction of travel
        #[arg(long, value_enum, default_value_t = DirectionArg::Up)]
        direction: DirectionArg,

        /// Scheduling policy
        #[arg(short, long, value_enum, default_value_t = SchedulingArg::Scan)]
        policy: SchedulingArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PagingArg {
    Fifo,
    SecondChance,
}

impl From<PagingArg> for PagingPolicy {
    fn from(arg: PagingArg) -> Self {
        match arg {
            PagingArg::Fifo => PagingPolicy::Fifo,
            PagingArg::SecondChance => PagingPolicy::SecondChance,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SchedulingArg {
    Scan,
    Look,
}

impl From<SchedulingArg> for SchedulingPolicy {
    fn from(arg: SchedulingArg) -> Self {
        match arg {
            SchedulingArg::Scan => SchedulingPolicy::Scan,
            SchedulingArg::Look => SchedulingPolicy::Look,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Up,
    Down,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => Direction::Increasing,
            DirectionArg::Down => Direction::Decreasing,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let output = match args.command {
        Command::Paging {
            frames,
            refs,
            policy,
        } => {
            let frame_count = input::parse_value("frames", &frames)?;
            let references = input::parse_list("reference string", &refs)?;
            let policy = PagingPolicy::from(policy);
            info!(
                "running {:?} with {} frames over {} references",
                policy,
                frame_count,
                references.len()
            );
            let outcome = paging::simulate(frame_count as usize, &references, policy)
                .context("Page-replacement simulation failed")?;
            match args.format {
                Format::Text => report::render_paging(&outcome),
                Format::Json => report::paging_json(&outcome)?,
            }
        }
        Command::Disk {
            cylinders,
            head,
            requests,
            direction,
            policy,
        } => {
            let disk_size = input::parse_value("cylinders", &cylinders)?;
            let head_start = input::parse_value("head position", &head)?;
            let requests = input::parse_list("requests", &requests)?;
            let policy = SchedulingPolicy::from(policy);
            info!(
                "running {:?} on {} cylinders from {} with {} requests",
                policy,
                disk_size,
                head_start,
                requests.len()
            );
            let outcome = disk::simulate(
                &requests,
                head_start,
                disk_size,
                direction.into(),
                policy,
            )
            .context("Disk-scheduling simulation failed")?;
            match args.format {
                Format::Text => report::render_seek(&outcome),
                Format::Json => report::seek_json(&outcome)?,
            }
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
