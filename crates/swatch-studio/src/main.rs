//! Interactive terminal preview of the swatch grid.
//!
//! Starts with a grid of random cells, then reads commands from stdin: add a
//! batch, tap a cell to remove its color, put the last removal back, scroll.

mod command;
mod controls;
mod host;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use clap::builder::RangedU64ValueParser;

use swatch_grid::coords::Vec2;
use swatch_grid::logging::{init_logging, LoggingConfig};
use swatch_grid::{FlowLayout, GeometricParams, IndexDiff};

use crate::command::{Command, HELP};
use crate::controls::{Action, Button};
use crate::host::{HostView, MAX_BATCH};

#[derive(Debug, Parser)]
#[command(name = "swatch-studio", version, about = "Interactive preview of a colored flow grid")]
struct StudioArgs {
    /// Cells per row.
    #[arg(long, default_value = "3")]
    columns: NonZeroUsize,

    /// Left and right section inset, in points.
    #[arg(long, default_value_t = 10.0)]
    inset: f32,

    /// Horizontal gap between cells, in points.
    #[arg(long, default_value_t = 10.0)]
    spacing: f32,

    /// Viewport width, in points.
    #[arg(long, default_value_t = 400.0)]
    width: f32,

    /// Viewport height, in points.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Cells generated before the first prompt.
    #[arg(long, default_value_t = 31, value_parser = batch_size())]
    initial: usize,

    /// Cells appended by each press of the add button.
    #[arg(long, default_value_t = 3, value_parser = batch_size())]
    batch: usize,

    /// Seed for color generation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter in env_logger syntax, e.g. `swatch_grid=debug`.
    #[arg(long)]
    log: Option<String>,

    /// Disable colored log output.
    #[arg(long)]
    no_color: bool,
}

fn batch_size() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_BATCH as u64)
}

fn main() -> anyhow::Result<()> {
    let args = StudioArgs::parse();

    init_logging(
        LoggingConfig::default()
            .with_filter(args.log.clone())
            .with_color(!args.no_color),
    );

    let params = GeometricParams::new(args.columns, args.inset, args.inset, args.spacing);
    let layout = FlowLayout::new(args.width, args.height);
    log::debug!("{params:?} in {:?}", layout.viewport());

    let host = Rc::new(RefCell::new(HostView::new(params, layout, args.seed)));
    host.borrow_mut().add_random(args.initial);

    let add = Button::new("Add", Action::AddRandom(args.batch), &host);
    let restore = Button::new("Add removed", Action::RestoreRemoved, &host);

    println!();
    println!("  swatch studio · {} × {} viewport", args.width, args.height);
    println!("  buttons: [{}] [{}]   type `help` for commands", add.label(), restore.label());
    println!();
    print!("{}", host.borrow().render());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ").context("writing prompt")?;
        stdout.flush().context("flushing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading command")? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(command::CommandError::Empty) => continue,
            Err(e) => {
                println!("  {e}");
                continue;
            }
        };

        let diff = match command {
            Command::Add(None) => add.press(),
            Command::Add(Some(n)) => Some(host.borrow_mut().add_random(n)),
            Command::Restore => restore.press(),
            Command::TapIndex(i) => match host.borrow_mut().tap_index(i) {
                Ok(diff) => Some(diff),
                Err(e) => {
                    println!("  {e}");
                    None
                }
            },
            Command::TapPoint(x, y) => {
                let diff = host.borrow_mut().tap_point(Vec2::new(x, y));
                if diff.is_none() {
                    println!("  nothing at ({x}, {y})");
                }
                diff
            }
            Command::Remove(swatch) => Some(host.borrow_mut().remove_swatch(swatch)),
            Command::Scroll(dy) => {
                host.borrow_mut().scroll_by(dy);
                Some(IndexDiff::empty())
            }
            Command::Show => Some(IndexDiff::empty()),
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };

        if let Some(diff) = diff {
            report(&diff);
            print!("{}", host.borrow().render());
        }
    }

    log::debug!("leaving with {} cells", host.borrow().grid().item_count());
    Ok(())
}

fn report(diff: &IndexDiff) {
    if !diff.removed.is_empty() {
        println!("  - removed {:?}", diff.removed);
    }
    if !diff.inserted.is_empty() {
        println!("  + inserted {:?}", diff.inserted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<StudioArgs, clap::Error> {
        StudioArgs::try_parse_from(std::iter::once("swatch-studio").chain(extra.iter().copied()))
    }

    #[test]
    fn defaults_match_playground() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.columns.get(), 3);
        assert_eq!(args.initial, 31);
        assert_eq!((args.width, args.height), (400.0, 600.0));
        assert!(!args.no_color);
    }

    #[test]
    fn batch_sizes_are_bounded() {
        assert_eq!(parse(&["--batch", "10000"]).unwrap().batch, MAX_BATCH);
        assert!(parse(&["--batch", "10001"]).is_err());
        assert!(parse(&["--initial", "18446744073709551615"]).is_err());
    }

    #[test]
    fn zero_columns_rejected() {
        assert!(parse(&["--columns", "0"]).is_err());
    }
}
