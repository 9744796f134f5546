//! `gw colors`: the first N component colors.

use anyhow::Result;
use clap::Args;
use graphwalk_core::Color;
use serde::Serialize;

use super::CommandContext;
use crate::output::{OutputMode, pretty_section, render_mode};

#[derive(Args, Debug)]
pub struct ColorsArgs {
    /// Number of colors to assign.
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ColorsReport {
    pub colors: Vec<Color>,
}

pub fn run_colors(args: &ColorsArgs, ctx: &CommandContext) -> Result<()> {
    let report = ColorsReport {
        colors: ctx.config.palette.palette().assign(args.count),
    };
    render_report(ctx.output, &report)
}

fn render_report(mode: OutputMode, report: &ColorsReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| {
            for color in &r.colors {
                writeln!(w, "{color}")?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("{} color(s)", r.colors.len()))?;
            for (i, color) in r.colors.iter().enumerate() {
                writeln!(w, "{i:>4}  {color}")?;
            }
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: ColorsArgs,
    }

    #[test]
    fn count_is_positional() {
        let w = Wrapper::parse_from(["test", "17"]);
        assert_eq!(w.args.count, 17);
    }

    #[test]
    fn count_is_required() {
        assert!(Wrapper::try_parse_from(["test"]).is_err());
    }
}
