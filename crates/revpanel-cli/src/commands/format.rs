//! Knob value formatting.

use clap::Args;
use revpanel_core::{ParamKey, clamp_angle};

#[derive(Args)]
pub struct FormatArgs {
    /// Parameter id (signal, delay, decay, spread, shimmer)
    #[arg(required_unless_present = "all")]
    param: Option<ParamKey>,

    /// Knob angle in degrees; values outside -135..=135 are clamped
    #[arg(required_unless_present = "all", allow_negative_numbers = true)]
    angle: Option<f32>,

    /// Format ANGLE for every parameter
    #[arg(
        long,
        value_name = "ANGLE",
        allow_negative_numbers = true,
        conflicts_with_all = ["param", "angle"]
    )]
    all: Option<f32>,

    /// Also print the plain value and range of each parameter
    #[arg(long)]
    plain: bool,
}

pub fn run(args: FormatArgs) -> anyhow::Result<()> {
    match (args.param, args.angle, args.all) {
        (_, _, Some(requested)) => {
            let angle = clamped(requested);
            for key in ParamKey::ALL {
                if args.plain {
                    println!("{:8} {:8} {}", key.id(), key.format(angle), plain(key, angle));
                } else {
                    println!("{:8} {}", key.id(), key.format(angle));
                }
            }
        }
        (Some(key), Some(requested), None) => {
            let angle = clamped(requested);
            if args.plain {
                println!("{} {}", key.format(angle), plain(key, angle));
            } else {
                println!("{}", key.format(angle));
            }
        }
        _ => anyhow::bail!("expected <PARAM> <ANGLE> or --all <ANGLE>"),
    }
    Ok(())
}

/// Plain value in the parameter's unit, followed by its range.
fn plain(key: ParamKey, angle: f32) -> String {
    let desc = key.descriptor();
    let unit = desc.unit.suffix();
    format!(
        "{:.3}{unit} [{}{unit}..{}{unit}]",
        desc.plain_value(angle),
        desc.min,
        desc.max
    )
}

fn clamped(requested: f32) -> f32 {
    let angle = clamp_angle(requested);
    if angle != requested {
        tracing::info!(requested, angle, "angle clamped");
    }
    angle
}
