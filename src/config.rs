use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

use crate::point3d::Point3D;
use crate::projection::Viewpoint;

pub const USAGE: &str = "usage: trirender [--width N] [--height N] [--viewpoint X,Y,Z] [--scene FILE] \
[--out FILE] [--threads N] [--move-step F] [--rotate-step F]";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub viewpoint: Viewpoint,
    /// Scene file; the built-in demo scene when absent
    pub scene_path: Option<PathBuf>,
    /// Render a single frame to this image instead of opening a window
    pub output: Option<PathBuf>,
    pub threads: usize,
    pub move_step: f32,
    pub rotate_step: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 150,
            viewpoint: Viewpoint::default(),
            scene_path: None,
            output: None,
            threads: num_cpus::get(),
            move_step: 10.0,
            rotate_step: 0.1,
        }
    }
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.ok_or_else(|| anyhow!("{flag} needs a value"))?;
    value
        .parse()
        .with_context(|| format!("invalid value `{value}` for {flag}"))
}

fn parse_viewpoint(value: Option<String>) -> Result<Viewpoint> {
    let value = value.ok_or_else(|| anyhow!("--viewpoint needs a value"))?;
    let coords = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid viewpoint `{value}`"))?;
    let [x, y, z] = coords[..] else {
        bail!("viewpoint `{value}` must have three comma separated coordinates");
    };
    Ok(Viewpoint(Point3D { x, y, z }))
}

impl RenderConfig {
    /// Build from command line arguments, program name excluded
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--width" => config.width = parse_value(&flag, args.next())?,
                "--height" => config.height = parse_value(&flag, args.next())?,
                "--viewpoint" => config.viewpoint = parse_viewpoint(args.next())?,
                "--scene" => config.scene_path = Some(parse_value(&flag, args.next())?),
                "--out" => config.output = Some(parse_value(&flag, args.next())?),
                "--threads" => config.threads = parse_value(&flag, args.next())?,
                "--move-step" => config.move_step = parse_value(&flag, args.next())?,
                "--rotate-step" => config.rotate_step = parse_value(&flag, args.next())?,
                other => bail!("unknown argument `{other}`\n{USAGE}"),
            }
        }

        if config.threads == 0 {
            bail!("--threads must be at least 1");
        }
        Ok(config)
    }
}
