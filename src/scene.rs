use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use image::Rgb;
use thiserror::Error;

use crate::point3d::Point3D;
use crate::triangle::Triangle;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("triangle {triangle} references vertex {index} but the scene has {points} points")]
    IndexOutOfRange { triangle: usize, index: usize, points: usize },
}

/// Fixed geometry: points addressed by index and triangles referencing them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub points: Vec<Point3D>,
    pub triangles: Vec<Triangle>,
}

impl Scene {
    /// Two flat triangles standing in front of the default viewpoint
    pub fn demo() -> Self {
        let points = vec![
            Point3D::new(-100.0, 300.0, 100.0),
            Point3D::new(0.0, 300.0, 300.0),
            Point3D::new(100.0, 300.0, 150.0),
            Point3D::new(-150.0, 450.0, 100.0),
            Point3D::new(50.0, 450.0, 300.0),
            Point3D::new(125.0, 450.0, 150.0),
        ];
        let triangles = vec![
            Triangle::new(0, 1, 2, Rgb([255, 0, 0])),
            Triangle::new(3, 4, 5, Rgb([255, 127, 0])),
        ];
        Scene { points, triangles }
    }

    /// Every triangle index must address an existing point
    pub fn validate(&self) -> Result<(), SceneError> {
        for (triangle, tri) in self.triangles.iter().enumerate() {
            for index in tri.indices() {
                if index >= self.points.len() {
                    return Err(SceneError::IndexOutOfRange { triangle, index, points: self.points.len() });
                }
            }
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let file = File::open(path)?;
        parse_scene(BufReader::new(file))
    }
}

/// Parse the line-oriented scene format:
///
/// ```text
/// # comment
/// v -100 300 100
/// f 1 2 3 255 0 0
/// ```
///
/// Face indices are 1-based.
pub fn parse_scene<R: Read>(reader: BufReader<R>) -> Result<Scene, SceneError> {
    let mut scene = Scene::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens[0].starts_with('#') {
            continue
        }

        match tokens[0] {
            "v" => {
                expect_values(&tokens, 3, number)?;
                let [x, y, z] = parse_values::<f32, 3>(&tokens[1..], number)?;
                scene.points.push(Point3D { x, y, z })
            }
            "f" => {
                expect_values(&tokens, 6, number)?;
                let indices = parse_values::<usize, 3>(&tokens[1..4], number)?;
                let color = parse_values::<u8, 3>(&tokens[4..], number)?;
                let [Some(a), Some(b), Some(c)] = indices.map(|i| i.checked_sub(1)) else {
                    return Err(parse_error(number, "face indices start at 1"));
                };
                scene.triangles.push(Triangle::new(a, b, c, Rgb(color)))
            }
            other => return Err(parse_error(number, &format!("unknown keyword `{other}`"))),
        }
    }

    scene.validate()?;
    Ok(scene)
}

fn parse_error(line: usize, message: &str) -> SceneError {
    SceneError::Parse { line, message: message.to_string() }
}

fn expect_values(tokens: &[&str], count: usize, line: usize) -> Result<(), SceneError> {
    let found = tokens.len() - 1;
    if found != count {
        return Err(parse_error(line, &format!("`{}` expects {count} values, found {found}", tokens[0])));
    }
    Ok(())
}

fn parse_values<T: FromStr, const N: usize>(tokens: &[&str], line: usize) -> Result<[T; N], SceneError> {
    let mut values = Vec::with_capacity(N);
    for token in tokens {
        let value = token
            .parse::<T>()
            .map_err(|_| parse_error(line, &format!("invalid value `{token}`")))?;
        values.push(value);
    }
    values
        .try_into()
        .map_err(|_| parse_error(line, "wrong number of values"))
}
