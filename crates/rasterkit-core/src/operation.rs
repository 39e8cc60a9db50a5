//! Named operations and their argument validation.
//!
//! An [`Operation`] is what a front end (command line, WASM) selects by name.
//! Parsing validates argument counts and ranges before any raster is touched.
//!
//! | Name             | Arguments               |
//! |------------------|-------------------------|
//! | `grayscale`      | none                    |
//! | `swap`           | none                    |
//! | `invert`         | none                    |
//! | `zoom-out`       | none                    |
//! | `rotate-right`   | none                    |
//! | `swirl`          | `<cx> <cy> <strength>`  |
//! | `edge-detection` | `<threshold>`           |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channel::{grayscale, invert, swap_channels};
use crate::edges::detect_edges;
use crate::error::{OperationError, Result};
use crate::raster::Raster;
use crate::transform::{downsample_half, rotate_90_cw, swirl, SwirlParams};

/// Swirl center coordinate that selects the raster's geometric center.
pub const CENTER_SENTINEL: i64 = -1;

/// A single transform selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    Grayscale,
    Swap,
    Invert,
    ZoomOut,
    RotateRight,
    Swirl(SwirlParams),
    EdgeDetection { threshold: f64 },
}

impl Operation {
    /// Every supported operation name, in usage order.
    pub const NAMES: [&'static str; 7] = [
        "grayscale",
        "swap",
        "invert",
        "zoom-out",
        "rotate-right",
        "swirl",
        "edge-detection",
    ];

    /// Parse an operation from its name and textual arguments.
    ///
    /// # Errors
    ///
    /// - `OperationError::UnknownOperation` for an unsupported name
    /// - `OperationError::WrongArgumentCount` if `swirl` does not get exactly
    ///   3 arguments, `edge-detection` exactly 1, or any other operation any
    /// - `OperationError::ArgumentRange` for malformed or out-of-range numbers
    ///
    /// # Example
    /// ```
    /// use rasterkit_core::Operation;
    ///
    /// let op = Operation::parse("edge-detection", &["30"]).unwrap();
    /// assert_eq!(op, Operation::EdgeDetection { threshold: 30.0 });
    /// ```
    pub fn parse<S: AsRef<str>>(
        name: &str,
        args: &[S],
    ) -> std::result::Result<Self, OperationError> {
        let expected = Self::argument_count(name)
            .ok_or_else(|| OperationError::UnknownOperation(name.to_string()))?;
        if args.len() != expected {
            return Err(OperationError::WrongArgumentCount {
                operation: Self::canonical_name(name),
                expected,
                actual: args.len(),
            });
        }

        let op = match name {
            "grayscale" => Operation::Grayscale,
            "swap" => Operation::Swap,
            "invert" => Operation::Invert,
            "zoom-out" => Operation::ZoomOut,
            "rotate-right" => Operation::RotateRight,
            "swirl" => {
                let cx = parse_center("cx", args[0].as_ref())?;
                let cy = parse_center("cy", args[1].as_ref())?;
                let strength = parse_number("strength", args[2].as_ref())?;
                if strength == 0.0 {
                    return Err(range_error("strength", "must be non-zero"));
                }
                Operation::Swirl(SwirlParams::new(cx, cy, strength))
            }
            "edge-detection" => {
                let threshold = parse_number("threshold", args[0].as_ref())?;
                if threshold < 0.0 {
                    return Err(range_error("threshold", "must be non-negative"));
                }
                Operation::EdgeDetection { threshold }
            }
            _ => return Err(OperationError::UnknownOperation(name.to_string())),
        };
        Ok(op)
    }

    /// Number of arguments an operation takes, or `None` if unknown.
    pub fn argument_count(name: &str) -> Option<usize> {
        match name {
            "grayscale" | "swap" | "invert" | "zoom-out" | "rotate-right" => Some(0),
            "swirl" => Some(3),
            "edge-detection" => Some(1),
            _ => None,
        }
    }

    fn canonical_name(name: &str) -> &'static str {
        Self::NAMES
            .iter()
            .copied()
            .find(|n| *n == name)
            .unwrap_or("operation")
    }

    /// The operation's command name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Swap => "swap",
            Operation::Invert => "invert",
            Operation::ZoomOut => "zoom-out",
            Operation::RotateRight => "rotate-right",
            Operation::Swirl(_) => "swirl",
            Operation::EdgeDetection { .. } => "edge-detection",
        }
    }

    /// Apply the operation to a raster.
    ///
    /// On error the raster is unchanged.
    pub fn apply(&self, raster: &mut Raster) -> Result<()> {
        tracing::debug!(operation = self.name(), "applying operation");
        match self {
            Operation::Grayscale => grayscale(raster),
            Operation::Swap => swap_channels(raster),
            Operation::Invert => invert(raster),
            Operation::ZoomOut => downsample_half(raster)?,
            Operation::RotateRight => rotate_90_cw(raster)?,
            Operation::Swirl(params) => swirl(raster, params)?,
            Operation::EdgeDetection { threshold } => detect_edges(raster, *threshold)?,
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Swirl(p) => {
                let coord =
                    |v: Option<f64>| v.map_or(CENTER_SENTINEL.to_string(), |v| v.to_string());
                write!(
                    f,
                    "swirl {} {} {}",
                    coord(p.center_x),
                    coord(p.center_y),
                    p.strength
                )
            }
            Operation::EdgeDetection { threshold } => write!(f, "edge-detection {threshold}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses argument-free operations only; use [`Operation::parse`] for the rest.
impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operation::parse::<&str>(s, &[])
    }
}

fn range_error(name: &str, reason: impl Into<String>) -> OperationError {
    OperationError::ArgumentRange {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn parse_number(name: &str, text: &str) -> std::result::Result<f64, OperationError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| range_error(name, format!("{text:?} is not a number")))?;
    if !value.is_finite() {
        return Err(range_error(name, format!("{text:?} is not finite")));
    }
    Ok(value)
}

/// Parse a swirl center coordinate: an integer `>= -1`, where `-1` selects
/// the geometric center.
fn parse_center(name: &str, text: &str) -> std::result::Result<Option<f64>, OperationError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| range_error(name, format!("{text:?} is not an integer")))?;
    match value {
        CENTER_SENTINEL => Ok(None),
        v if v < CENTER_SENTINEL => Err(range_error(name, format!("must be >= -1, got {v}"))),
        v => Ok(Some(v as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    #[test]
    fn test_parse_argument_free_operations() {
        let none: [&str; 0] = [];
        assert_eq!(Operation::parse("grayscale", &none).unwrap(), Operation::Grayscale);
        assert_eq!(Operation::parse("swap", &none).unwrap(), Operation::Swap);
        assert_eq!(Operation::parse("invert", &none).unwrap(), Operation::Invert);
        assert_eq!(Operation::parse("zoom-out", &none).unwrap(), Operation::ZoomOut);
        assert_eq!(
            Operation::parse("rotate-right", &none).unwrap(),
            Operation::RotateRight
        );
    }

    #[test]
    fn test_parse_swirl() {
        let op = Operation::parse("swirl", &["-1", "12", "40"]).unwrap();
        assert_eq!(
            op,
            Operation::Swirl(SwirlParams::new(None, Some(12.0), 40.0))
        );
    }

    #[test]
    fn test_parse_swirl_rejects_bad_arguments() {
        for args in [
            ["-2", "0", "10"],
            ["0", "-5", "10"],
            ["x", "0", "10"],
            ["1.5", "0", "10"],
            ["0", "0", "0"],
            ["0", "0", "abc"],
            ["0", "0", "inf"],
        ] {
            let err = Operation::parse("swirl", &args).unwrap_err();
            assert!(
                matches!(err, OperationError::ArgumentRange { .. }),
                "{:?} gave {:?}",
                args,
                err
            );
        }
    }

    #[test]
    fn test_parse_edge_detection() {
        assert_eq!(
            Operation::parse("edge-detection", &["12.5"]).unwrap(),
            Operation::EdgeDetection { threshold: 12.5 }
        );
        assert_eq!(
            Operation::parse("edge-detection", &["0"]).unwrap(),
            Operation::EdgeDetection { threshold: 0.0 }
        );
        assert!(matches!(
            Operation::parse("edge-detection", &["-3"]),
            Err(OperationError::ArgumentRange { .. })
        ));
        assert!(matches!(
            Operation::parse("edge-detection", &["ten"]),
            Err(OperationError::ArgumentRange { .. })
        ));
    }

    #[test]
    fn test_parse_wrong_argument_count() {
        assert_eq!(
            Operation::parse("swirl", &["1", "2"]).unwrap_err(),
            OperationError::WrongArgumentCount {
                operation: "swirl",
                expected: 3,
                actual: 2
            }
        );
        assert!(matches!(
            Operation::parse("invert", &["1"]),
            Err(OperationError::WrongArgumentCount { expected: 0, .. })
        ));
        assert!(matches!(
            Operation::parse::<&str>("edge-detection", &[]),
            Err(OperationError::WrongArgumentCount { expected: 1, .. })
        ));
    }

    #[test]
    fn test_parse_unknown_operation() {
        assert_eq!(
            Operation::parse("blur", &["1"]).unwrap_err(),
            OperationError::UnknownOperation("blur".to_string())
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("zoom-out".parse::<Operation>().unwrap(), Operation::ZoomOut);
        assert!("swirl".parse::<Operation>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let ops = [
            Operation::Invert,
            Operation::Swirl(SwirlParams::new(None, Some(3.0), 25.0)),
            Operation::EdgeDetection { threshold: 7.5 },
        ];
        for op in ops {
            let text = op.to_string();
            let mut parts = text.split_whitespace();
            let name = parts.next().unwrap();
            let args: Vec<&str> = parts.collect();
            assert_eq!(Operation::parse(name, &args).unwrap(), op, "{}", text);
        }
    }

    #[test]
    fn test_names_cover_every_operation() {
        for name in Operation::NAMES {
            assert!(Operation::argument_count(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let mut raster = Raster::from_pixels(2, 4, vec![Pixel::new(10, 20, 30); 8]).unwrap();

        Operation::Invert.apply(&mut raster).unwrap();
        assert_eq!(raster.pixel(0, 0), Pixel::new(245, 235, 225));

        Operation::RotateRight.apply(&mut raster).unwrap();
        assert_eq!((raster.rows(), raster.cols()), (4, 2));

        Operation::ZoomOut.apply(&mut raster).unwrap();
        assert_eq!((raster.rows(), raster.cols()), (2, 1));
    }

    #[test]
    fn test_apply_error_leaves_raster() {
        let source = Raster::from_pixels(1, 3, vec![Pixel::WHITE; 3]).unwrap();
        let mut raster = source.clone();
        assert!(Operation::ZoomOut.apply(&mut raster).is_err());
        assert_eq!(raster, source);
    }
}
