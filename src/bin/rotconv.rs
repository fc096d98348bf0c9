//! Rotation Conversion Tool
//!
//! Reads the components of a rotation from the command line, converts it into
//! another representation and prints the result, either in the plain text form
//! of the destination type or as JSON.
//!
//! Component order per representation:
//!   angle-axis  angle x y z
//!   quaternion  w x y z
//!   matrix      r11 r12 r13 r21 r22 r23 r31 r32 r33
//!   rpy         roll pitch yaw
//!   ypr         yaw pitch roll
//!
//! Usage:
//!   cargo run --bin rotconv -- --from rpy --to quaternion --degrees 90 0 0
//!   cargo run --bin rotconv -- --from quaternion --to matrix --json 0.7071 0.7071 0 0

use std::fmt::Display;

use clap::{ArgAction, Parser, ValueEnum};
use rotations::constants::{DEG2RAD, RAD2DEG};
use rotations::{
    convert, AngleAxis, EulerAnglesRpy, EulerAnglesYpr, FromRotation, Rotation, RotationMatrix,
    RotationQuaternion, Scalar,
};
use serde::Serialize;

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Rotation representations accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Representation {
    AngleAxis,
    Quaternion,
    Matrix,
    Rpy,
    Ypr,
}

/// Rotation Conversion Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts a 3D rotation between angle-axis, quaternion, matrix and Euler angle forms",
    long_about = None
)]
struct Args {
    /// Representation of the input components
    #[arg(long, value_enum)]
    from: Representation,

    /// Representation to convert into
    #[arg(long, value_enum)]
    to: Representation,

    /// Compute in single precision
    #[arg(long = "f32", action = ArgAction::SetTrue)]
    single: bool,

    /// Print the result as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Read and print angles in degrees instead of radians
    #[arg(long, action = ArgAction::SetTrue)]
    degrees: bool,

    /// Reject inputs that violate the unit norm or orthonormality invariants
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Display detailed debugging information
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Rotation components, in the order listed in the tool description
    #[arg(required = true, allow_negative_numbers = true)]
    components: Vec<f64>,
}

/// Formats a rotation as plain text or pretty printed JSON
fn render<R: Serialize + Display>(rotation: &R, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(rotation)?)
    } else {
        Ok(rotation.to_string())
    }
}

/// Converts `source` into the requested representation and renders it
fn emit<S, Source>(source: &Source, args: &Args) -> Result<String>
where
    S: Scalar,
    Source: Rotation<Scalar = S>,
    AngleAxis<S>: FromRotation<Source>,
    RotationQuaternion<S>: FromRotation<Source>,
    RotationMatrix<S>: FromRotation<Source>,
    EulerAnglesRpy<S>: FromRotation<Source>,
    EulerAnglesYpr<S>: FromRotation<Source>,
{
    if args.debug {
        eprintln!("Source ({}): {}", S::NAME, source);
    }
    let to_output_units = S::from_double(if args.degrees { RAD2DEG } else { 1.0 });

    match args.to {
        Representation::AngleAxis => {
            let mut rotation: AngleAxis<S> = convert(source);
            rotation.set_angle(rotation.angle() * to_output_units);
            render(&rotation, args.json)
        }
        Representation::Quaternion => {
            render(&convert::<RotationQuaternion<S>, _>(source), args.json)
        }
        Representation::Matrix => render(&convert::<RotationMatrix<S>, _>(source), args.json),
        Representation::Rpy => {
            let mut rotation: EulerAnglesRpy<S> = convert(source);
            *rotation.vector_mut() *= to_output_units;
            render(&rotation, args.json)
        }
        Representation::Ypr => {
            let mut rotation: EulerAnglesYpr<S> = convert(source);
            *rotation.vector_mut() *= to_output_units;
            render(&rotation, args.json)
        }
    }
}

/// Builds the source rotation in precision `S` and converts it
fn run<S: Scalar>(args: &Args) -> Result<String> {
    let to_radians = if args.degrees { DEG2RAD } else { 1.0 };
    let mut components = args.components.clone();
    match args.from {
        Representation::AngleAxis => {
            if let Some(angle) = components.first_mut() {
                *angle *= to_radians;
            }
        }
        Representation::Rpy | Representation::Ypr => {
            components.iter_mut().for_each(|angle| *angle *= to_radians);
        }
        Representation::Quaternion | Representation::Matrix => {}
    }
    let components: Vec<S> = components.into_iter().map(S::from_double).collect();

    match args.from {
        Representation::AngleAxis => {
            let mut source = AngleAxis::<S>::from_slice(&components)?;
            if args.strict {
                source = source.validated(S::TOLERANCE)?;
            }
            emit(&source, args)
        }
        Representation::Quaternion => {
            let mut source = RotationQuaternion::<S>::from_slice(&components)?;
            if args.strict {
                source = source.validated(S::TOLERANCE)?;
            }
            emit(&source, args)
        }
        Representation::Matrix => {
            let mut source = RotationMatrix::<S>::from_slice(&components)?;
            if args.strict {
                source = source.validated(S::TOLERANCE)?;
            }
            emit(&source, args)
        }
        Representation::Rpy => emit(&EulerAnglesRpy::<S>::from_slice(&components)?, args),
        Representation::Ypr => emit(&EulerAnglesYpr::<S>::from_slice(&components)?, args),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        eprintln!("Arguments: {:?}", args);
    }

    let output = if args.single {
        run::<f32>(&args)?
    } else {
        run::<f64>(&args)?
    };
    println!("{}", output);

    Ok(())
}
