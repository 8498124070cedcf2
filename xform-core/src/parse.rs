/// Parser for textual transform chains such as
/// `scale 2 3 4; rotate z 90; translate 4 0 2`
use nalgebra::{Point3, Vector3};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::{all_consuming, cut, map, map_res, opt},
    error::{ErrorKind, FromExternalError, ParseError},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::compose::{Composition, Op};
use crate::error::{Result, TransformError};
use crate::transform::Axis;

#[derive(Debug)]
enum ChainError<'a> {
    Syntax(&'a str, ErrorKind),
    Transform(TransformError),
}

impl<'a> ParseError<&'a str> for ChainError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        ChainError::Syntax(input, kind)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<&'a str, TransformError> for ChainError<'a> {
    fn from_external_error(_input: &'a str, _kind: ErrorKind, e: TransformError) -> Self {
        ChainError::Transform(e)
    }
}

impl From<ChainError<'_>> for TransformError {
    fn from(e: ChainError<'_>) -> Self {
        match e {
            ChainError::Transform(e) => e,
            ChainError::Syntax(rest, kind) => {
                let rest: String = rest.chars().take(24).collect();
                if rest.is_empty() {
                    TransformError::Parse(format!("unexpected end of input ({:?})", kind))
                } else {
                    TransformError::Parse(format!("unexpected input at {:?} ({:?})", rest, kind))
                }
            }
        }
    }
}

type PResult<'a, T> = IResult<&'a str, T, ChainError<'a>>;

/// Parse a `;`-separated chain of operations, listed in application order
pub fn parse_chain(input: &str) -> Result<Vec<Op>> {
    let trailing = tuple((multispace0, opt(char(';')), multispace0));
    match all_consuming(terminated(chain, trailing))(input) {
        Ok((_, ops)) => Ok(ops),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into()),
        Err(nom::Err::Incomplete(_)) => Err(TransformError::Parse("incomplete input".to_string())),
    }
}

/// Parse a chain straight into a composition
pub fn parse_composition(input: &str) -> Result<Composition> {
    Composition::from_ops(&parse_chain(input)?)
}

fn chain(input: &str) -> PResult<'_, Vec<Op>> {
    separated_list1(preceded(multispace0, char(';')), op)(input)
}

fn op(input: &str) -> PResult<'_, Op> {
    preceded(
        multispace0,
        alt((translate, rotate, scale, shear, taper, reflect, stretch, look_at)),
    )(input)
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    terminated(tag_no_case(word), multispace1)
}

/// Finite float, optionally preceded by a comma
fn number(input: &str) -> PResult<'_, f64> {
    preceded(
        tuple((multispace0, opt(char(',')), multispace0)),
        map_res(double, |v: f64| {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(TransformError::Parse(format!("non-finite number {}", v)))
            }
        }),
    )(input)
}

fn vector3(input: &str) -> PResult<'_, Vector3<f64>> {
    map(tuple((number, number, number)), |(x, y, z)| Vector3::new(x, y, z))(input)
}

fn axis(input: &str) -> PResult<'_, Axis> {
    preceded(multispace0, map_res(alpha1, |s: &str| s.parse::<Axis>()))(input)
}

/// Run of axis letters such as `xz`
fn axes(input: &str) -> PResult<'_, Vec<Axis>> {
    preceded(
        multispace0,
        map_res(alpha1, |s: &str| {
            s.chars()
                .map(|c| c.to_string().parse::<Axis>())
                .collect::<Result<Vec<_>>>()
        }),
    )(input)
}

fn translate(input: &str) -> PResult<'_, Op> {
    map(preceded(keyword("translate"), cut(vector3)), Op::Translate)(input)
}

fn rotate(input: &str) -> PResult<'_, Op> {
    map(
        preceded(keyword("rotate"), cut(tuple((axis, number)))),
        |(axis, degrees)| Op::Rotate { axis, degrees },
    )(input)
}

fn scale(input: &str) -> PResult<'_, Op> {
    map(preceded(keyword("scale"), cut(vector3)), Op::Scale)(input)
}

fn shear(input: &str) -> PResult<'_, Op> {
    map(
        preceded(keyword("shear"), cut(tuple((number, axis, axes)))),
        |(factor, source, targets)| Op::Shear {
            factor,
            source,
            targets,
        },
    )(input)
}

fn taper(input: &str) -> PResult<'_, Op> {
    map(
        preceded(keyword("taper"), cut(tuple((number, axis, axis)))),
        |(factor, from, to)| Op::Taper { factor, from, to },
    )(input)
}

fn reflect(input: &str) -> PResult<'_, Op> {
    map(
        preceded(keyword("reflect"), cut(tuple((number, number)))),
        |(slope, intercept)| Op::Reflect { slope, intercept },
    )(input)
}

fn stretch(input: &str) -> PResult<'_, Op> {
    map(
        preceded(keyword("stretch"), cut(tuple((number, number)))),
        |(degrees, factor)| Op::Stretch { degrees, factor },
    )(input)
}

fn look_at(input: &str) -> PResult<'_, Op> {
    map(
        preceded(keyword("lookat"), cut(tuple((vector3, vector3, vector3)))),
        |(eye, target, up)| Op::LookAt {
            eye: Point3::from(eye),
            target: Point3::from(target),
            up,
        },
    )(input)
}
