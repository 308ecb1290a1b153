//! Text form of [`WindowSpec`]: `family(size[, param][, symmetric|periodic])`.
//!
//! ```
//! use kawari::window::{WindowFamily, WindowSpec, WindowSymmetry};
//!
//! let spec: WindowSpec = "kaiser(64, 6.5, periodic)".parse()?;
//! assert_eq!(spec.family(), WindowFamily::Kaiser);
//! assert_eq!(spec.shape_param(), Some(6.5));
//! assert_eq!(spec.symmetry(), WindowSymmetry::Periodic);
//! # Ok::<(), kawari::window::WindowError>(())
//! ```

use std::str::FromStr;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, value},
    number::complete::double,
    sequence::{delimited, preceded},
};

use super::{
    error::WindowError,
    family::{WindowFamily, WindowSpec, WindowSymmetry},
};

pub struct WindowSpecParser;

impl WindowSpecParser {
    fn family(i: &str) -> IResult<&str, WindowFamily> {
        map_res(
            take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
            |name: &str| name.parse::<WindowFamily>(),
        )
        .parse(i)
    }

    fn size(i: &str) -> IResult<&str, usize> {
        map_res(digit1, |digits: &str| digits.parse::<usize>()).parse(i)
    }

    fn symmetry(i: &str) -> IResult<&str, WindowSymmetry> {
        alt((
            value(WindowSymmetry::Symmetric, tag("symmetric")),
            value(WindowSymmetry::Periodic, tag("periodic")),
        ))
        .parse(i)
    }

    fn separator(i: &str) -> IResult<&str, char> {
        delimited(multispace0, char(','), multispace0).parse(i)
    }

    /// Parses one spec, leaving whatever follows the closing parenthesis.
    pub fn parse_spec(
        i: &str,
    ) -> IResult<&str, (WindowFamily, usize, Option<f64>, WindowSymmetry)> {
        let (i, family) = preceded(multispace0, Self::family).parse(i)?;
        let (i, _) = delimited(multispace0, char('('), multispace0).parse(i)?;
        let (i, size) = Self::size(i)?;
        let (i, param) = opt(preceded(Self::separator, double)).parse(i)?;
        let (i, symmetry) = opt(preceded(Self::separator, Self::symmetry)).parse(i)?;
        let (i, _) = delimited(multispace0, char(')'), multispace0).parse(i)?;
        Ok((i, (family, size, param, symmetry.unwrap_or_default())))
    }
}

impl FromStr for WindowSpec {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (family, size, param, symmetry)) = all_consuming(WindowSpecParser::parse_spec)
            .parse(s)
            .map_err(|e| WindowError::Parse(e.to_string()))?;
        let spec = WindowSpec::new(family, size).with_symmetry(symmetry);
        match param {
            Some(param) => spec.with_shape_param(param),
            None => Ok(spec),
        }
    }
}
