use chumsky::prelude::*;
use chumsky::span::Span as _;
use glam::I64Vec3;

use crate::error::CircuitError;

/// A junction box position. Its index in the parsed list is its id.
pub type JunctionBox = I64Vec3;

fn coord<'a>() -> impl Parser<'a, &'a str, i64, extra::Err<Rich<'a, char>>> {
    just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("coordinate `{digits}` {e}")))
        })
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<JunctionBox>, extra::Err<Rich<'a, char>>> {
    let point = coord()
        .then_ignore(just(','))
        .then(coord())
        .then_ignore(just(','))
        .then(coord())
        .map(|((x, y), z)| JunctionBox::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
        .padded()
}

/// Parses one `x,y,z` triple per line. The first failure is reported with a
/// label pointing into `input`.
pub fn parse(input: &str) -> Result<Vec<JunctionBox>, CircuitError> {
    parser().parse(input).into_result().map_err(|errors| {
        let (reason, span) = match errors.first() {
            Some(error) => {
                let span = error.span();
                (error.to_string(), (span.start(), span.end() - span.start()))
            }
            None => ("unknown parse failure".to_string(), (0, 0)),
        };
        CircuitError::Parse {
            reason,
            input: input.to_string(),
            span: span.into(),
        }
    })
}
