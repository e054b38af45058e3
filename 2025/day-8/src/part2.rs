use miette::*;
use tracing::{debug, info};

use crate::dsu::Dsu;
use crate::error::CircuitError;
use crate::{parser, planner};

/// Keeps connecting closest pairs until every junction box shares one circuit,
/// then multiplies the X coordinates of the last pair joined.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let boxes = parser::parse(input)?;
    info!(boxes = boxes.len(), "parsed junction boxes");

    let mut dsu = Dsu::new(boxes.len());

    for (step, pair) in planner::sorted_pairs(&boxes).into_iter().enumerate() {
        if dsu.connected(pair.a, pair.b) {
            continue;
        }
        dsu.union(pair.a, pair.b);

        if dsu.size_of(pair.a) == dsu.len() {
            debug!(step, a = pair.a, b = pair.b, "single circuit formed");
            // Coordinates fit in i64, their product may not.
            let result = i128::from(boxes[pair.a].x) * i128::from(boxes[pair.b].x);
            return Ok(result.to_string());
        }
    }

    Err(CircuitError::NeverConnected.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

        assert_eq!("25272", process(input)?);
        Ok(())
    }

    #[test]
    fn last_link_joins_the_far_box() -> Result<()> {
        assert_eq!("30", process("2,0,0\n3,0,0\n10,0,0\n15,0,0")?);
        Ok(())
    }

    #[test]
    fn huge_coordinates_do_not_overflow() -> Result<()> {
        assert_eq!(
            "16000000004000000000",
            process("4000000000,0,0\n4000000001,0,0")?
        );
        Ok(())
    }

    #[test]
    fn redundant_pairs_are_skipped() -> Result<()> {
        // 0-1, 1-2 and 0-2 come first; 0-2 joins nothing new.
        assert_eq!("200", process("0,0,0\n1,0,0\n2,0,0\n100,0,0")?);
        Ok(())
    }

    #[rstest]
    #[case::empty("")]
    #[case::single_box("1,2,3")]
    fn needs_at_least_two_boxes(#[case] input: &str) {
        let err = process(input).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CircuitError>(),
            Some(CircuitError::NeverConnected)
        ));
    }
}
