use crate::config::LARGEST_CIRCUITS;
use crate::dsu::Dsu;
use crate::error::CircuitError;

/// Circuit sizes, largest first.
pub fn circuit_sizes(dsu: &mut Dsu) -> Vec<usize> {
    let mut sizes: Vec<usize> = dsu.component_sizes().into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Product of the sizes of the three largest circuits.
pub fn largest_circuits_product(dsu: &mut Dsu) -> Result<u64, CircuitError> {
    let sizes = circuit_sizes(dsu);
    if sizes.len() < LARGEST_CIRCUITS {
        return Err(CircuitError::TooFewCircuits { found: sizes.len() });
    }

    Ok(sizes
        .iter()
        .take(LARGEST_CIRCUITS)
        .map(|&size| size as u64)
        .product())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_three_largest() -> miette::Result<()> {
        let mut dsu = Dsu::new(10);
        // {0,1,2,3} {4,5,6} {7,8} {9}
        for (i, j) in [(0, 1), (1, 2), (2, 3), (4, 5), (5, 6), (7, 8)] {
            dsu.union(i, j);
        }
        assert_eq!(circuit_sizes(&mut dsu), [4, 3, 2, 1]);
        assert_eq!(largest_circuits_product(&mut dsu)?, 24);
        Ok(())
    }

    #[test]
    fn singletons_multiply_to_one() -> miette::Result<()> {
        assert_eq!(largest_circuits_product(&mut Dsu::new(3))?, 1);
        Ok(())
    }

    #[test]
    fn fewer_than_three_circuits_fails() {
        let mut dsu = Dsu::new(3);
        dsu.union(0, 1);
        let err = largest_circuits_product(&mut dsu).unwrap_err();
        assert!(matches!(err, CircuitError::TooFewCircuits { found: 2 }));
    }
}
