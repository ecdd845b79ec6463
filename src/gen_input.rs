use std::{error::Error, path::Path};

use rand::{rngs::StdRng, SeedableRng};
use route_planner::{gen::RandomRecordGenerator, held_karp::MAX_LOCATIONS, record::Record};

pub fn generate_records(num_locations: usize, density: f64, seed: Option<u64>) -> Vec<Record> {
    let records = match seed {
        Some(seed) => {
            RandomRecordGenerator::with_rng(num_locations, density, StdRng::seed_from_u64(seed))
                .next()
        }
        None => RandomRecordGenerator::default_costs(num_locations, density).next(),
    };
    records.unwrap_or_default()
}

pub fn execute_gen(
    num_locations: usize,
    density: f64,
    seed: Option<u64>,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    if num_locations < 2 {
        return Err("at least two locations are needed to list a distance".into());
    }
    if num_locations > MAX_LOCATIONS {
        return Err(format!(
            "{} locations exceed the {} the solver accepts",
            num_locations, MAX_LOCATIONS
        )
        .into());
    }
    let records = generate_records(num_locations, density, seed);
    crate::records_io::export_records(output, &records)?;
    println!(
        "Wrote {} connections between {} locations to {:?}.",
        records.len(),
        num_locations,
        output
    );
    Ok(())
}

#[cfg(test)]
mod test_gen_input {
    use super::*;
    use route_planner::RouteMap;

    #[test]
    fn test_generate_records() {
        let records = generate_records(5, 1.0, Some(11));
        assert_eq!(records.len(), 10);
        assert_eq!(records, generate_records(5, 1.0, Some(11)));
        assert_eq!(RouteMap::from_records(&records).len(), 5);
    }

    #[test]
    fn test_gen_needs_two_locations() {
        assert!(execute_gen(1, 1.0, None, Path::new("unused.data")).is_err());
    }

    #[test]
    fn test_gen_rejects_unsolvable_sizes() {
        let err = execute_gen(MAX_LOCATIONS + 1, 1.0, Some(1), Path::new("unused.data"))
            .unwrap_err();
        assert!(err.to_string().contains("exceed"));
        assert!(execute_gen(MAX_LOCATIONS + 5, 0.5, None, Path::new("unused.data")).is_err());
    }
}
