use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skycat::{
    catalog::{populate, GenerateParams},
    cli::{Cli, Commands},
    estimator::StellarPopulation,
    schema::{table_names, DISTANCES, OBJECTS},
    store::CatalogStore,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate {
            output_db,
            count,
            seed,
            ra_min,
            ra_max,
            dec_min,
            dec_max,
            distance_min,
            distance_max,
        } => {
            let start = Instant::now();

            let params = GenerateParams {
                count,
                ra_range: (ra_min, ra_max),
                dec_range: (dec_min, dec_max),
                distance_range: (distance_min, distance_max),
            };
            let mut rng = seeded_rng(seed);

            let mut store = CatalogStore::create(&output_db)?;
            let summary = populate(&mut store, &params, &mut rng)?;

            let elapsed = start.elapsed();
            println!(
                "\nCreated {:?} ({} objects, {} distances) in {:.1}s",
                output_db,
                summary.objects,
                summary.distances,
                elapsed.as_secs_f64()
            );
        }

        Commands::Query { db, object_id } => {
            let store = CatalogStore::open(&db)?;

            println!(
                "{}: {} rows, {}: {} rows",
                OBJECTS.name,
                store.table_count(&OBJECTS)?,
                DISTANCES.name,
                store.table_count(&DISTANCES)?
            );

            match store.first_object()? {
                Some(object) => println!(
                    "First object: id={} ra={:.4} dec={:.4}",
                    object.id, object.ra, object.dec
                ),
                None => println!("No objects in {:?}", db),
            }

            let values = store.distance_values()?;
            if values.is_empty() {
                println!("No distance records");
            } else {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                println!("{} distance records, mean {:.4}", values.len(), mean);
            }

            if let Some(object_id) = object_id {
                match store.distance_for_object(object_id)? {
                    Some(record) => println!(
                        "Distance for object {}: id={} distance={:.4}",
                        object_id, record.id, record.distance
                    ),
                    None => println!("No distance record for object {}", object_id),
                }
            }
        }

        Commands::Estimate {
            distance,
            count,
            rms_error,
            seed,
        } => {
            let mut rng = seeded_rng(seed);

            let mut population = StellarPopulation::new(distance);
            println!(
                "Generating {} observations (distance={}, rms_error={})...",
                count, distance, rms_error
            );
            population.generate(count, rms_error, &mut rng);

            let estimate = population.estimate();
            println!(
                "True distance {}, estimated mean {:.5} ({:.1}ms)",
                population.true_distance(),
                estimate.mean,
                estimate.elapsed_ms
            );
        }

        Commands::ListTables => {
            println!("Catalog tables:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
