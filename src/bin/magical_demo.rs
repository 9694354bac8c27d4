//! Demo driver for the magical container.
//!
//! Inserts the integers given on the command line (or a fixed sample when
//! none are given) and logs the three traversal orders.
//!
//! ```text
//! RUST_LOG=debug cargo run --features demo --bin magical_demo -- 17 2 25 9 3
//! ```

use std::error::Error;

use magical_container::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE: [i32; 7] = [17, 2, 25, 9, 3, 4, 12];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arguments = std::env::args()
        .skip(1)
        .map(|argument| argument.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()?;
    let values = if arguments.is_empty() {
        SAMPLE.to_vec()
    } else {
        arguments
    };

    let mut container = MagicalContainer::new();
    container.extend(values.iter().copied());
    tracing::info!(size = container.size(), "container filled");

    tracing::info!(order = ?container.iterate_ascending().collect::<Vec<_>>(), "ascending");
    tracing::info!(order = ?container.iterate_side_cross().collect::<Vec<_>>(), "side-cross");
    tracing::info!(order = ?container.iterate_primes().collect::<Vec<_>>(), "primes");

    if let Some(&first) = values.first() {
        container.remove(first)?;
        tracing::info!(removed = first, size = container.size(), "removed first input");
    }
    if let Err(error) = container.remove(i32::MIN) {
        tracing::info!(%error, "removing an absent value is reported");
    }

    let ascending = container.iterate_ascending();
    let side_cross = container.iterate_side_cross();
    if let Err(error) = ascending.try_eq(&side_cross) {
        tracing::info!(%error, "comparing different kinds is reported");
    }

    Ok(())
}
