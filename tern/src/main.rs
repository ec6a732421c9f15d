// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

use tern::{
    arch::Word,
    samples::{output, SAMPLES},
    VMError,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Error)]
enum SampleError {
    #[error("`{name}` failed: {source}")]
    Run {
        name: &'static str,
        #[source]
        source: VMError,
    },
    #[error("`{name}` produced {actual}, expected {expected}")]
    Mismatch {
        name: &'static str,
        expected: Word,
        actual: Word,
    },
}

fn main() -> Result<(), SampleError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    for sample in &SAMPLES {
        let memory = sample.run().map_err(|source| SampleError::Run {
            name: sample.name,
            source,
        })?;
        let actual = output(&memory);
        info!(name = sample.name, ?memory, output = actual, "ran sample");

        if actual != sample.expected_output {
            return Err(SampleError::Mismatch {
                name: sample.name,
                expected: sample.expected_output,
                actual,
            });
        }
    }

    Ok(())
}
