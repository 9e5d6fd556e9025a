use stress_test::{stress_test_scaling, stress_test_traversals, StressConfigBuilder, StressError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kaleido=info,kaleido_core=warn")),
        )
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = rt.block_on(async_main()) {
        eprintln!("\n✗ Stress run failed: {err}");
        std::process::exit(1);
    }
}

async fn async_main() -> Result<(), StressError> {
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            ASYNC TRAVERSAL STRESS TESTS                    ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Test 1: small collection, few readers
    let config = StressConfigBuilder::new()
        .readers(4)
        .initial_elements(100)
        .traversals_per_reader(200)
        .writer_ops(400)
        .build();
    stress_test_traversals(&config).await?.print();

    // Test 2: large collection, removal-heavy writer
    let config = StressConfigBuilder::new()
        .readers(10)
        .initial_elements(10_000)
        .traversals_per_reader(100)
        .writer_ops(5_000)
        .remove_ratio(0.6)
        .build();
    stress_test_traversals(&config).await?.print();

    // Test 3: scaling analysis
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS                                  ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    stress_test_scaling(16, 4).await?;

    println!("\n✓ All stress tests completed successfully!");
    Ok(())
}
