// Opaque accumulator: add 10, 20, 30 and print the sum.

use netreport::accumulator::DataProcessor;
use netreport::{telemetry, version};

fn main() {
    telemetry::init();
    tracing::info!("{}", version::banner());

    let mut processor = DataProcessor::new();
    processor.add_number(10);
    processor.add_number(20);
    processor.add_number(30);
    println!("{}", processor.sum());
    tracing::info!(count = processor.len(), sum = processor.sum(), "done");
}
