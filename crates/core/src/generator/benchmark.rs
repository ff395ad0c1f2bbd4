//! Benchmark test for generation performance.

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::generator::{DataGenerator, RngSource};

    #[test]
    fn benchmark_generate_dataset_one_year() {
        let generator = DataGenerator::new("2022-01-01", 365).unwrap();
        let mut source = RngSource::seeded(42);

        let start = Instant::now();
        let dataset = generator.generate_dataset(&mut source);
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 365 days ===");
        println!("Duration: {duration:?}");
        println!("Revenue rows: {}", dataset.revenue.len());
        println!("Cost rows: {}", dataset.costs.len());

        assert_eq!(dataset.costs.len(), 365 * 5);
        assert!(
            duration.as_millis() < 2000,
            "Generation took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_generate_metrics_ten_years() {
        let generator = DataGenerator::new("2015-01-01", 3653).unwrap();
        let mut source = RngSource::seeded(7);

        let start = Instant::now();
        let metrics = generator.generate_metrics(&mut source);
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 3653 days ===");
        println!("Duration: {duration:?}");
        println!("Metrics rows: {}", metrics.len());

        assert_eq!(metrics.len(), 3653);
        assert!(
            duration.as_millis() < 5000,
            "Generation took {}ms, expected <5000ms",
            duration.as_millis()
        );
    }
}
