use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

use tsen::estimators::approaches::DispersionParams;
use tsen::estimators::entropy::Entropy;
use tsen::estimators::multiscale::MultiscaleConfig;
use tsen::estimators::traits::GlobalValue;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // White noise and a noisy sine of the same length
    let n = 2_000;
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let noise: Array1<f64> = Array1::from_iter((0..n).map(|_| normal.sample(&mut rng)));
    let sine: Array1<f64> = Array1::from_iter(
        (0..n).map(|i| (i as f64 * 0.05).sin() + 0.1 * normal.sample(&mut rng)),
    );

    let params = DispersionParams::new(2, 6, 1).with_normalize(true);
    let config = MultiscaleConfig::new(20);

    for (name, series) in [("noise", &noise), ("sine", &sine)] {
        let h = Entropy::new_fuzzy_dispersion(series.view(), 2, 6, 1)
            .expect("series long enough")
            .global_value();
        println!("{name}: fuzzy dispersion entropy = {h:.4}");

        let curve = Entropy::time_shift_curve_detailed(series.view(), params, config)
            .expect("valid input");
        println!("{name}: TSEn over {} scales", curve.max_scale());
        for (k, (value, std)) in curve.values().iter().zip(curve.std_devs().iter()).enumerate() {
            println!("  k = {:>2}  TSEn = {value:.4}  std = {std:.4}", k + 1);
        }
    }

    // Kmax larger than the series: clamped with a warning
    let short = Array1::from_iter((1..=8).map(|v| v as f64));
    let curve = Entropy::time_shift_curve(short.view(), 2, 3, 1, 20).expect("valid input");
    println!("short series curve: {curve:?}");
}
