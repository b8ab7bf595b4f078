use fast_discrete::DiscreteDistribution;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn show(weights: &[f64], draws: usize) {
    println!("weights: {weights:?}");
    let dist = match DiscreteDistribution::new(weights) {
        Ok(dist) => dist,
        Err(err) => {
            println!("  rejected: {err}\n");
            return;
        }
    };
    print!("{}", dist.table());

    let mut rng = StdRng::seed_from_u64(0);
    match dist.histogram(&mut rng, draws) {
        Ok(counts) => {
            println!("counts:");
            for (i, (&c, w)) in counts.iter().zip(weights).enumerate() {
                println!("{i} ({w}) : {}", "*".repeat(c));
            }
        }
        Err(err) => println!("  {err}"),
    }
    println!();
}

fn main() {
    show(&[], 100);
    show(&[0.0], 100);
    show(&[1.0], 100);
    show(&[1.0, 1.0], 200);
    show(&[1.0, 1.0, 1.0], 300);
    show(&[1.0, 1.0, 2.0], 300);
    show(&[1.0, 0.0, 2.0], 300);
    show(&[20.0, 10.0, 30.0], 300);
    show(&[0.0, 1e-20, 0.0], 100);
    show(&[1.0 - 1e-10, 1.0 - 1e-10, 1.0 - 1e-10], 100);
}
