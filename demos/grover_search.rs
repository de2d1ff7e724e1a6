//! Example: amplitude-amplified search for one character in a lowercase
//! alphabet. The classical collaborator supplies only a match predicate;
//! here it is a direct character comparison standing in for a hash check.

use quamp::grover::{self, IterationSchedule};
use rand::rngs::StdRng;
use rand::SeedableRng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Amplitude-amplified alphabet search ---");

    let target = b'q';
    let target_index = ALPHABET.iter().position(|&c| c == target).unwrap() as u64;
    println!("Target character: '{}' (candidate index {})", target as char, target_index);

    // 26 candidates fit in the labels of a 5-qubit register (2^5 = 32).
    let num_qubits = 5;
    let schedule = IterationSchedule::SquareRoot;
    println!(
        "Register: {} qubits, schedule gives {} iterations",
        num_qubits,
        schedule.iterations(num_qubits)
    );

    let simulator = grover::search(num_qubits, |label| label == target_index, schedule)?;

    let mut rng = StdRng::seed_from_u64(2024);
    let histogram = simulator.sample(&mut rng, 1024)?;
    println!("\n{}", histogram);

    let (top_label, top_count) = histogram.most_frequent().expect("shots were recorded");
    let found = ALPHABET.get(top_label as usize).map(|&c| c as char);
    println!(
        "Most frequent label: {} ({:?}) with {} of 1024 shots",
        top_label, found, top_count
    );
    assert_eq!(top_label, target_index, "search should land on the target candidate");

    // The amplitude-flip strategy: one qubit per candidate, per-qubit
    // marking, halved-exponent iteration count. Shown on a 4-candidate
    // alphabet; its distribution is not the textbook one.
    println!("\n--- Per-qubit marking strategy (4 candidates) ---");
    let small = grover::search_bit_flip(4, |i| i == 2, IterationSchedule::FourthRoot)?;
    let mut rng = StdRng::seed_from_u64(2024);
    println!("{}", small.sample(&mut rng, 256)?);

    Ok(())
}
