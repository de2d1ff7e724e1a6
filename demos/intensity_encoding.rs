//! Example: encoding an averaged pixel intensity into a register.
//! The video collaborator reduces its frames to one scalar in [0, 255];
//! this demo takes that scalar, rotates every qubit by the derived angle,
//! and renders the resulting probabilities back to pixel values.

use quamp::circuits::encoding::{encode_intensity, intensity_rotation_angle};
use quamp::Simulator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Average-intensity encoding ---");

    let average_intensity = 128.0;
    let num_qubits = 4;

    let theta = intensity_rotation_angle(average_intensity)?;
    println!(
        "Average intensity {} maps to rotation angle θ = {:.4} rad",
        average_intensity, theta
    );

    let circuit = encode_intensity(num_qubits, average_intensity)?;
    println!("\n{}", circuit);

    let mut simulator = Simulator::new(num_qubits)?;
    simulator.apply(&circuit)?;

    println!("Basis-state probabilities as pixel values:");
    for (label, p) in simulator.probabilities().iter().enumerate() {
        let pixel = (p * 255.0) as u8;
        println!("  |{:0width$b}>  p = {:.4}  pixel {}", label, p, pixel, width = num_qubits);
    }

    // Each qubit independently measures |0> with probability v/255, so the
    // all-zero label carries (v/255)^n of the mass.
    let expected = (average_intensity / 255.0).powi(num_qubits as i32);
    assert!((simulator.probabilities()[0] - expected).abs() < 1e-9);

    Ok(())
}
