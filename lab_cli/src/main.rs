//! # MechLab Console Application
//!
//! Terminal front-end for the strength-of-materials virtual lab. Plays the
//! role any presentation layer plays for lab_core: collect bounded inputs,
//! call the pure calculation, render the result.

use std::io::{self, BufRead, Write};

use lab_core::calculations::beam::{self, BeamInput};
use lab_core::calculations::traction::{self, TractionInput};
use lab_core::materials;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("MechLab CLI - Strength-of-Materials Virtual Lab");
    println!("===============================================");
    println!();
    println!("  1. Simply-supported beam analyzer");
    println!("  2. Tensile-test simulator");
    println!();

    match prompt_usize("Select a tool [1]: ", 1) {
        2 => run_traction(),
        _ => run_beam(),
    }
}

fn run_beam() {
    println!();
    println!("Beam analyzer (single span, point load + uniform load)");
    println!();

    let length_m = prompt_f64("Beam length L (m) [10.0]: ", 10.0);
    let point_load_kn = prompt_f64("Point load P (kN, downward) [50.0]: ", 50.0);
    let point_position_m = prompt_f64("Position of P from left (m) [5.0]: ", 5.0);
    let udl_kn_m = prompt_f64("Distributed load w (kN/m, full span) [10.0]: ", 10.0);

    let input = BeamInput {
        label: "CLI-Demo".to_string(),
        length_m,
        point_load_kn,
        point_position_m,
        udl_kn_m,
    };

    match beam::calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  BEAM ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Span:  {:.1} m", input.length_m);
            println!(
                "  Loads: P = {:.1} kN at {:.1} m, w = {:.1} kN/m",
                input.point_load_kn, input.point_position_m, input.udl_kn_m
            );
            println!();
            println!("Reactions:");
            println!("  Ra = {:.2} kN", result.reaction_left_kn);
            println!("  Rb = {:.2} kN", result.reaction_right_kn);
            println!();
            println!("Envelope:");
            println!(
                "  |V|max = {:.2} kN at x = {:.2} m",
                result.max_shear_kn, result.max_shear_position_m
            );
            println!(
                "  M max  = {:.2} kN·m at x = {:.2} m",
                result.max_moment_knm, result.max_moment_position_m
            );
            println!();
            println!(
                "Diagrams: {} shear samples, {} moment samples over [0, L]",
                result.shear_diagram.len(),
                result.moment_diagram.len()
            );

            println!();
            println!("JSON Output (reactions and envelope for API use):");
            let summary = serde_json::json!({
                "reaction_left_kn": result.reaction_left_kn,
                "reaction_right_kn": result.reaction_right_kn,
                "max_shear_kn": result.max_shear_kn,
                "max_moment_knm": result.max_moment_knm,
            });
            if let Ok(json) = serde_json::to_string_pretty(&summary) {
                println!("{}", json);
            }
        }
        Err(e) => report_error(&e),
    }
}

fn run_traction() {
    println!();
    println!("Tensile-test simulator");
    println!();
    println!("Materials:");
    for (i, name) in materials::material_names().iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    println!();

    let names = materials::material_names();
    let choice = prompt_usize("Select a material [1]: ", 1).clamp(1, names.len());
    let name = names[choice - 1];

    // Safe: the name came from the catalog itself
    let mat = match materials::lookup(name) {
        Ok(mat) => mat,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    let max_percent = mat.fracture_strain * 100.0;
    let strain_percent = prompt_f64(
        &format!("Test progress, percent elongation 0-{:.0} [10.0]: ", max_percent),
        10.0,
    );

    let input = TractionInput {
        material_name: name.to_string(),
        strain_percent,
    };

    match traction::evaluate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  TENSILE TEST RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Material: {}", mat);
            println!(
                "  E = {:.0} MPa, Sy = {:.0} MPa, Su = {:.0} MPa, ef = {:.2}",
                mat.e_mpa, mat.sy_mpa, mat.su_mpa, mat.fracture_strain
            );
            println!();
            println!("State:");
            println!("  ε = {:.4}", result.strain);
            println!("  σ = {:.1} MPa", result.stress_mpa);
            println!();
            println!("Specimen:");
            println!("  Gauge length: {:.3}", result.geometry.length);
            println!(
                "  Half width (center): {:.3}",
                result.geometry.center_half_width()
            );
            if result.strain > mat.necking_onset_strain() {
                println!("  Necking: localized at mid-length");
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &lab_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
