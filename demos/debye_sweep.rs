use permittivity::prelude::*;

fn main() -> Result<(), PermittivityError> {
    tracing_subscriber::fmt::init();

    // Water near room temperature: single Debye relaxation around 17 GHz.
    let water = DebyeModel::new(80.1, 4.9, 9.4e-12)?;
    // Same relaxation broadened and skewed, plus a little ionic conduction.
    let saline = MultiPoleDebyeModel::new(4.9, 0.5, [DebyePole::new(75.2, 9.4e-12)?])?;
    let broadened = HavriliakNegamiModel::new(80.1, 4.9, 9.4e-12, 0.9, 0.8)?;

    let omegas = angular_freq_logspace(1.0e6, 1.0e12, 13);
    let pure = permittivity_sweep(&water, omegas.iter().copied())?;
    let salty = saline.sweep(&omegas)?;
    let hn = broadened.sweep(&omegas)?;

    println!("f(Hz), eps_water, eps_saline, eps_hn, tan_delta_water");
    for ((point, s), h) in pure.iter().zip(&salty).zip(&hn) {
        let props = MaterialProperties::from_relative_permittivity(point.permittivity, point.omega);
        println!(
            "{:.3e}, {:.3}{:+.3}j, {:.3}{:+.3}j, {:.3}{:+.3}j, {:.4}",
            linear_frequency(point.omega),
            point.permittivity.re,
            point.permittivity.im,
            s.re,
            s.im,
            h.re,
            h.im,
            props.loss_tangent()
        );
    }

    // A conductor has no finite permittivity at DC.
    let copper = DielectricModel::new(1.0, 5.8e7)?;
    if let Err(err) = copper.permittivity(0.0) {
        println!("copper at DC: {err}");
    }
    Ok(())
}
