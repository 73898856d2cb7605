use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{BoussinesqDensity, SpecificVolume, State, StiffenedDensity};
use crate::{density_boussinesq, density_stiffened, specific_volume_55, specific_volume_75};

/// Which polynomial fit to evaluate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Equation {
    /// 55-term in-situ density, Boussinesq decomposition (rho = r0 + r)
    Bsq,
    /// 55-term in-situ density, stiffened decomposition (rho = r1 * rdot)
    Stif,
    /// 55-term specific volume (v = v0 + delta)
    V55,
    /// 75-term specific volume (v = v0 + delta)
    V75,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "TEOS-10 polynomial equation of state — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(long, value_enum, default_value = "v75")]
    equation: Equation,
    #[arg(long, help = "Absolute Salinity [g/kg]")]
    sa: Option<f64>,
    #[arg(long, help = "Conservative Temperature [deg C]")]
    ct: Option<f64>,
    #[arg(long, help = "Sea pressure [dbar]")]
    p: Option<f64>,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON array of {sa, ct, p} states; '-' reads from stdin"
    )]
    input: Option<String>,
}

fn parse_states_doc(doc: &str) -> Result<Vec<State>, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseStatesJson { source })
}

pub fn parse_states(args: &Args) -> Result<Vec<State>, AppError> {
    match (args.sa, args.ct, args.p, &args.input) {
        (Some(sa), Some(ct), Some(p), _) => Ok(vec![State { sa, ct, p }]),
        (_, _, _, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_states_doc(&s)
        }
        (_, _, _, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_states_doc(&s)
        }
        _ => Err(AppError::MissingInputData),
    }
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Output {
    Density(BoussinesqDensity),
    Stiffened(StiffenedDensity),
    SpecVol(SpecificVolume),
}

fn evaluate(eq: Equation, s: &State) -> Output {
    match eq {
        Equation::Bsq => Output::Density(density_boussinesq(s.sa, s.ct, s.p)),
        Equation::Stif => Output::Stiffened(density_stiffened(s.sa, s.ct, s.p)),
        Equation::V55 => Output::SpecVol(specific_volume_55(s.sa, s.ct, s.p)),
        Equation::V75 => Output::SpecVol(specific_volume_75(s.sa, s.ct, s.p)),
    }
}

pub fn print_output(states: &[State], args: &Args) -> Result<(), AppError> {
    let outputs: Vec<Output> = states.iter().map(|s| evaluate(args.equation, s)).collect();

    if args.json {
        let s = serde_json::to_string_pretty(&outputs)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    for (state, out) in states.iter().zip(&outputs) {
        println!(
            "SA: {} g/kg, CT: {} degC, p: {} dbar",
            state.sa, state.ct, state.p
        );
        match out {
            Output::Density(d) => {
                println!("rho: {:.5} kg/m^3", d.rho);
                println!("a: {:.9} kg/m^3/K", d.a);
                println!("b: {:.9} kg/m^3/(g/kg)", d.b);
                println!("r0: {:.8} kg/m^3", d.r0);
                println!("r: {:.5} kg/m^3", d.r);
            }
            Output::Stiffened(d) => {
                println!("rho: {:.5} kg/m^3", d.rho);
                println!("a: {:.9} kg/m^3/K", d.a);
                println!("b: {:.9} kg/m^3/(g/kg)", d.b);
                println!("r1: {:.8}", d.r1);
                println!("rdot: {:.5} kg/m^3", d.rdot);
            }
            Output::SpecVol(sv) => {
                println!("specvol: {:.9e} m^3/kg", sv.v);
                println!("alpha: {:.9e} 1/K", sv.alpha);
                println!("beta: {:.9e} 1/(g/kg)", sv.beta);
                println!("v0: {:.9e} m^3/kg", sv.v0);
                println!("delta: {:.9e} m^3/kg", sv.delta);
            }
        }
    }

    Ok(())
}
