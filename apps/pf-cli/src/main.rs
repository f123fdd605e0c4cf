use clap::{Parser, Subcommand};
use pf_core::units::{constants, gpm, inch, microinch};
use pf_friction::{MoodyDiagram, PipeFlow, estimate};
use pf_plot::{show_moody, show_trajectory};
use pf_sim::{PistonTrajectory, SimOptions, SpoolValveParams, simulate};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Pipeflow CLI - pipe friction and hydraulic valve analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the Moody diagram
    Moody,
    /// Interactively estimate a friction factor and mark it on the diagram
    Point,
    /// Simulate the spool-valve piston and plot the response
    Valve {
        /// End of the simulation window in seconds
        #[arg(long, default_value_t = pf_sim::DEFAULT_T_END)]
        t_end: f64,
        /// Number of evenly spaced sample times to report
        #[arg(long, default_value_t = pf_sim::DEFAULT_SAMPLES)]
        samples: usize,
        /// YAML file overriding the default valve parameters
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Write the sampled trajectory to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
        /// Skip the chart window
        #[arg(long)]
        no_plot: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Friction calculation failed: {0}")]
    Friction(#[from] pf_friction::FrictionError),

    #[error("Simulation failed: {0}")]
    Sim(#[from] pf_sim::SimError),

    #[error("Plot window failed: {0}")]
    Plot(#[from] pf_plot::PlotError),

    #[error("Not a number: {0:?}")]
    Parse(String),

    #[error("Failed to parse scenario file: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Moody => cmd_moody(),
        Commands::Point => cmd_point(),
        Commands::Valve {
            t_end,
            samples,
            scenario,
            export,
            no_plot,
        } => cmd_valve(t_end, samples, scenario.as_deref(), export.as_deref(), no_plot),
    }
}

fn cmd_moody() -> CliResult<()> {
    let diagram = MoodyDiagram::build()?;
    show_moody(diagram, None)?;
    Ok(())
}

fn cmd_point() -> CliResult<()> {
    loop {
        let diameter = prompt_f64("Enter the pipe diameter in inches: ")?;
        let roughness = prompt_f64("Enter the pipe roughness in micro-inches: ")?;
        let flow = prompt_f64("Enter the flow rate in gallons per minute: ")?;

        let pipe = PipeFlow::new(
            inch(diameter),
            microinch(roughness),
            gpm(flow),
            constants::nu_water_60f(),
        );

        let re = pipe.reynolds()?;
        let rr = pipe.rel_roughness()?;
        let point = estimate(re, rr, &mut rand::rng())?;
        let hf_per_l = pipe.head_loss_per_length(point.friction)?;

        println!("Reynolds number (Re): {re:.2}");
        println!("Relative roughness (eps/D): {rr:.6}");
        println!("Friction factor (f): {:.4}", point.friction);
        println!("Head loss per unit length (hf/L): {hf_per_l:.6}");

        let diagram = MoodyDiagram::build()?;
        show_moody(diagram, Some(point.into()))?;

        let again = prompt_line("Do you want to re-specify parameters? (yes/no): ")?;
        if !again.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }
    Ok(())
}

fn cmd_valve(
    t_end: f64,
    samples: usize,
    scenario: Option<&Path>,
    export: Option<&Path>,
    no_plot: bool,
) -> CliResult<()> {
    let params: SpoolValveParams = match scenario {
        Some(path) => {
            println!("Loading scenario: {}", path.display());
            serde_yaml::from_str(&std::fs::read_to_string(path)?)?
        }
        None => SpoolValveParams::default(),
    };

    println!("Running valve simulation: t_end = {t_end:.4} s, {samples} samples");
    tracing::debug!(?params, "valve parameters");

    let opts = SimOptions {
        t_end,
        ..Default::default()
    };
    let traj = simulate(params, &opts, samples)?;

    println!("✓ Simulation completed");
    println!("  Samples: {}", traj.len());
    if let (Some(&v), Some(&p1), Some(&p2)) = (
        traj.velocity.last(),
        traj.p_head.last(),
        traj.p_rod.last(),
    ) {
        println!("  Final velocity: {v:.4} m/s");
        println!("  Final pressures: head {p1:.4e} Pa, rod {p2:.4e} Pa");
    }

    if let Some(path) = export {
        export_csv(path, &traj)?;
        println!("✓ Exported series to {}", path.display());
    }

    if !no_plot {
        show_trajectory(traj)?;
    }
    Ok(())
}

fn export_csv(path: &Path, traj: &PistonTrajectory) -> CliResult<()> {
    let mut out = std::fs::File::create(path)?;
    writeln!(out, "t,position,velocity,p_head,p_rod")?;
    for i in 0..traj.len() {
        writeln!(
            out,
            "{},{},{},{},{}",
            traj.t[i], traj.position[i], traj.velocity[i], traj.p_head[i], traj.p_rod[i]
        )?;
    }
    Ok(())
}

fn prompt_line(msg: &str) -> CliResult<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn prompt_f64(msg: &str) -> CliResult<f64> {
    let line = prompt_line(msg)?;
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CliError::Parse(trimmed.to_string()))
}
