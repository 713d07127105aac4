use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use projectile_engine::{
    LinePlot, SimulationParams, TrajectoryResult, TrajectorySolver, TrajectorySummary,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(author = "Projectile Engine Team")]
#[command(version = "0.1.0")]
#[command(about = "2D projectile trajectory simulator with quadratic air resistance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single trajectory
    Trajectory {
        /// Initial horizontal velocity (m/s) [default: 10]
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        velocity_x: Option<f64>,

        /// Initial vertical velocity (m/s) [default: 10]
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        velocity_y: Option<f64>,

        /// Air resistance coefficient k in F = -k·v² [default: 0]
        #[arg(short = 'k', long)]
        drag: Option<f64>,

        /// Mass (kg) [default: 1]
        #[arg(short = 'm', long)]
        mass: Option<f64>,

        /// Gravity (m/s², negative) [default: -9.81]
        #[arg(long, allow_negative_numbers = true)]
        gravity: Option<f64>,

        /// Time step (seconds) [default: 0.1]
        #[arg(long)]
        time_step: Option<f64>,

        /// YAML scenario file; command-line flags override its values
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (show all trajectory points)
        #[arg(long)]
        full: bool,
    },

    /// Display model information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
    /// Text rendering of the X/Y path
    Plot,
    /// Plot description (title, labels, data) as JSON
    PlotJson,
}

#[derive(Debug, Serialize)]
struct TrajectoryPoint {
    time: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    params: &'a SimulationParams,
    summary: TrajectorySummary,
    trajectory: Vec<TrajectoryPoint>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Trajectory {
            velocity_x, velocity_y, drag, mass, gravity,
            time_step, config, output, full
        } => {
            let mut params = match config {
                Some(path) => {
                    eprintln!("Loading scenario from {}", path.display());
                    SimulationParams::from_yaml_file(&path)?
                }
                None => SimulationParams::default(),
            };

            if let Some(v) = velocity_x { params.initial_velocity_x = v; }
            if let Some(v) = velocity_y { params.initial_velocity_y = v; }
            if let Some(k) = drag { params.physics.drag_coefficient = k; }
            if let Some(m) = mass { params.physics.mass = m; }
            if let Some(g) = gravity { params.physics.gravity = g; }
            if let Some(dt) = time_step { params.time_step = dt; }

            let solver = TrajectorySolver::new(params);
            let result = solver.solve()?;

            if result.record.is_empty() {
                eprintln!(
                    "Warning: initial vertical velocity {} m/s never leaves the ground; no samples recorded.",
                    params.initial_velocity_y
                );
            }

            display_results(&params, &result, output, full)?;
        },

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      PROJECTILE ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ 2D projectile launched from the origin ║");
            println!("║ until it returns to the ground.        ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Model:                                 ║");
            println!("║ • Gravity (default -9.81 m/s²)         ║");
            println!("║ • Quadratic drag F = -sign(v)·k·v²     ║");
            println!("║ • Fixed-step integration (dt = 0.1 s)  ║");
            println!("║ • Table, JSON, CSV and plot output     ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_results(
    params: &SimulationParams,
    result: &TrajectoryResult,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    let summary = &result.summary;

    match format {
        OutputFormat::Json => {
            let json = JsonResult {
                params,
                summary: *summary,
                trajectory: result.record.iter().map(|s| TrajectoryPoint {
                    time: s.time,
                    x: s.position.x,
                    y: s.position.y,
                    vx: s.velocity.x,
                    vy: s.velocity.y,
                }).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        },

        OutputFormat::Csv => {
            println!("time,x,y,vx,vy");
            for s in result.record.iter() {
                println!("{:.3},{:.4},{:.4},{:.4},{:.4}",
                    s.time, s.position.x, s.position.y, s.velocity.x, s.velocity.y);
            }
        },

        OutputFormat::Plot => {
            print!("{}", LinePlot::from_record(&result.record).render_ascii(60, 20));
        },

        OutputFormat::PlotJson => {
            println!("{}", serde_json::to_string_pretty(&LinePlot::from_record(&result.record))?);
        },

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         TRAJECTORY RESULTS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Range:             {:>8.2} m          ║", summary.range);
            println!("║ Max Height:        {:>8.2} m          ║", summary.max_height);
            println!("║ Apex Time:         {:>8.3} s          ║", summary.apex_time);
            println!("║ Time of Flight:    {:>8.3} s          ║", summary.flight_time);
            println!("║ Final Speed:       {:>8.2} m/s        ║", summary.final_velocity);
            println!("║ Samples:           {:>8}            ║", summary.sample_count);
            println!("╚════════════════════════════════════════╝");

            if result.record.is_empty() {
                return Ok(());
            }

            let step = if full { 1 } else { (result.record.len() / 10).max(1) };
            if full {
                println!("\nFull Trajectory Points:");
            } else {
                println!("\nTrajectory Points (every {} samples):", step);
            }
            println!("┌──────────┬──────────┬──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │ Vx (m/s) │ Vy (m/s) │");
            println!("├──────────┼──────────┼──────────┼──────────┼──────────┤");

            let last = result.record.len() - 1;
            for (i, s) in result.record.iter().enumerate() {
                if i % step == 0 || i == last {
                    println!("│ {:>8.3} │ {:>8.2} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                        s.time, s.position.x, s.position.y, s.velocity.x, s.velocity.y);
                }
            }
            println!("└──────────┴──────────┴──────────┴──────────┴──────────┘");
        },
    }

    Ok(())
}
