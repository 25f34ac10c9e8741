//! stepscad CLI - STEP to STL / OpenSCAD converter
//!
//! Loads a STEP file, meshes it and writes exactly one output format to
//! standard output. Diagnostics go to standard error.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use stepscad_export::{write_ascii_stl, write_scad_faces, write_scad_polyhedron};
use stepscad_kernel::{MeshSettings, MeshedModel, StepModel, DEFAULT_LINEAR_TOLERANCE};
use stepscad_tessellate::{tessellate_shape, FaceVector};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `STEPSCAD_LOG=debug`.
const LOG_ENV: &str = "STEPSCAD_LOG";

#[derive(Parser, Debug)]
#[command(name = "stepscad")]
#[command(version, about = "Convert STEP files to STL and OpenSCAD polyhedra")]
#[command(long_about = "Convert STEP files to STL and OpenSCAD polyhedra.\n\n\
    Output is written to STDOUT. Exactly one output format must be given.")]
#[command(group(
    ArgGroup::new("format")
        .required(true)
        .multiple(false)
        .args(["stl_occt", "stl_ascii", "stl_scad", "stl_faces", "explore"])
))]
struct Cli {
    /// Input STEP file
    input: PathBuf,

    /// Write ASCII STL using the geometry kernel's own writer. This is the
    /// baseline when troubleshooting incorrect outputs
    #[arg(short = 'o', long)]
    stl_occt: bool,

    /// Write ASCII STL from our own face walk. Normals are written as
    /// 0 0 0; vertex values match --stl-occt
    #[arg(short = 'a', long)]
    stl_ascii: bool,

    /// Write OpenSCAD code with a single polyhedron holding every triangle
    #[arg(short = 's', long)]
    stl_scad: bool,

    /// Write OpenSCAD code with one polyhedron per STEP face, each in a
    /// different color
    #[arg(short = 'f', long)]
    stl_faces: bool,

    /// Print the shell/face/surface/wire/edge/vertex hierarchy (debug aid,
    /// no useful output)
    #[arg(short = 'e', long)]
    explore: bool,

    /// Linear tolerance for meshing, in model units
    #[arg(
        short = 'L',
        long = "stl-lin-tol",
        value_name = "TOL",
        default_value_t = DEFAULT_LINEAR_TOLERANCE,
        value_parser = parse_tolerance,
        allow_negative_numbers = true
    )]
    linear_tolerance: f64,

    /// Log debug messages to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// The selected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Kernel STL writer.
    StlOcct,
    /// Custom ASCII STL.
    StlAscii,
    /// Single OpenSCAD polyhedron.
    StlScad,
    /// One colored OpenSCAD polyhedron per face.
    StlFaces,
    /// Topology trace.
    Explore,
}

impl Cli {
    /// The output format; the `format` group guarantees exactly one flag.
    fn format(&self) -> OutputFormat {
        if self.stl_occt {
            OutputFormat::StlOcct
        } else if self.stl_ascii {
            OutputFormat::StlAscii
        } else if self.stl_scad {
            OutputFormat::StlScad
        } else if self.stl_faces {
            OutputFormat::StlFaces
        } else {
            OutputFormat::Explore
        }
    }

    fn mesh_settings(&self) -> MeshSettings {
        MeshSettings::with_tolerance(self.linear_tolerance)
    }
}

fn parse_tolerance(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid tolerance value '{s}'"))?;
    MeshSettings::with_tolerance(value)
        .validate()
        .map_err(|_| format!("invalid tolerance value '{s}' (must be a positive number)"))?;
    Ok(value)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing useful is left to report if stderr itself is gone.
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Exit status for an argument parsing outcome: help and version exit 0,
/// usage errors exit 1 instead of clap's 2.
fn usage_exit_code(e: &clap::Error) -> u8 {
    match e.exit_code() {
        0 => 0,
        _ => 1,
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let model = StepModel::open(&cli.input)
        .with_context(|| format!("failed to load STEP file '{}'", cli.input.display()))?;

    // Render fully before touching stdout so a failure leaves it empty.
    let output = render(cli.format(), &model, &cli.mesh_settings(), source_name(&cli.input))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

fn source_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

fn render(
    format: OutputFormat,
    model: &StepModel,
    settings: &MeshSettings,
    source: Option<&str>,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        OutputFormat::Explore => {
            for event in model.explore() {
                writeln!(out, "{event}")?;
            }
        }
        OutputFormat::StlOcct => {
            mesh(model, settings)?
                .write_stl(&mut out)
                .context("failed to write kernel STL")?;
        }
        OutputFormat::StlAscii => write_ascii_stl(&extract_faces(model, settings)?, &mut out)?,
        OutputFormat::StlScad => {
            write_scad_polyhedron(&extract_faces(model, settings)?, source, &mut out)?
        }
        OutputFormat::StlFaces => {
            write_scad_faces(&extract_faces(model, settings)?, source, &mut out)?
        }
    }
    Ok(out)
}

fn mesh(model: &StepModel, settings: &MeshSettings) -> Result<MeshedModel> {
    let meshed = model.mesh(settings)?;
    info!(
        shells = meshed.num_shells(),
        faces = meshed.num_faces(),
        meshed = meshed.num_meshed_faces(),
        tolerance = settings.linear_tolerance,
        "meshed input"
    );
    Ok(meshed)
}

fn extract_faces(model: &StepModel, settings: &MeshSettings) -> Result<FaceVector> {
    let faces = tessellate_shape(&mesh(model, settings)?);
    info!(
        faces = faces.len(),
        triangles = faces.num_triangles(),
        "extracted triangles"
    );
    Ok(faces)
}
