//! Command line configuration shared by the `coloring` and `cycles` binaries.

use std::error;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use clap::{Arg, ArgMatches, Command};
use log::{info, warn};
use crate::adjacency::{BitRelation, DenseRelation};
use crate::coloring_model::build_model_with;
use crate::cycle_model::build_cycle_model;
use crate::glpsol::{run_glpsol, SolverReport};
use crate::graph_input::{GraphInput, GraphKind};

/// Storage used for the complement relation of the coloring model.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Storage {
    Dense,
    Bits,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ModelKind {
    Coloring(Storage),
    Cycles,
}

impl ModelKind {

    pub fn graph_kind(&self) -> GraphKind {
        match self {
            ModelKind::Coloring(_) => GraphKind::Undirected,
            ModelKind::Cycles => GraphKind::WeightedDigraph,
        }
    }

    /// Generates the model of `input`.
    pub fn generate(&self, input: &GraphInput) -> Result<String, Box<dyn error::Error>> {
        let n = input.node_count();
        let model = match self {
            ModelKind::Coloring(Storage::Dense) => build_model_with::<DenseRelation, _>(n, input.edge_lines.as_slice())?,
            ModelKind::Coloring(Storage::Bits) => build_model_with::<BitRelation, _>(n, input.edge_lines.as_slice())?,
            ModelKind::Cycles => build_cycle_model(input.edge_lines.as_slice())?,
        };
        Ok(model)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RunConfig {
    pub kind: ModelKind,
    /// Graph file, or `None` to read stdin.
    pub input: Option<PathBuf>,
    /// Where the model is written unless it is printed to stdout.
    pub output: PathBuf,
    pub solve: bool,
    pub glpsol: String,
    /// Directory whose `*.txt` graphs are all generated and solved.
    pub batch: Option<PathBuf>,
}

/// Returns the argument parser of a binary named `name`.
pub fn command(name: &'static str, about: &'static str, with_storage: bool) -> Command<'static> {
    let mut cmd = Command::new(name)
        .about(about)
        .arg(Arg::new("input")
             .takes_value(true)
             .help("Graph file, stdin if omitted"))
        .arg(Arg::new("output")
             .takes_value(true)
             .short('o')
             .long("output")
             .default_value("lp.txt"))
        .arg(Arg::new("solve")
             .long("solve")
             .help("Run glpsol on the written model"))
        .arg(Arg::new("glpsol")
             .takes_value(true)
             .long("glpsol")
             .env("GLPSOL")
             .default_value("glpsol"))
        .arg(Arg::new("batch")
             .takes_value(true)
             .long("batch")
             .conflicts_with("input")
             .help("Generate and solve every *.txt graph in this directory"));
    if with_storage {
        cmd = cmd.arg(Arg::new("storage")
                      .takes_value(true)
                      .long("storage")
                      .possible_values(["dense", "bits"])
                      .default_value("dense"));
    }
    cmd
}

impl RunConfig {

    /// Builds the configuration from parsed arguments. `kind` decides the model, its storage is
    /// overridden by `--storage`, which only the coloring command defines.
    pub fn from_matches(kind: ModelKind, m: &ArgMatches) -> Self {
        let kind = match kind {
            ModelKind::Coloring(storage) => match m.value_of("storage") {
                Some("bits") => ModelKind::Coloring(Storage::Bits),
                Some("dense") => ModelKind::Coloring(Storage::Dense),
                _ => ModelKind::Coloring(storage),
            },
            ModelKind::Cycles => ModelKind::Cycles,
        };
        RunConfig {
            kind,
            input: m.value_of("input").map(PathBuf::from),
            output: PathBuf::from(m.value_of("output").unwrap_or("lp.txt")),
            solve: m.is_present("solve"),
            glpsol: m.value_of("glpsol").unwrap_or("glpsol").to_owned(),
            batch: m.value_of("batch").map(PathBuf::from),
        }
    }

    /// Reads the graph stored in `path`.
    pub fn read_file(&self, path: &Path) -> Result<GraphInput, Box<dyn error::Error>> {
        let file = File::open(path)?;
        Ok(GraphInput::read(BufReader::new(file), self.kind.graph_kind())?)
    }

    /// Writes `model` to `self.output` and solves it if requested.
    fn write_and_solve(&self, model: &str) -> Result<Option<SolverReport>, Box<dyn error::Error>> {
        fs::write(&self.output, model)?;
        info!("Model written to {}", self.output.display());
        if self.solve {
            return Ok(Some(run_glpsol(&self.glpsol, &self.output)?));
        }
        Ok(None)
    }

    /// Executes the run described by `self`.
    pub fn run(&self) -> Result<(), Box<dyn error::Error>> {
        if let Some(dir) = &self.batch {
            return self.run_batch(dir);
        }
        let input = match &self.input {
            Some(path) => self.read_file(path)?,
            None => {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                GraphInput::read(stdin, self.kind.graph_kind())?
            },
        };
        let model = self.kind.generate(&input)?;
        if self.input.is_none() && !self.solve {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            writeln!(stdout, "{}", model)?;
            return Ok(())
        }
        if let Some(report) = self.write_and_solve(&model)? {
            print_report(&report)?;
        }
        Ok(())
    }

    /// Generates and solves every `*.txt` graph in `dir`, then prints a summary.
    fn run_batch(&self, dir: &Path) -> Result<(), Box<dyn error::Error>> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
            .collect();
        files.sort();
        let solving = RunConfig { solve: true, ..self.clone() };
        let mut summary = Vec::new();
        for file in files {
            println!("Testing: {}", file.display());
            let res = solving
                .read_file(&file)
                .and_then(|input| solving.kind.generate(&input))
                .and_then(|model| solving.write_and_solve(&model));
            match res {
                Ok(Some(report)) => {
                    print_report(&report)?;
                    if let Some(headline) = report.headline() {
                        summary.push(format!("{}\n{}\n{}", file.display(), headline, report.elapsed_str()));
                    }
                },
                Ok(None) => (),
                Err(e) => warn!("Skipping {}: {}", file.display(), e),
            }
        }
        for entry in summary {
            println!("{}", entry);
        }
        Ok(())
    }
}

fn print_report(report: &SolverReport) -> Result<(), io::Error> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "My time : {}", report.elapsed_str())?;
    if let Some(time_used) = &report.time_used {
        writeln!(stdout, "{}", time_used)?;
    }
    for line in &report.output {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}
