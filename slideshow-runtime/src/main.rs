use anyhow::{anyhow, Context, Result};
use clap::{arg, Command};
use log::{error, info, warn};
use serde_json::{Map, Value};
use slideshow_algorithms::greedy::{Config, Solver};
use slideshow_challenges::{Instance, Solution, Track};
use slideshow_utils::{dejsonify, jsonify, parse_hyperparameters, round_seed, u8s_from_str};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

fn cli() -> Command {
    Command::new("slideshow-runtime")
        .about("Computes, verifies or generates slideshow solutions")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution for each instance")
                .arg(
                    arg!(<INSTANCE>... "Paths to instance files")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--solution [SOLUTION] "Base solutions, matched to instances by position")
                        .num_args(1..)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(-s --slides [SLIDES] "Sample size for slideshow ordering")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(-v --verticals [VERTICALS] "Sample size for vertical photo pairing")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value("0")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_DIR] "Directory the solutions are written to")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(arg!(--forever "Repeat the batch until interrupted"))
                .arg(arg!(--report "Print solution statistics as json")),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against its instance")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SOLUTION> "Path to a solution file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--score [SCORE] "Expected score (defaults to the one in the file name)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Generates a synthetic instance")
                .arg(
                    arg!(<TRACK> "Track json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value("0")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance is written to this path instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    init_logging();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m
                .get_many::<PathBuf>("INSTANCE")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            sub_m
                .get_many::<PathBuf>("solution")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            sub_m.get_one::<usize>("slides").cloned(),
            sub_m.get_one::<usize>("verticals").cloned(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<String>("seed").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").unwrap().clone(),
            sub_m.get_flag("forever"),
            sub_m.get_flag("report"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<PathBuf>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<PathBuf>("SOLUTION").unwrap().clone(),
            sub_m.get_one::<u64>("score").cloned(),
        ),
        Some(("generate_instance", sub_m)) => generate_instance(
            sub_m.get_one::<String>("TRACK").unwrap().clone(),
            sub_m.get_one::<String>("seed").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

pub fn compute_solution(
    instance_paths: Vec<PathBuf>,
    solution_paths: Vec<PathBuf>,
    sample_size_slides: Option<usize>,
    sample_size_vertical_photos: Option<usize>,
    hyperparameters: Option<String>,
    seed: String,
    output_dir: PathBuf,
    forever: bool,
    report: bool,
) -> Result<()> {
    let hyperparameters = load_hyperparameters(hyperparameters.as_deref())?;
    let mut config = Config::initialize(&hyperparameters);
    if let Some(s) = sample_size_slides {
        config.sample_size_slides = s;
    }
    if let Some(v) = sample_size_vertical_photos {
        config.sample_size_vertical_photos = v;
    }
    if solution_paths.len() > instance_paths.len() {
        warn!(
            "{} base solutions have no matching instance and are ignored",
            solution_paths.len() - instance_paths.len()
        );
    }
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let mut round = 0u64;
    loop {
        let seed_bytes = round_seed(&seed, round);
        let mut failures = 0;
        for (i, instance_path) in instance_paths.iter().enumerate() {
            info!("Input file: {}", instance_path.display());
            if let Err(e) = process_instance(
                instance_path,
                solution_paths.get(i),
                &config,
                &seed_bytes,
                &output_dir,
                report,
            ) {
                error!("Instance {} failed: {:#}", instance_path.display(), e);
                failures += 1;
            }
        }
        if !forever {
            return match failures {
                0 => Ok(()),
                n => Err(anyhow!(
                    "{} of {} instances failed",
                    n,
                    instance_paths.len()
                )),
            };
        }
        round += 1;
    }
}

fn process_instance(
    instance_path: &Path,
    solution_path: Option<&PathBuf>,
    config: &Config,
    seed: &[u8; 32],
    output_dir: &Path,
    report: bool,
) -> Result<()> {
    let instance = load_instance(instance_path)?;
    let solution = match solution_path {
        None => Solver::solve(&instance, config, seed)?,
        Some(path) => load_solution(path, &instance, score_from_file_name(path, &instance.name))?,
    };
    info!("Solution score: {}", solution.score);
    if report {
        println!("{}", jsonify(&solution.stats()));
    }

    let output_path = output_dir.join(format!("{}.{}.out", instance.name, solution.score));
    let mut writer = BufWriter::new(
        File::create(&output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?,
    );
    solution.write(&mut writer)?;
    writer.flush()?;
    info!("Wrote {}", output_path.display());
    Ok(())
}

pub fn verify_solution(
    instance_path: PathBuf,
    solution_path: PathBuf,
    score: Option<u64>,
) -> Result<()> {
    let instance = load_instance(&instance_path)?;
    let expected = score.or_else(|| score_from_file_name(&solution_path, &instance.name));
    let solution = load_solution(&solution_path, &instance, expected)?;
    let score = instance.verify_solution(&solution)?;
    println!("Solution is valid (score: {})", score);
    Ok(())
}

pub fn generate_instance(track: String, seed: String, output_file: Option<PathBuf>) -> Result<()> {
    let track = dejsonify::<Track>(&load_json_arg(&track)?)
        .map_err(|e| anyhow!("Failed to parse track: {}", e))?;
    let mut instance = Instance::generate_instance(&u8s_from_str(&seed), &track)?;
    match output_file {
        Some(path) => {
            instance.name = file_name(&path);
            let mut writer = BufWriter::new(
                File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            );
            instance.write(&mut writer)?;
            writer.flush()?;
            info!(
                "Wrote {} photos ({} vertical) to {}",
                instance.photos.len(),
                instance.num_vertical(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            instance.write(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn load_instance(path: &Path) -> Result<Instance> {
    let file =
        File::open(path).with_context(|| format!("Failed to read instance file {}", path.display()))?;
    Instance::read(file_name(path), file)
        .with_context(|| format!("Failed to parse instance {}", path.display()))
}

fn load_solution(path: &Path, instance: &Instance, score: Option<u64>) -> Result<Solution> {
    let file =
        File::open(path).with_context(|| format!("Failed to read solution file {}", path.display()))?;
    Solution::read(file, instance, score)
        .with_context(|| format!("Failed to load solution {}", path.display()))
}

fn load_hyperparameters(arg: Option<&str>) -> Result<Option<Map<String, Value>>> {
    match arg {
        Some(arg) => parse_hyperparameters(&load_json_arg(arg)?),
        None => Ok(None),
    }
}

fn load_json_arg(arg: &str) -> Result<String> {
    if arg.ends_with(".json") {
        fs::read_to_string(arg).with_context(|| format!("Failed to read json file {}", arg))
    } else {
        Ok(arg.to_string())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Solutions are written as `<instance>.<score>.out`; recovers the score.
/// Any other file name records no score.
fn score_from_file_name(path: &Path, instance_name: &str) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    name.strip_prefix(instance_name)?
        .strip_prefix('.')?
        .strip_suffix(".out")?
        .parse()
        .ok()
}
