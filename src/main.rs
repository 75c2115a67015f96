mod cli;

use brandsvg::{load_catalog, recolor, recolor_batch, to_data_uri, Icon, Mode, Palette};
use clap::Parser;
use cli::Args;
use std::fs;
use std::io::{self, Read, Write};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "brandsvg=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), String> {
    let palette = build_palette(args)?;

    if args.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        if input.trim().is_empty() {
            return Err("No input provided".to_string());
        }
        let output = recolor(&input, &palette, args.mode);
        let output = if args.data_uri { to_data_uri(&output) } else { output };
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", output).map_err(|e| format!("Failed to write output: {}", e))?;
        return Ok(());
    }

    let icons = args
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|markup| Icon {
                    name: path.to_string_lossy().into_owned(),
                    markup,
                })
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let recolored = recolor_batch(&icons, &palette, args.mode);

    if args.data_uri {
        for icon in &recolored {
            println!("{}", to_data_uri(&icon.markup));
        }
        return Ok(());
    }

    let targets = output_targets(&args.files, &recolored, args.out_dir.as_deref())?;
    for ((source, icon), target) in args.files.iter().zip(&recolored).zip(&targets) {
        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
        }
        fs::write(target, &icon.markup)
            .map_err(|e| format!("Failed to write {}: {}", target.display(), e))?;
        info!(source = %source.display(), target = %target.display(), "recolored");
    }

    Ok(())
}

/// Output path for each recolored icon: `out_dir` when given, else the
/// source's own directory. Fails before anything is written when two inputs
/// would land on the same file.
fn output_targets(
    sources: &[PathBuf],
    icons: &[Icon],
    out_dir: Option<&Path>,
) -> Result<Vec<PathBuf>, String> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    sources
        .iter()
        .zip(icons)
        .map(|(source, icon)| {
            let dir = match out_dir {
                Some(dir) => dir,
                None => source.parent().unwrap_or_else(|| Path::new(".")),
            };
            let target = dir.join(&icon.name);
            if let Some(previous) = seen.insert(target.clone(), source.as_path()) {
                return Err(format!(
                    "{} and {} would both be written to {}",
                    previous.display(),
                    source.display(),
                    target.display()
                ));
            }
            Ok(target)
        })
        .collect()
}

/// Preset colors from `--brands/--brand`, overridden role by role by the
/// color flags
fn build_palette(args: &Args) -> Result<Palette, String> {
    let mut palette = match (&args.brands, &args.brand) {
        (Some(path), Some(name)) => {
            let catalog = load_catalog(path)?;
            catalog
                .find(name)
                .map(|preset| preset.palette.clone())
                .ok_or_else(|| {
                    format!(
                        "Unknown brand \"{}\" (available: {})",
                        name,
                        catalog.names().join(", ")
                    )
                })?
        }
        _ => Palette::new(""),
    };

    if let Some(primary) = &args.primary {
        palette.primary = primary.clone();
    }
    if let Some(secondary) = &args.secondary {
        palette.secondary = Some(secondary.clone());
    }
    if let Some(accent) = &args.accent {
        palette.accent = Some(accent.clone());
    }

    if palette.is_empty() {
        return Err("A primary color is required (--primary or --brands/--brand)".to_string());
    }
    if args.mode == Mode::Gradient && !palette.supports_gradient() {
        return Err("Gradient mode needs both a primary and a secondary color".to_string());
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(names: &[&str]) -> Vec<Icon> {
        names.iter().map(|name| Icon::new(name, "<svg/>")).collect()
    }

    #[test]
    fn test_targets_next_to_sources() {
        let sources = vec![PathBuf::from("a/logo.svg"), PathBuf::from("b/logo.svg")];
        let targets =
            output_targets(&sources, &icons(&["logo-primary.svg", "logo-primary.svg"]), None).unwrap();
        assert_eq!(
            targets,
            vec![PathBuf::from("a/logo-primary.svg"), PathBuf::from("b/logo-primary.svg")]
        );
    }

    #[test]
    fn test_targets_in_out_dir() {
        let sources = vec![PathBuf::from("a/logo.svg"), PathBuf::from("a/mark.svg")];
        let out = PathBuf::from("out");
        let targets = output_targets(
            &sources,
            &icons(&["logo-gradient.svg", "mark-gradient.svg"]),
            Some(out.as_path()),
        )
        .unwrap();
        assert_eq!(
            targets,
            vec![PathBuf::from("out/logo-gradient.svg"), PathBuf::from("out/mark-gradient.svg")]
        );
    }

    #[test]
    fn test_shared_basename_in_out_dir_is_rejected() {
        let sources = vec![PathBuf::from("a/logo.svg"), PathBuf::from("b/logo.svg")];
        let out = PathBuf::from("out");
        let err = output_targets(
            &sources,
            &icons(&["logo-primary.svg", "logo-primary.svg"]),
            Some(out.as_path()),
        )
        .unwrap_err();
        assert!(err.contains("a/logo.svg"));
        assert!(err.contains("b/logo.svg"));
        assert!(err.contains("logo-primary.svg"));
    }
}
