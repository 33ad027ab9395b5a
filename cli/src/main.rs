//! splitpair CLI — the command-line entry point for pairing and placement.

use std::path::PathBuf;
use std::process;

use splitpair_core::command::Command;
use splitpair_core::response::Response;
use splitpair_core::sys::Sys;
use splitpair_core::PairSettings;


fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let (config, rest) = match split_config_flag(&arg_refs) {
        Ok(split) => split,
        Err(e) => {
            eprintln!("pair: {}", e);
            process::exit(1);
        }
    };
    let cmd = match parse_args(&rest) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("pair: {}", e);
            process::exit(1);
        }
    };

    let settings = match load_settings(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("pair: {}", e);
            process::exit(1);
        }
    };

    let mut sys = Sys::new(settings);
    let response = sys.execute(cmd);

    match response {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("pair error: {}", message);
            process::exit(1);
        }
    }
}


fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAIR_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("splitpair")
}


fn default_settings_path() -> PathBuf {
    resolve_config_dir().join("settings.json")
}


/// An explicit `--config` file must exist; the default one may be absent.
fn load_settings(config: Option<&str>) -> Result<PairSettings, String> {
    let (path, result) = match config {
        Some(file) => {
            let path = PathBuf::from(file);
            let result = PairSettings::load(&path);
            (path, result)
        }
        None => {
            let path = default_settings_path();
            let result = PairSettings::from_file(&path);
            (path, result)
        }
    };
    log::debug!("settings file: {}", path.display());
    result.map_err(|e| format!("{}: {}", path.display(), e))
}


/// Pull a global `--config <file>` out of the argument list.
fn split_config_flag<'a>(args: &[&'a str]) -> Result<(Option<&'a str>, Vec<&'a str>), String> {
    let mut config = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "--config" {
            match iter.next() {
                Some(file) if !file.starts_with("--") => config = Some(*file),
                _ => return Err("Usage: pair --config <file> <command> [args...]".into()),
            }
        } else {
            rest.push(*arg);
        }
    }
    Ok((config, rest))
}


fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'pair help' for usage.".into());
    }

    match args[0] {
        "classify" => Ok(Command::Classify {
            path: require_path(args, "classify <path>")?,
        }),
        "resolve" => Ok(Command::Resolve {
            path: require_path(args, "resolve <path>")?,
        }),
        "candidates" => Ok(Command::Candidates {
            path: require_path(args, "candidates <path>")?,
        }),
        "open" => Ok(Command::Open {
            path: require_path(args, "open <path> [--pane <p>] [--beside <path>]")?,
            pane: find_flag(args, "--pane"),
            beside: find_flag(args, "--beside"),
        }),
        "focus" => Ok(Command::Focus {
            path: require_path(args, "focus <path> [--pane <p>] [--beside <path>]")?,
            pane: find_flag(args, "--pane"),
            beside: find_flag(args, "--beside"),
        }),
        "settings" => Ok(Command::Settings),
        "help" => Ok(Command::Help {
            topic: args.get(1).map(|s| s.to_string()),
        }),
        _ => Err(format!("Unknown command: '{}'. Run 'pair help' for usage.", args[0])),
    }
}


fn require_path(args: &[&str], usage: &str) -> Result<String, String> {
    match args.get(1) {
        Some(p) if !p.starts_with("--") => Ok(p.to_string()),
        _ => Err(format!("Usage: pair {}", usage)),
    }
}


fn find_flag(args: &[&str], flag: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if *arg == flag {
            return args.get(i + 1).map(|s| s.to_string());
        }
    }
    None
}
