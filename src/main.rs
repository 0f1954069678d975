use cypress_test_helpers::adapter;
use cypress_test_helpers::commands::{self, Outcome};
use cypress_test_helpers::host::BufferHost;
use cypress_test_helpers::logging::LogFile;
use std::fs;
use std::io;
use std::process::exit;

fn main() -> io::Result<()> {
    let mut log = LogFile::from_env();
    log.line(&format!(
        "=== STARTED at {:?} ===",
        std::time::SystemTime::now()
    ));

    let args: Vec<String> = std::env::args().collect();
    log.line(&format!("args: {:?}", args));

    let adapter_mode = args
        .iter()
        .any(|arg| arg == "--adapter" || arg == "--editor-adapter");

    if adapter_mode {
        adapter::run_adapter_mode()?;
    } else {
        run_interactive_mode(&args)?;
    }

    log.line("=== EXITING ===");
    Ok(())
}

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  cypress-test-helpers --adapter");
    eprintln!("  cypress-test-helpers <file> <only|times> <line> [count] [--spaces N] [--in-place]");
    eprintln!();
    eprintln!("  <line> is 1-based. `times` prompts for a count unless one is given.");
    eprintln!("  The rewritten document goes to stdout unless --in-place is set.");
    exit(2);
}

fn run_interactive_mode(args: &[String]) -> io::Result<()> {
    let mut positionals: Vec<&String> = Vec::new();
    let mut spaces: Option<usize> = None;
    let mut in_place = false;

    let mut it = args.iter().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--in-place" => in_place = true,
            "--spaces" => match it.next().and_then(|v| v.parse().ok()) {
                Some(n) => spaces = Some(n),
                None => usage(),
            },
            _ => positionals.push(arg),
        }
    }

    if positionals.len() < 3 || positionals.len() > 4 {
        usage();
    }

    let path = positionals[0];
    let command = positionals[1].as_str();
    // Editors count lines from 1; the engine counts from 0.
    let cursor = match positionals[2].parse::<usize>() {
        Ok(line) if line > 0 => line - 1,
        _ => usage(),
    };
    let count = match positionals.get(3) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(count) if count > 0 => Some(count),
            _ => {
                eprintln!("Repeat count must be a positive integer, got '{raw}'");
                exit(2);
            }
        },
        None => None,
    };

    let contents = fs::read_to_string(path)?;
    let had_trailing_newline = contents.ends_with('\n');
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();

    let mut host = BufferHost::new(lines, cursor);
    if let Some(n) = spaces {
        host = host.with_indent_unit(" ".repeat(n));
    }
    if count.is_some() {
        host = host.with_count(count);
    }

    let outcome = match command {
        "only" => commands::toggle_only(&mut host)?,
        "times" => commands::toggle_times(&mut host)?,
        other => {
            eprintln!("Unknown command: {other}");
            usage();
        }
    };

    match outcome {
        Outcome::Applied => {
            let mut text = host.into_lines().join("\n");
            if had_trailing_newline {
                text.push('\n');
            }
            if in_place {
                fs::write(path, text)?;
                eprintln!("Updated {path}");
            } else {
                print!("{text}");
            }
        }
        Outcome::Cancelled => {
            eprintln!("Cancelled.");
        }
        Outcome::Rejected => {
            // Notice already went to stderr via the host.
        }
    }

    Ok(())
}
