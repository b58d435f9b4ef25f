use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use sim_shell::config::ShellConfig;
use sim_shell::network::create_dir_fetch_fn;
use sim_shell::{OutputSink, Shell, ShellOptions, Terminal};

#[derive(Parser)]
#[command(name = "sim-shell")]
#[command(about = "A simulated shell over a layered in-memory file system")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// TOML file with the banner and permanent tree
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Directory that deferred permanent files are read from
    #[arg(long = "content-root")]
    content_root: Option<PathBuf>,

    /// Output the result of -c as JSON (output, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Do not print the welcome banner
    #[arg(long = "no-banner")]
    no_banner: bool,
}

/// Writes the transcript to stdout.
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn append(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn clear(&mut self) {
        // ANSI escape sequence to clear screen and move cursor to top-left
        print!("\x1B[2J\x1B[H");
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellConfig::default(),
    };

    let content_root = cli.content_root.clone().or_else(|| config.content_root.clone());
    let mut shell = Shell::new(ShellOptions {
        permanent: Some(config.permanent.clone()),
        fetch_fn: content_root.map(create_dir_fetch_fn),
        ..Default::default()
    });

    if let Some(line) = cli.command {
        let result = shell.exec(line.trim()).await;
        if cli.json {
            println!("{}", serde_json::json!({
                "output": result.output,
                "exitCode": result.exit_code,
            }));
        } else if !result.output.is_empty() {
            println!("{}", result.output);
        }
        std::process::exit(result.exit_code);
    }

    let interactive = std::io::stdin().is_terminal();
    let mut terminal = Terminal::new(shell, StdoutSink).echo_input(config.echo_input && !interactive);
    if !cli.no_banner {
        terminal.print_banner(&config.banner);
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    while terminal.is_enabled() {
        if interactive {
            print!("{}$ ", terminal.shell().cwd());
            let _ = std::io::stdout().flush();
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("failed to read input: {}", e);
                break;
            }
            None => break,
        };
        terminal.submit(&line).await;
    }
}
