use std::io;
use std::path::PathBuf;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;
use pipesh::config::ConfigLoader;
use pipesh::executor::DefaultExecutor;
use pipesh::prompt::ShellPrompt;
use pipesh::repl::Repl;

/// A minimal shell: runs one command or a `|` pipeline per line.
#[derive(FromArgs)]
struct Args {
    /// path to a key=value config file (keys: prompt, exit_keyword)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
}

fn main() {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("PIPESH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match args.config {
        Some(path) => match ConfigLoader::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("pipesh: {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => ConfigLoader::default_config(),
    };

    let prompt = ShellPrompt::new(&config.prompt);
    let executor = DefaultExecutor::new(&config);
    let mut repl = Repl::new(prompt, executor);

    let code = match repl.run(&mut io::stdin().lock(), &mut io::stdout()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pipesh: error reading input: {}", e);
            1
        }
    };
    std::process::exit(code);
}
