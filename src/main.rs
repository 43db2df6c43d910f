use std::path::PathBuf;

use clap::Parser;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate an HTML site from a directory of Markdown files")]
struct Cli {
    /// Site root directory (defaults to the current directory)
    root: Option<PathBuf>,

    /// Config file (defaults to mdsite.toml in the site root)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));

    let config_path = cli.config.unwrap_or_else(|| root.join("mdsite.toml"));
    let config = Config::load(&config_path);

    let output = root.join(&config.output);
    let result = mdsite::site::build_site(
        &root.join(&config.content),
        &root.join(&config.r#static),
        &output,
        &root.join(&config.template),
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Generated site in {}", output.display());
}
