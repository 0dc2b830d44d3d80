use clap::Parser;
use listpick_demo::{logging, run, Cli};

fn main() -> anyhow::Result<()> {
    logging::init("warn");

    let cli = Cli::parse();
    for line in run(&cli)? {
        println!("{line}");
    }
    Ok(())
}
