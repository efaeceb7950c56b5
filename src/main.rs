use anyhow::Result;
use clap::Parser;
use lockbox::{try_unlock, unlock, Cli, SecureBox};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    let locked = open(&cli)?;
    println!("{}", if locked { "BOX: LOCKED!" } else { "BOX: OPENED!" });

    std::process::exit(i32::from(locked));
}

fn open(cli: &Cli) -> Result<bool> {
    let (height, width) = (cli.height as usize, cli.width as usize);
    let mut secure_box = match cli.seed {
        Some(seed) => SecureBox::with_seed(height, width, seed)?,
        None => SecureBox::new(height, width)?,
    };

    if !cli.verbose {
        return Ok(unlock(&mut secure_box));
    }

    print!("{}", secure_box);
    match try_unlock(&mut secure_box) {
        Ok(plan) => println!("Unlocked with {} toggles", plan.len()),
        Err(err) => println!("No unlock sequence: {}", err),
    }
    Ok(secure_box.is_locked())
}
