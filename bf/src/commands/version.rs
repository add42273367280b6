use clap::Args;
use eyre::Result;

use super::VERSION;

#[derive(Args)]
pub struct VersionCommand {}

impl VersionCommand {
    pub fn run(&self) -> Result<()> {
        println!("bf {VERSION}");
        Ok(())
    }
}
