//! Shell completion scripts

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn run(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout());
    Ok(())
}

fn write(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, buf);
}
