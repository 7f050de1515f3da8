//! `cca version`

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("{}", version_line());
    Ok(())
}

/// `cca version <version> <os>/<arch>`
pub fn version_line() -> String {
    format!(
        "cca version {} {}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_names_platform() {
        let line = version_line();
        assert!(line.starts_with(&format!("cca version {}", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with(&format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)));
    }
}
