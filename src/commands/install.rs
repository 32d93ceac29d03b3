use crate::core::{
    config::YagConfig,
    error::{Result, YagError},
    print_success, process,
};
use std::process::Command;

/// `yag install`: rebuild and install yag from its source checkout.
pub fn execute_install(config: &YagConfig) -> Result<()> {
    let src_dir = config
        .src_dir
        .as_ref()
        .ok_or(YagError::SourceDirNotConfigured)?;
    if !src_dir.is_dir() {
        return Err(YagError::file_not_found(src_dir));
    }

    let mut cmd = Command::new("cargo");
    cmd.args(["install", "--path"]).arg(src_dir);
    process::run_inherited(&mut cmd)?;
    print_success(&format!("Installed from {}", src_dir.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_requires_source_dir() {
        let config = YagConfig::default();
        assert!(matches!(
            execute_install(&config),
            Err(YagError::SourceDirNotConfigured)
        ));
    }

    #[test]
    fn test_install_rejects_missing_source_dir() {
        let config = YagConfig {
            src_dir: Some("/definitely/not/here/yag".into()),
            ..Default::default()
        };
        assert!(matches!(
            execute_install(&config),
            Err(YagError::FileNotFound { .. })
        ));
    }
}
