use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use magentoify_core::{init_tracing, run, MagentoifyConfig};
use tracing::info;

fn cli() -> Command {
    Command::new("magentoify")
        .version(magentoify_core::VERSION)
        .about("Rewires the Rails models of a Magento database into explicit associations")
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("PROJECT")
                .value_parser(clap::value_parser!(PathBuf))
                .help("The project directory we want to Magentoify"),
        )
}

fn config_from(matches: &ArgMatches) -> magentoify_core::Result<MagentoifyConfig> {
    MagentoifyConfig::from_project(matches.get_one::<PathBuf>("project").cloned())
}

fn main() -> Result<()> {
    // Initialize logging
    init_tracing();

    let matches = cli().get_matches();
    let config = config_from(&matches)?;

    info!("Patching models in {}", config.models_path().display());
    let summary = run(&config)?;

    info!(
        "Done: {} model files, {} writes, {} skipped without anchor",
        summary.files_selected,
        summary.files_written,
        summary.skipped.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use magentoify_core::MagentoifyError;

    #[test]
    fn test_project_flag_forms() {
        for args in [
            vec!["magentoify", "-p", "/srv/shop"],
            vec!["magentoify", "-p/srv/shop"],
            vec!["magentoify", "--project=/srv/shop"],
            vec!["magentoify", "--project", "/srv/shop"],
        ] {
            let matches = cli().try_get_matches_from(args).unwrap();
            let config = config_from(&matches).unwrap();
            assert_eq!(config.project_root, PathBuf::from("/srv/shop"));
        }
    }

    #[test]
    fn test_missing_project_is_config_error() {
        let matches = cli().try_get_matches_from(["magentoify"]).unwrap();
        assert!(matches!(config_from(&matches), Err(MagentoifyError::Config(_))));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(cli().try_get_matches_from(["magentoify", "--dry-run"]).is_err());
    }

    #[test]
    fn test_run_against_project() {
        let dir = tempfile::tempdir().unwrap();
        let models = dir.path().join("app/models");
        std::fs::create_dir_all(&models).unwrap();
        std::fs::write(models.join("store.rb"), "class Store < ApplicationRecord\nend\n").unwrap();
        std::fs::write(models.join("customer_entity.rb"), "class CustomerEntity < ApplicationRecord\nend\n").unwrap();

        let matches = cli()
            .try_get_matches_from(["magentoify", "--project", dir.path().to_str().unwrap()])
            .unwrap();
        let summary = run(&config_from(&matches).unwrap()).unwrap();

        assert_eq!(summary.files_selected, 2);
        assert_eq!(summary.files_written, 1);
        assert_eq!(
            std::fs::read_to_string(models.join("store.rb")).unwrap(),
            "class Store < ApplicationRecord\nend\n"
        );
    }
}
