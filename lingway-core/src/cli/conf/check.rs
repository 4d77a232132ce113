use crate::conf::types::DeviceConfig;
use crate::conf::{ConfigError, load_devices};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_devices(&path) {
        Ok(devices) => {
            println!("✔ Config loaded successfully");
            println!(
                "✔ {} devices enabled",
                devices.iter().filter(|d| d.enabled()).count()
            );
            for device in &devices {
                let DeviceConfig::Locale(cfg) = device;
                let sources: Vec<&str> = cfg.sources.iter().map(|s| s.as_str()).collect();
                println!(
                    "✔ locale: {} locales (default {}), sources [{}], redirect {}",
                    cfg.catalog.len(),
                    cfg.catalog.default_locale(),
                    sources.join(", "),
                    cfg.redirect.map(|r| r.as_str()).unwrap_or("none"),
                );
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            Err(anyhow::anyhow!("invalid configuration: {}", path.display()))
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Validation { validation_errors } => validation_errors
            .errors()
            .iter()
            .find_map(config_error_hint),

        ConfigError::InvalidSources { .. } | ConfigError::DuplicateSource { .. } => Some(
            "Sources must be listed at most once, in priority order, from:\n\
             param, path, host, header, cookie\n\
             \n\
             Example:\n\
             \n\
             source = [\"path\", \"param\", \"header\"]",
        ),

        ConfigError::InvalidRedirect { .. } => Some(
            "The redirect target must be one of: none, param, path, host.",
        ),

        ConfigError::EmptyLocaleCatalog | ConfigError::DefaultLocaleUnavailable { .. } => Some(
            "The default locale must be one of the available locales.\n\
             \n\
             Example:\n\
             \n\
             available_locales = [\"en\", \"en-US\", \"de\"]\n\
             default_locale    = \"en\"",
        ),

        ConfigError::InvalidLocale { .. } => Some(
            "Locales are a 2-3 letter language, optionally followed by '-' and a 2-3 letter region,\n\
             e.g. \"de\" or \"en-US\".",
        ),

        _ => None,
    }
}
