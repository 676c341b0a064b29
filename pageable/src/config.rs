//! Page request defaults, loaded with Figment
//!
//! Defaults are resolved from the following sources (highest to lowest):
//! 1. Environment variables (prefix: PAGEABLE_)
//! 2. Current working directory: ./pageable.toml
//! 3. Built-in values
//!
//! There is no process-wide instance. Load a [`PageDefaults`] once and hand it
//! to [`PageBuilder::with_defaults`](crate::PageBuilder::with_defaults)
//! wherever requests are built.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::request::PageableVerbose;
use crate::resort::ResortStrategies;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "pageable.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PAGEABLE_";

/// Defaults applied when building a [`Pageable`](crate::Pageable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefaults {
    /// Page size used when the requested size is below 1
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound for requested page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Whether data sources should count the total
    #[serde(default = "default_true")]
    pub need_total: bool,

    /// Whether data sources should fetch the content
    #[serde(default = "default_true")]
    pub need_content: bool,

    /// Clamp out-of-range page numbers instead of rejecting them
    #[serde(default = "default_false")]
    pub fix_edge: bool,

    /// Amount of derived metadata to return with a page
    #[serde(default)]
    pub verbose: PageableVerbose,

    /// Whether the first page is numbered 1 (otherwise 0)
    #[serde(default = "default_true")]
    pub page_number_one_indexed: bool,

    /// Strategy used to rewrite sort properties
    #[serde(default)]
    pub resort_strategy: ResortStrategies,
}

impl PageDefaults {
    /// Load defaults from `./pageable.toml` and `PAGEABLE_*` variables
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(PageDefaults::default()));

        if Path::new(CONFIG_FILE).exists() {
            tracing::info!("Loading page defaults from: {}", CONFIG_FILE);
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let defaults: PageDefaults = figment.extract()?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Load defaults from a specific file
    ///
    /// Environment variables still override the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading page defaults from: {}", path.display());

        let defaults: PageDefaults = Figment::new()
            .merge(Serialized::defaults(PageDefaults::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// First page number implied by these defaults
    pub fn first_page_number(&self) -> i64 {
        first_page_number(self.page_number_one_indexed)
    }

    /// Reject sizes a request could never be built with
    pub fn validate(&self) -> Result<()> {
        if self.page_size < 1 {
            return Err(Error::invalid_argument("default page size must be at least 1"));
        }
        if self.max_page_size < 1 {
            return Err(Error::invalid_argument("max page size must be at least 1"));
        }
        Ok(())
    }
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            need_total: true,
            need_content: true,
            fix_edge: false,
            verbose: PageableVerbose::default(),
            page_number_one_indexed: true,
            resort_strategy: ResortStrategies::default(),
        }
    }
}

pub(crate) fn first_page_number(page_number_one_indexed: bool) -> i64 {
    if page_number_one_indexed {
        1
    } else {
        0
    }
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_defaults() {
        let defaults = PageDefaults::default();
        assert_eq!(defaults.page_size, 20);
        assert_eq!(defaults.max_page_size, 2000);
        assert!(defaults.need_total);
        assert!(defaults.need_content);
        assert!(!defaults.fix_edge);
        assert_eq!(defaults.verbose, PageableVerbose::None);
        assert!(defaults.page_number_one_indexed);
        assert_eq!(defaults.resort_strategy, ResortStrategies::SameCase);
        assert_eq!(defaults.first_page_number(), 1);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                page_size = 50
                fix_edge = true
                verbose = "all"
                resort_strategy = "snake_case"
                "#,
            )?;

            let defaults = PageDefaults::load_from("custom.toml").expect("defaults should load");
            assert_eq!(defaults.page_size, 50);
            assert!(defaults.fix_edge);
            assert_eq!(defaults.verbose, PageableVerbose::All);
            assert_eq!(defaults.resort_strategy, ResortStrategies::SnakeCase);
            // untouched keys keep built-in values
            assert_eq!(defaults.max_page_size, 2000);
            Ok(())
        });
    }

    #[test]
    fn test_load_from_rejects_zero_page_size() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("zero.toml", "page_size = 0")?;
            let err = PageDefaults::load_from("zero.toml").unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_reports_bad_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "verbose = \"everything\"")?;
            let err = PageDefaults::load_from("bad.toml").unwrap_err();
            assert!(matches!(err, Error::Config(_)));
            Ok(())
        });
    }

    #[test]
    fn test_load_without_file_uses_built_in_values() {
        figment::Jail::expect_with(|_jail| {
            let defaults = PageDefaults::load().expect("defaults should load");
            assert_eq!(defaults, PageDefaults::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_reads_working_dir_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "max_page_size = 100\npage_number_one_indexed = false")?;
            jail.set_env("PAGEABLE_MAX_PAGE_SIZE", "500");
            jail.set_env("PAGEABLE_NEED_TOTAL", "false");

            let defaults = PageDefaults::load().expect("defaults should load");
            assert_eq!(defaults.max_page_size, 500);
            assert!(!defaults.need_total);
            assert!(!defaults.page_number_one_indexed);
            assert_eq!(defaults.first_page_number(), 0);
            Ok(())
        });
    }
}
