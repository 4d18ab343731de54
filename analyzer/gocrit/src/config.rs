//! Checker selection.

use gocrit_checkers::{CheckerRegistry, ExprChecker, Tag};

/// Errors from building a [`LintConfig`] or resolving it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown checker `{0}`")]
    UnknownChecker(String),

    #[error("unknown tag `{0}`")]
    UnknownTag(String),

    #[error("unrecognized flag `{0}`")]
    UnknownFlag(String),

    #[error("flag `{flag}` expects a value")]
    MissingValue { flag: String },

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: String, value: String },

    #[error("configuration enables no checkers")]
    NothingEnabled,
}

/// Which checkers run and how.
///
/// With no `enable`/`enable_tags`, every non-experimental checker runs.
/// Otherwise exactly the named checkers plus those carrying an enabled tag
/// run. Disables are applied last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintConfig {
    pub enable: Vec<String>,
    pub disable: Vec<String>,
    pub enable_tags: Vec<Tag>,
    pub disable_tags: Vec<Tag>,
    /// Lint units on a thread pool.
    pub parallel: bool,
    /// Maximum diagnostics kept per unit (0 = unlimited).
    pub diagnostic_limit: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            enable: Vec::new(),
            disable: Vec::new(),
            enable_tags: Vec::new(),
            disable_tags: Vec::new(),
            parallel: true,
            diagnostic_limit: 0,
        }
    }
}

fn split_list(flag: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if items.is_empty() {
        return Err(ConfigError::MissingValue {
            flag: flag.to_owned(),
        });
    }
    Ok(items)
}

fn parse_tags(flag: &str, value: &str) -> Result<Vec<Tag>, ConfigError> {
    split_list(flag, value)?
        .into_iter()
        .map(|name| Tag::from_name(&name).ok_or(ConfigError::UnknownTag(name)))
        .collect()
}

impl LintConfig {
    /// Parse command-line style flags.
    ///
    /// Accepts `--enable=a,b`, `--disable=a,b`, `--enable-tags=t`,
    /// `--disable-tags=t`, `--no-parallel` and `--limit=N`. Repeated list
    /// flags accumulate.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = LintConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg == "--no-parallel" {
                config.parallel = false;
                continue;
            }
            let Some((flag, value)) = arg.split_once('=') else {
                return Err(match arg {
                    "--enable" | "--disable" | "--enable-tags" | "--disable-tags" | "--limit" => {
                        ConfigError::MissingValue {
                            flag: arg.to_owned(),
                        }
                    }
                    _ => ConfigError::UnknownFlag(arg.to_owned()),
                });
            };
            match flag {
                "--enable" => config.enable.extend(split_list(flag, value)?),
                "--disable" => config.disable.extend(split_list(flag, value)?),
                "--enable-tags" => config.enable_tags.extend(parse_tags(flag, value)?),
                "--disable-tags" => config.disable_tags.extend(parse_tags(flag, value)?),
                "--limit" => {
                    config.diagnostic_limit = value.parse().map_err(|_| ConfigError::InvalidValue {
                        flag: flag.to_owned(),
                        value: value.to_owned(),
                    })?;
                }
                _ => return Err(ConfigError::UnknownFlag(flag.to_owned())),
            }
        }
        Ok(config)
    }

    /// Select checkers from `registry`, in registration order.
    pub fn resolve(
        &self,
        registry: &CheckerRegistry,
    ) -> Result<Vec<&'static dyn ExprChecker>, ConfigError> {
        for name in self.enable.iter().chain(&self.disable) {
            if registry.get(name).is_none() {
                return Err(ConfigError::UnknownChecker(name.clone()));
            }
        }

        let explicit = !self.enable.is_empty() || !self.enable_tags.is_empty();
        let selected: Vec<_> = registry
            .iter()
            .filter(|checker| {
                let info = checker.info();
                let enabled = if explicit {
                    self.enable.iter().any(|n| n == info.name)
                        || self.enable_tags.iter().any(|&t| info.has_tag(t))
                } else {
                    !info.has_tag(Tag::Experimental)
                };
                let disabled = self.disable.iter().any(|n| n == info.name)
                    || self.disable_tags.iter().any(|&t| info.has_tag(t));
                enabled && !disabled
            })
            .collect();

        if selected.is_empty() {
            return Err(ConfigError::NothingEnabled);
        }
        tracing::debug!(
            checkers = ?selected.iter().map(|c| c.info().name).collect::<Vec<_>>(),
            "resolved checkers"
        );
        Ok(selected)
    }
}
