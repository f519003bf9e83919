use clap::ValueEnum;
use tierpath_config::Tier;

/// Tier selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TierArg {
    #[value(name = "development")]
    Development,

    #[value(name = "testing")]
    Testing,

    #[value(name = "staging")]
    Staging,

    #[value(name = "production")]
    Production,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Development => Tier::Development,
            TierArg::Testing => Tier::Testing,
            TierArg::Staging => Tier::Staging,
            TierArg::Production => Tier::Production,
        }
    }
}

/// How resolved values are printed
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value listing
    #[default]
    #[value(name = "text")]
    Text,

    /// Pretty-printed JSON, for consumption by build scripts
    #[value(name = "json")]
    Json,

    /// Shell `KEY=value` lines, suitable for `eval` or `.env` files
    #[value(name = "env")]
    Env,
}
