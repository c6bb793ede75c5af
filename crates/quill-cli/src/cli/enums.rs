use clap::ValueEnum;

/// Client variants selectable from the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum VariantArg {
    /// Legacy browser bundle
    #[value(name = "client")]
    Client,

    /// Modern (ES2015+) browser bundle
    #[value(name = "modern")]
    Modern,

    /// Every variant the configuration asks for
    #[default]
    #[value(name = "all")]
    All,
}
