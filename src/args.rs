use clap::{Parser, ValueEnum};
use page_enhancer::{EnhanceOptions, SourceType};

#[derive(Parser, Debug)]
#[command(name = "page-enhancer")]
#[command(about = "Extracts readable content from a web page and enhances it with AI")]
#[command(version)]
pub struct Args {
    /// Page to process (URL for web, path for file)
    pub uri: String,

    /// Source type (web, file)
    #[arg(short = 't', long = "type", value_enum, default_value_t = SourceTypeArg::Web)]
    pub type_: SourceTypeArg,

    /// URL a saved file was downloaded from (file source only)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Model override for the enhancement service
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ask for a summary
    #[arg(long)]
    pub summarize: bool,

    /// Ask for additional context
    #[arg(long)]
    pub expand_context: bool,

    /// Ask for claim validation
    #[arg(long)]
    pub validate_claims: bool,

    /// Print the extracted content without calling the enhancement service
    #[arg(long)]
    pub extract_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceTypeArg {
    Web,
    File,
}

impl Args {
    /// Convert from CLI arguments to the library source type
    pub fn source(&self) -> SourceType {
        match self.type_ {
            SourceTypeArg::Web => SourceType::Web(self.uri.clone()),
            SourceTypeArg::File => SourceType::File {
                path: self.uri.clone(),
                base_url: self.base_url.clone(),
            },
        }
    }

    pub fn options(&self) -> EnhanceOptions {
        EnhanceOptions {
            summarize: self.summarize,
            expand_context: self.expand_context,
            validate_claims: self.validate_claims,
        }
    }
}
