//! CLI argument parsing via clap.

use atelier::build_info;
use atelier::error::FormError;
use atelier::intake::{FormField, FormState};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Design a dress from a few measurements and get fabric and sewing advice.
///
/// Without a subcommand, runs the interactive form.
#[derive(Debug, Parser)]
#[command(
    name = "atelier",
    version,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./atelier.toml or ~/.config/atelier/atelier.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override design service base URL.
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit one design request and print the generated design.
    Submit(DesignArgs),
    /// Generate a design locally without contacting the design service.
    Preview(DesignArgs),
    /// Write the default config to ~/.config/atelier/atelier.toml.
    Init {
        /// Overwrite an existing config after backing it up.
        #[arg(long)]
        force: bool,
    },
}

/// Form values supplied as flags.
#[derive(Debug, Clone, ClapArgs)]
pub struct DesignArgs {
    /// Dress type: evening, casual, cocktail, wedding, summer, or formal.
    #[arg(long = "type", value_name = "TYPE")]
    pub design_type: String,

    /// Preferred color as #rrggbb.
    #[arg(long)]
    pub color: String,

    /// Style description, e.g. "A-line".
    #[arg(long)]
    pub style: String,

    /// Weight in kg (30-200, steps of 0.1).
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Height in cm (100-250, whole numbers).
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,

    /// Print the generated design as JSON instead of panels.
    #[arg(long)]
    pub json: bool,
}

impl DesignArgs {
    /// Run every flag through the same field rules the interactive form uses.
    pub fn to_form(&self) -> Result<FormState, FormError> {
        let mut form = FormState::new();
        form.set_field(FormField::DesignType, &self.design_type)?;
        form.set_field(FormField::Color, &self.color)?;
        form.set_field(FormField::Style, &self.style)?;
        form.set_field(FormField::Weight, &self.weight)?;
        form.set_field(FormField::Height, &self.height)?;
        Ok(form)
    }
}
