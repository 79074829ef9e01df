//! CLI argument definitions for the hl7tree binary.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use hl7tree::{Encoding, EncodingError};

use crate::output::OutputFormat;

/// HL7v2 field decomposition tool
#[derive(Parser, Debug)]
#[command(name = "hl7tree")]
#[command(about = "hl7tree: decompose HL7v2 field values into repetitions, components and sub-components")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human", env = "HL7TREE_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decompose a field value and print every node
    Decompose(DecomposeArgs),
    /// Print a single component by 1-based position
    Component(ComponentArgs),
}

/// Delimiter configuration shared by all commands
#[derive(clap::Args, Debug)]
pub struct EncodingArgs {
    /// Field separator (MSH-1)
    #[arg(long, default_value_t = '|', env = "HL7TREE_FIELD_DELIMITER")]
    pub field_delimiter: char,

    /// Encoding characters (MSH-2): component, repetition, escape, sub-component
    #[arg(long, default_value = "^~\\&", env = "HL7TREE_DELIMITERS")]
    pub delimiters: String,
}

impl EncodingArgs {
    /// Builds the shared delimiter set from the arguments
    pub fn encoding(&self) -> Result<Arc<Encoding>, EncodingError> {
        Encoding::from_declaration(self.field_delimiter, &self.delimiters).map(Arc::new)
    }
}

/// Arguments for the decompose command
#[derive(clap::Args, Debug)]
pub struct DecomposeArgs {
    /// Raw field value
    pub value: String,

    /// Treat the value as the encoding characters field and keep it verbatim
    #[arg(long)]
    pub declaration: bool,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

/// Arguments for the component command
#[derive(clap::Args, Debug)]
pub struct ComponentArgs {
    /// Raw field value
    pub value: String,

    /// 1-based component position
    pub position: usize,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}
