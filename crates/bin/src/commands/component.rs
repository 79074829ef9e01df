//! Component command - looks up one component by position.

use hl7tree::Field;

use crate::cli::ComponentArgs;
use crate::output::{OutputFormat, print_table};

/// Run the component command
pub fn run(args: &ComponentArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let field = Field::with_value(args.value.as_str(), args.encoding.encoding()?);
    let component = field.component(args.position)?;

    match format {
        OutputFormat::Human => {
            println!("{}", component.value());
            let rows: Vec<Vec<String>> = component
                .subcomponents()
                .iter()
                .enumerate()
                .map(|(i, sub)| vec![(i + 1).to_string(), sub.value().to_string()])
                .collect();
            if component.is_subcomponentized() {
                print_table(&["SUB", "VALUE"], &rows);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(component)?);
        }
    }

    Ok(())
}
