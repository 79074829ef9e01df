//! Decompose command - prints every node of a field value.

use hl7tree::Field;

use crate::cli::DecomposeArgs;
use crate::output::{OutputFormat, leaf_rows, print_table};

/// Run the decompose command
pub fn run(args: &DecomposeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = args.encoding.encoding()?;
    let field = if args.declaration {
        Field::delimiter_declaration(args.value.as_str(), encoding)
    } else {
        Field::with_value(args.value.as_str(), encoding)
    };

    tracing::info!(
        kind = field.decomposition().kind(),
        repetitions = field.repetition_count(),
        components = field.component_count(),
        "Decomposed field"
    );

    match format {
        OutputFormat::Human => {
            let rows = leaf_rows(&field);
            if rows.is_empty() {
                println!("Empty field.");
                return Ok(());
            }
            print_table(&["REP", "COMP", "SUB", "VALUE"], &rows);
        }
        OutputFormat::Json => {
            println!("{}", field.to_json_string()?);
        }
    }

    Ok(())
}
