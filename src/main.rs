use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use stackly::model::FieldType;
use stackly::remote::RemoteClient;
use stackly::schema::DraftSchema;
use stackly::{table, tui, validate};

#[derive(Parser)]
#[command(name = "stackly")]
#[command(about = "Organize documents into Spaces and Stacks", long_about = None)]
struct Cli {
    /// Base URL of the Stackly API
    #[arg(long, env = "STACKLY_API", default_value = "http://127.0.0.1:7878")]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all Spaces
    Spaces {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a Space
    CreateSpace { name: String },

    /// List the Stacks of a Space
    Stacks {
        space: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a Stack with a field schema
    CreateStack {
        name: String,
        /// Owning Space
        #[arg(long)]
        space: String,
        /// Schema field as NAME:TYPE (string|number|boolean|date); repeatable.
        /// Defaults to Name:string when omitted.
        #[arg(long = "field", value_name = "NAME:TYPE")]
        fields: Vec<String>,
    },

    /// List the Documents of a Stack as a schema-driven table
    Documents {
        stack: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return tui::run(cli.api_url);
    };

    let client = RemoteClient::new(cli.api_url)?;

    match command {
        Commands::Spaces { json } => {
            let spaces = client.list_spaces()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&spaces).context("serialize spaces")?
                );
            } else {
                for s in spaces {
                    println!("{}", s.space_name);
                }
            }
        }

        Commands::CreateSpace { name } => {
            if name.trim().is_empty() {
                bail!("space name must not be blank");
            }
            match client.list_spaces() {
                Ok(spaces) => {
                    if validate::is_duplicate(&name, spaces.iter().map(|s| s.space_name.as_str()))
                    {
                        bail!("{}", validate::duplicate_message(&name));
                    }
                }
                Err(err) => {
                    eprintln!("warning: could not verify name uniqueness ({})", err);
                }
            }
            client.create_space(&name)?;
            println!("created space \"{}\"", name.trim());
        }

        Commands::Stacks { space, json } => {
            let stacks = client.list_space_stacks(&space)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&stacks).context("serialize stacks")?
                );
            } else {
                for s in stacks {
                    println!("{}", s.stack_name);
                }
            }
        }

        Commands::CreateStack {
            name,
            space,
            fields,
        } => {
            if name.trim().is_empty() {
                bail!("stack name must not be blank");
            }
            // Stack names are unique globally, across all Spaces.
            match client.list_stack_names() {
                Ok(names) => {
                    if validate::is_duplicate(&name, names.iter().map(String::as_str)) {
                        bail!("{}", validate::duplicate_message(&name));
                    }
                }
                Err(err) => {
                    eprintln!("warning: could not verify name uniqueness ({})", err);
                }
            }
            let schema = parse_fields(&fields)?;
            client.create_stack(&name, &space, schema)?;
            println!("created stack \"{}\" in \"{}\"", name.trim(), space);
        }

        Commands::Documents { stack, json } => {
            // Schema first; the document fetch is meaningless without it.
            let schema = client.stack_schema(&stack)?;
            let docs = client.list_documents(&stack)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&docs).context("serialize documents")?
                );
            } else {
                print_table(&table::header(&schema), table::document_rows(&schema, &docs));
            }
        }
    }

    Ok(())
}

fn parse_fields(specs: &[String]) -> Result<stackly::model::FieldSchema> {
    let mut draft = DraftSchema::new();
    if specs.is_empty() {
        return draft.build();
    }

    // Replace the seeded default with the requested fields.
    draft.set_name(0, "");
    for (i, spec) in specs.iter().enumerate() {
        let (name, ty) = spec
            .split_once(':')
            .with_context(|| format!("invalid field spec {:?} (expected NAME:TYPE)", spec))?;
        let ty = FieldType::parse(ty)
            .with_context(|| format!("unknown field type {:?} in {:?}", ty, spec))?;
        draft.add_field();
        draft.set_name(i + 1, name.trim());
        draft.set_field_type(i + 1, ty);
    }
    draft.build()
}

fn print_table(header: &[String], rows: Vec<table::DocumentRow>) {
    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    let printable: Vec<Vec<String>> = rows
        .into_iter()
        .map(|r| {
            let mut cols = Vec::with_capacity(r.cells.len() + 1);
            cols.push(r.number.to_string());
            cols.extend(r.cells);
            cols
        })
        .collect();
    for row in &printable {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.len());
            }
        }
    }

    let line = |cols: &[String]| {
        cols.iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(header));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &printable {
        println!("{}", line(row));
    }
}
