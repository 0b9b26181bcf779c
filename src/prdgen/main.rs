use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use prdgen::api::{ConfigAction, PrdApi};
use prdgen::clipboard::copy_to_clipboard;
use prdgen::commands::{CmdMessage, CmdResult, FieldEntry, MessageLevel};
use prdgen::error::{PrdError, Result};
use prdgen::model::{Format, ListField, ScalarField, SectionKey};
use prdgen::store::fs::FileStore;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
use args::{Cli, Commands, ItemCmd, SectionCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(resolve_path(&cli)?);
    let mut api = PrdApi::new(store)?;

    match cli.command {
        Commands::Set { field, value } => handle_set(&mut api, field, value),
        Commands::Item(cmd) => handle_item(&mut api, cmd),
        Commands::Section(cmd) => handle_section(&mut api, cmd),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
        Commands::Render { format } => handle_render(&api, format),
        Commands::Copy { format } => handle_copy(&api, format),
        Commands::Export { format, path } => handle_export(&api, format, path),
        Commands::Fields => handle_fields(&api),
        Commands::Status => handle_status(&api),
        Commands::Reset { yes } => handle_reset(&mut api, yes),
    }
}

/// Document location, most specific wins:
/// `--file`, then `$PRDGEN_HOME`, then the per-user data dir with
/// `--global`, then `./.prdgen/prd.json`.
fn resolve_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }
    if let Ok(home) = std::env::var("PRDGEN_HOME") {
        return Ok(PathBuf::from(home).join("prd.json"));
    }
    if cli.global {
        let dirs = ProjectDirs::from("com", "prdgen", "prdgen")
            .ok_or_else(|| PrdError::Api("Could not determine data dir".to_string()))?;
        return Ok(dirs.data_dir().join("prd.json"));
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(cwd.join(".prdgen").join("prd.json"))
}

fn parse_format(format: Option<String>) -> Result<Option<Format>> {
    format.as_deref().map(Format::from_str).transpose()
}

fn handle_set(api: &mut PrdApi<FileStore>, field: String, value: String) -> Result<()> {
    let field = ScalarField::from_str(&field)?;
    let result = api.set_field(field, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_item(api: &mut PrdApi<FileStore>, cmd: ItemCmd) -> Result<()> {
    let result = match cmd {
        ItemCmd::Set {
            field,
            index,
            value,
        } => api.set_list_item(ListField::from_str(&field)?, index, value)?,
        ItemCmd::Add { field, value } => api.add_list_item(ListField::from_str(&field)?, value)?,
        ItemCmd::Rm { field, index } => api.remove_list_item(ListField::from_str(&field)?, index)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_section(api: &mut PrdApi<FileStore>, cmd: SectionCmd) -> Result<()> {
    let result = match cmd {
        SectionCmd::List => api.status()?,
        SectionCmd::On { key } => api.set_section(SectionKey::from_str(&key)?, true)?,
        SectionCmd::Off { key } => api.set_section(SectionKey::from_str(&key)?, false)?,
        SectionCmd::Toggle { key } => api.toggle_section(SectionKey::from_str(&key)?)?,
    };
    print_sections(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &mut PrdApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let Some((format, phrasing)) = result.settings {
        println!("format = {}", format);
        println!("phrasing = {}", phrasing);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_render(api: &PrdApi<FileStore>, format: Option<String>) -> Result<()> {
    let result = api.render(parse_format(format)?)?;
    if let Some(document) = &result.document {
        println!("{}", document);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(api: &PrdApi<FileStore>, format: Option<String>) -> Result<()> {
    let result = api.render(parse_format(format)?)?;
    if let Some(document) = &result.document {
        copy_to_clipboard(document)?;
        println!("{}", "Document copied to clipboard.".green());
    }
    Ok(())
}

fn handle_export(
    api: &PrdApi<FileStore>,
    format: Option<String>,
    path: Option<PathBuf>,
) -> Result<()> {
    let result = api.export(parse_format(format)?, path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fields(api: &PrdApi<FileStore>) -> Result<()> {
    let result = api.fields()?;
    for entry in &result.fields {
        match entry {
            FieldEntry::Scalar { key, value } => {
                println!("{} {}", format!("{}:", key).bold(), preview(value));
            }
            FieldEntry::List { key, items } => {
                println!("{}", format!("{}:", key).bold());
                for (i, item) in items.iter().enumerate() {
                    println!("  {}. {}", i, preview(item));
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(api: &PrdApi<FileStore>) -> Result<()> {
    let result = api.status()?;
    if let Some((format, phrasing)) = result.settings {
        println!("format = {}", format);
        println!("phrasing = {}", phrasing);
        println!();
    }
    print_sections(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(api: &mut PrdApi<FileStore>, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{}",
            "This discards every field and setting. Pass --yes to confirm.".yellow()
        );
        return Ok(());
    }
    let result = api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_sections(result: &CmdResult) {
    for section in &result.sections {
        let marker = if section.enabled {
            "[x]".green()
        } else {
            "[ ]".dimmed()
        };
        println!("{} {} ({})", marker, section.label, section.key);
    }
}

fn preview(value: &str) -> String {
    if value.is_empty() {
        return "(empty)".to_string();
    }
    let flat: String = value
        .chars()
        .take(60)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if value.chars().count() > 60 {
        format!("{}…", flat)
    } else {
        flat
    }
}
