use clap::Parser;
use jot::application::{compose, init::init, ConfigService, Draft, NoteStore};
use jot::cli::{format_note, format_note_list, Cli, Commands};
use jot::error::{NotesError, Result};
use jot::infrastructure::Workspace;
use std::io::{self, BufRead, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("JOT_LOG", "warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized jot workspace at {}", path.display());
            Ok(())
        }
        Commands::New {
            title,
            content,
            edit,
        } => {
            let workspace = Workspace::discover()?;
            let mut draft = Draft::new(title, content);
            if edit {
                draft = compose(&workspace, &draft)?;
            }

            let mut store = NoteStore::open(workspace.storage());
            match store.create(&draft.title, &draft.content) {
                Some(note) => println!("Created note {}", note.id),
                None => println!("Nothing to save: a note needs a title or content"),
            }
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            edit,
        } => {
            let workspace = Workspace::discover()?;
            let mut store = NoteStore::open(workspace.storage());
            let existing = store
                .get(&id)
                .cloned()
                .ok_or_else(|| NotesError::NoteNotFound(id.clone()))?;

            let mut draft = Draft::new(
                title.unwrap_or(existing.title),
                content.unwrap_or(existing.content),
            );
            if edit {
                draft = compose(&workspace, &draft)?;
            }

            let note = store.update(&id, &draft.title, &draft.content)?;
            println!("Updated note {}", note.id);
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let workspace = Workspace::discover()?;
            let mut store = NoteStore::open(workspace.storage());

            if store.get(&id).is_none() {
                println!("No note with id '{}'", id);
                return Ok(());
            }

            if !yes && !confirm("Delete this note? This action cannot be undone.")? {
                println!("Cancelled");
                return Ok(());
            }

            store.delete(&id);
            println!("Deleted note {}", id);
            Ok(())
        }
        Commands::List { query } => {
            let workspace = Workspace::discover()?;
            let store = NoteStore::open(workspace.storage());
            let query = query.unwrap_or_default();

            println!(
                "{}",
                format_note_list(&store.search(&query), Some(query.as_str()))
            );
            Ok(())
        }
        Commands::Show { id } => {
            let workspace = Workspace::discover()?;
            let store = NoteStore::open(workspace.storage());
            let note = store
                .get(&id)
                .ok_or_else(|| NotesError::NoteNotFound(id.clone()))?;

            print!("{}", format_note(note));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: jot config [--list | <key> [<value>]]");
                println!("Valid keys: editor, created");
            }
            Ok(())
        }
    }
}

/// Ask a yes/no question on stdin; anything but y/yes declines
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
