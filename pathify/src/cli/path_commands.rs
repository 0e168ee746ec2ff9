// pathify/src/cli/path_commands.rs
use std::io::{self, Write};

use crate::application::selector::Selector;
use crate::cli::error::CliResult;
use crate::cli::report_error;
use crate::domain::error::DomainError;
use crate::domain::list_kind::ListKind;
use crate::infrastructure::di::ServiceContainer;
use tracing::{debug, instrument};

#[instrument(skip(services))]
pub fn add(services: &ServiceContainer) -> CliResult<()> {
    let path = services.registry_service.add_current()?;
    println!("Added path: {}", path);
    Ok(())
}

#[instrument(skip(services))]
pub fn mark(services: &ServiceContainer) -> CliResult<()> {
    let path = services.registry_service.mark_current()?;
    println!("Marked path: {}", path);
    Ok(())
}

/// Fuzzy search a list and jump to the selection.
///
/// The dialog runs on stderr, stdout receives only the selected path (no
/// newline) so a wrapping shell function can `cd` into it.
#[instrument(skip(services))]
pub fn find(services: &ServiceContainer, kind: ListKind) -> CliResult<()> {
    let paths = services.registry_service.list_for(kind)?;
    debug!("Loaded {} {} paths", paths.len(), kind);

    let stdin = io::stdin();
    let selected = Selector::new(services.matcher.as_ref(), stdin.lock(), io::stderr())
        .run(&paths)?;

    let Some(path) = selected else {
        debug!("No selection made");
        return Ok(());
    };

    let mut stdout = io::stdout();
    write!(stdout, "{}", path)?;
    stdout.flush()?;

    // only affects this process, the calling shell has to cd itself
    std::env::set_current_dir(&path).map_err(|source| DomainError::ChangeDirectory {
        path: path.clone(),
        source,
    })?;
    debug!("Changed working directory to {}", path);
    Ok(())
}

#[instrument(skip(services))]
pub fn delete(services: &ServiceContainer, path: Option<String>, no_color: bool) -> CliResult<()> {
    let Some(path) = path else {
        println!("Usage: pathify delete <path>");
        return Ok(());
    };

    // both lists have been attempted either way, so the confirmation follows
    match services.registry_service.delete_path(&path) {
        Ok(removed) => debug!("Removed {} entries", removed),
        Err(e) => report_error(&e.to_string(), no_color),
    }
    println!("Deleted path: {}", path);
    Ok(())
}
