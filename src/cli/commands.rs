//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ClassificationService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{is_conventional_tag_id, Tag, TreeDisplay};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => _config(cli, command),
        Some(command) => {
            let container = build_container(cli)?;
            let service = container.classification.as_ref();
            match command {
                Commands::Tree => _tree(service),
                Commands::Show { id } => _show(service, id),
                Commands::Descendants { id } => _descendants(service, id),
                Commands::Specified { level, ids, all } => _specified(service, level, ids, *all),
                Commands::Deepest { ids } => _deepest(service, ids),
                Commands::Level { level } => _level(service, level),
                Commands::Subject { ids } => _subject(service, ids),
                Commands::Check => _check(service),
                Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
            }
        }
        None => Ok(()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load()?.with_overrides(cli.site, cli.tags_file.clone());
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    Ok(ServiceContainer::new(load_settings(cli)?)?)
}

fn tag_line(tag: &Tag) -> String {
    format!("{} [{}] {}", tag.id, tag.tag_type, tag.title)
}

fn ensure_level(service: &ClassificationService, level: &str) -> CliResult<()> {
    if service.hierarchy().iter().any(|name| name == level) {
        Ok(())
    } else {
        Err(CliError::InvalidArgs(format!(
            "unknown level '{}', expected one of: {}",
            level,
            service.hierarchy().join(", ")
        )))
    }
}

#[instrument(skip(service))]
fn _tree(service: &ClassificationService) -> CliResult<()> {
    output::info(&service.to_tree_string());
    Ok(())
}

#[instrument(skip(service))]
fn _show(service: &ClassificationService, id: &str) -> CliResult<()> {
    let tag = service
        .get_by_id(id)
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;

    output::header(&tag.title);
    output::detail(&format!("id:     {}", tag.id));
    output::detail(&format!("type:   {}", tag.tag_type));
    output::detail(&format!("level:  {}", tag.level));
    output::detail(&format!(
        "parent: {}",
        tag.parent.as_ref().map_or("-", |p| p.as_str())
    ));
    let ancestors = service.ancestors(id);
    if !ancestors.is_empty() {
        let path = ancestors.iter().rev().map(|ancestor| &ancestor.id).join(" > ");
        output::detail(&format!("path:   {} > {}", path, tag.id));
    }
    let children = service
        .descendants(id)
        .filter(|child| child.level == tag.level + 1)
        .map(|child| &child.id)
        .join(", ");
    if !children.is_empty() {
        output::detail(&format!("children: {}", children));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _descendants(service: &ClassificationService, id: &str) -> CliResult<()> {
    let tag = service
        .get_by_id(id)
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;
    let descendants = service.get_descendants(id);
    if descendants.is_empty() {
        output::warning(&format!("{} has no descendants", id));
        return Ok(());
    }
    for descendant in descendants {
        let indent = "  ".repeat(descendant.level - tag.level - 1);
        output::info(&format!("{}{}", indent, tag_line(descendant)));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _specified(
    service: &ClassificationService,
    level: &str,
    ids: &[String],
    all: bool,
) -> CliResult<()> {
    ensure_level(service, level)?;
    let found = if all {
        service.get_specified_tags(level, ids)
    } else {
        service.get_specified_tag(level, ids).into_iter().collect()
    };
    if found.is_empty() {
        output::warning(&format!("no {} tag among: {}", level, ids.join(", ")));
    }
    for tag in found {
        output::info(&tag_line(tag));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _deepest(service: &ClassificationService, ids: &[String]) -> CliResult<()> {
    match service.get_deepest_tag(ids) {
        Some(tag) => output::info(&tag_line(tag)),
        None => output::warning(&format!("no known tag among: {}", ids.join(", "))),
    }
    Ok(())
}

#[instrument(skip(service))]
fn _level(service: &ClassificationService, level: &str) -> CliResult<()> {
    ensure_level(service, level)?;
    for tag in service.tags_at_level(level) {
        output::info(&tag_line(tag));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _subject(service: &ClassificationService, ids: &[String]) -> CliResult<()> {
    output::info(&service.subject_for(ids));
    Ok(())
}

#[instrument(skip(service))]
fn _check(service: &ClassificationService) -> CliResult<()> {
    output::success(&format!(
        "{} hierarchy is valid: {} tags",
        service.site(),
        service.len()
    ));
    for level in service.hierarchy() {
        output::detail(&format!("{}: {}", level, service.tags_at_level(level).len()));
    }
    for tag in service
        .all_tags()
        .filter(|tag| !is_conventional_tag_id(tag.id.as_str()))
    {
        output::warning(&format!("tag id '{}' is not snake case", tag.id));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::action("global", &path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}
