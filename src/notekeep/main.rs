use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use notekeep::api::NotekeepApi;
use notekeep::config::{NotekeepConfig, CONFIG_KEYS};
use notekeep::error::{NotekeepError, Result};
use notekeep::image::data_url_from_path;
use notekeep::model::{ImageUpdate, NoteDraft, NoteId, NotePatch, SortOrder};
use notekeep::query::Filter;
use notekeep::store::fs_backend::FsBackend;
use std::path::PathBuf;

mod args;
mod cli;
use args::{CategoryAction, Cli, Commands};
use cli::print::{print_categories, print_full_notes, print_messages, print_notes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NotekeepApi<FsBackend>,
    config: NotekeepConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            image,
            category,
            tags,
            pin,
        }) => handle_create(&mut ctx, title, content, image, category, tags, pin),
        Some(Commands::List { filter, search }) => handle_list(&mut ctx, filter, search),
        Some(Commands::Search { term, filter }) => handle_list(&mut ctx, filter, Some(term)),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Edit {
            id,
            title,
            content,
            image,
            remove_image,
            category,
            tags,
            clear_tags,
        }) => {
            let image = match (image, remove_image) {
                (Some(path), _) => ImageUpdate::SetTo(data_url_from_path(&path)?),
                (None, true) => ImageUpdate::Cleared,
                (None, false) => ImageUpdate::Unchanged,
            };
            let tags = if clear_tags {
                Some(Vec::new())
            } else if tags.is_empty() {
                None
            } else {
                Some(tags)
            };
            let patch = NotePatch {
                title,
                content,
                image,
                category,
                tags,
                pinned: None,
            };
            handle_edit(&mut ctx, id, patch)
        }
        Some(Commands::Delete { ids }) => handle_each(&mut ctx, ids, |api, id| api.delete_note(id)),
        Some(Commands::Pin { ids }) => handle_each(&mut ctx, ids, |api, id| api.pin_note(id)),
        Some(Commands::Unpin { ids }) => handle_each(&mut ctx, ids, |api, id| api.unpin_note(id)),
        Some(Commands::Archive { ids }) => {
            handle_each(&mut ctx, ids, |api, id| api.toggle_archived(id))
        }
        Some(Commands::Sort { order }) => handle_sort(&mut ctx, order),
        Some(Commands::Dictate { id, fragments }) => {
            let result = ctx.api.append_transcript(id, fragments.as_slice())?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Category { action }) => handle_category(&mut ctx, action),
        Some(Commands::Theme { name }) => handle_theme(&mut ctx, name),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "notekeep", "notekeep")
            .ok_or_else(|| NotekeepError::Store("Could not determine data directory".into()))?
            .data_dir()
            .to_path_buf(),
    };
    debug!("data dir: {}", data_dir.display());

    let config = NotekeepConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {}", e);
        NotekeepConfig::default()
    });

    let api = NotekeepApi::open(FsBackend::new(data_dir.clone()));

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_create(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    image: Option<PathBuf>,
    category: Option<String>,
    tags: Vec<String>,
    pin: bool,
) -> Result<()> {
    let mut draft = NoteDraft::new(title.unwrap_or_default(), content.unwrap_or_default())
        .with_tags(tags)
        .pinned(pin);
    if let Some(path) = image {
        draft = draft.with_image(data_url_from_path(&path)?);
    }
    if let Some(category) = category {
        draft = draft.with_category(category);
    }

    let result = ctx.api.create_note(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>, search: Option<String>) -> Result<()> {
    let filter: Filter = filter
        .as_deref()
        .unwrap_or(&ctx.config.default_filter)
        .parse()
        .unwrap_or_default();
    let term = search.unwrap_or_default();

    let result = ctx.api.list_notes(&filter, &term)?;
    print_notes(
        &result.listed_notes,
        ctx.config.preview_length,
        !term.trim().is_empty(),
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<NoteId>) -> Result<()> {
    let result = ctx.api.view_notes(&ids)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: NoteId, patch: NotePatch) -> Result<()> {
    if patch.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }
    let result = ctx.api.update_note(id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_each<F>(ctx: &mut AppContext, ids: Vec<NoteId>, mut op: F) -> Result<()>
where
    F: FnMut(&mut NotekeepApi<FsBackend>, NoteId) -> Result<notekeep::api::CmdResult>,
{
    for id in ids {
        let result = op(&mut ctx.api, id)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, order: Option<String>) -> Result<()> {
    let order: SortOrder = match order {
        Some(name) => name.parse().map_err(NotekeepError::Api)?,
        None => ctx.config.default_sort,
    };
    let result = ctx.api.sort_notes(order)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_category(ctx: &mut AppContext, action: Option<CategoryAction>) -> Result<()> {
    let result = match action {
        None | Some(CategoryAction::List) => ctx.api.categories()?,
        Some(CategoryAction::Add { name }) => ctx.api.add_category(&name)?,
    };
    print_messages(&result.messages);
    if result.messages.is_empty() {
        print_categories(&result.categories);
    }
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, name: Option<String>) -> Result<()> {
    let result = match name {
        Some(name) => ctx.api.set_theme(&name)?,
        None => ctx.api.theme()?,
    };
    if result.messages.is_empty() {
        if let Some(theme) = &result.theme {
            println!("{}", theme);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, ctx.config.get(key).unwrap_or_default());
            }
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Some(value) => println!("{} = {}", key, value),
            None => println!("Unknown config key: {}", key),
        },
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{} = {}", key, ctx.config.get(&key).unwrap_or_default());
        }
    }
    Ok(())
}
