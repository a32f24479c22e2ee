// SPDX-License-Identifier: MPL-2.0
use cine_lens::app::{self, App, MediaFactory, Message, Runtime};
use cine_lens::application::playback::{PlaybackSettings, SessionId};
use cine_lens::application::port::{CatalogueService, MediaElement};
use cine_lens::config;
use cine_lens::domain::catalogue::{GenreSelection, Movie, MovieId};
use cine_lens::error::{Error, Result};
use cine_lens::infrastructure::{
    CommandLog, EventSink, HeadlessMediaElement, HttpCatalogueClient, InMemoryCatalogue,
};
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
cine_lens - browse a movie catalogue from the terminal

USAGE:
  cine_lens [OPTIONS]

OPTIONS:
  --base-url URL     Catalogue API root (overrides settings.toml)
  --genre NAME       Show only one genre (\"all\" for every genre)
  --search TEXT      Filter by title or description
  --play ID          Open a playback session for a movie
  --demo             Use the built-in sample catalogue instead of HTTP
  --config-dir DIR   Read settings.toml from DIR
  -v, --verbose      Debug logging (RUST_LOG takes precedence)
  -h, --help         Print this help
";

struct Args {
    base_url: Option<String>,
    genre: Option<String>,
    search: Option<String>,
    play: Option<String>,
    demo: bool,
    config_dir: Option<String>,
    verbose: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        base_url: args.opt_value_from_str("--base-url")?,
        genre: args.opt_value_from_str("--genre")?,
        search: args.opt_value_from_str("--search")?,
        play: args.opt_value_from_str("--play")?,
        demo: args.contains("--demo"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        verbose: args.contains(["-v", "--verbose"]),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments {rest:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    config::paths::init_cli_override(args.config_dir.clone());
    let (config, warning) = config::load();
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    let service: Arc<dyn CatalogueService> = if args.demo {
        Arc::new(InMemoryCatalogue::sample())
    } else {
        let base_url = args.base_url.as_deref().unwrap_or(config.base_url());
        Arc::new(HttpCatalogueClient::new(base_url, config.request_timeout())?)
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(browse(args, config.playback_settings(), service))
}

/// Builds a factory whose elements post their events back into the runtime.
fn headless_factory(sender: app::MessageSender) -> MediaFactory {
    Box::new(
        move |session: SessionId, movie: &Movie| -> Box<dyn MediaElement> {
            let sender = sender.clone();
            let sink: EventSink = Box::new(move |event| {
                if sender.send(Message::Media(session, event)).is_err() {
                    log::debug!("{session} event dropped, runtime gone");
                }
            });
            Box::new(HeadlessMediaElement::new(
                movie.nominal_duration_secs(),
                CommandLog::new(),
                sink,
            ))
        },
    )
}

async fn browse(
    args: Args,
    settings: PlaybackSettings,
    service: Arc<dyn CatalogueService>,
) -> Result<()> {
    let (sender, inbox) = app::channel();
    let (app, bootstrap) = App::new(settings, headless_factory(sender));
    let mut runtime = Runtime::new(app, Arc::clone(&service), inbox);

    runtime.dispatch(bootstrap);
    runtime.settle().await;

    if let Some(error) = runtime.app().catalogue().error() {
        eprintln!("{}", error.user_message());
        return Err(Error::Catalogue(error.cause().clone()));
    }

    if let Some(genre) = args.genre.as_deref() {
        runtime.send(Message::SetGenre(GenreSelection::from_label(genre)));
    }
    if let Some(search) = args.search {
        runtime.send(Message::SetSearch(search));
    }
    runtime.settle().await;

    print_catalogue(&runtime);

    if let Some(id) = args.play {
        let id = MovieId::new(id);
        let found = runtime.app().catalogue().catalogue().find(&id).cloned();
        let movie = match found {
            Some(movie) => Some(movie),
            None => service.movie(&id).await?,
        };
        let Some(movie) = movie else {
            eprintln!("no movie with id '{id}'");
            return Ok(());
        };

        runtime.send(Message::SelectMovie(movie));
        runtime.settle().await;
        print_session(&runtime);
        runtime.send(Message::CloseSession);
    }

    Ok(())
}

fn print_catalogue(runtime: &Runtime) {
    let catalogue = runtime.app().catalogue();

    if let Some(hero) = catalogue.featured_hero() {
        println!("Featured: {} ({})", hero.title, hero.info_line());
        println!();
    }
    if !catalogue.genres().is_empty() {
        println!("Genres: {}", catalogue.genres().join(", "));
    }
    if let Some(error) = catalogue.query_error() {
        eprintln!("warning: {error}");
    }

    println!("{}", catalogue.catalogue().count_label());
    for movie in catalogue.catalogue().movies() {
        println!(
            "  {:<20} {:<32} {:>4}  {:<10} {:>4.1}",
            movie.id.as_str(), movie.title, movie.year, movie.genre, movie.rating
        );
    }
}

fn print_session(runtime: &Runtime) {
    let Some(session) = runtime.app().player().session() else {
        return;
    };

    println!();
    println!("Now playing: {}", session.movie().title);
    println!("  {}", session.movie().info_line());
    println!(
        "  {} {}",
        if session.is_playing() { "playing" } else { "paused" },
        session.time_display()
    );
    if let Some(error) = session.error() {
        println!("  {error}");
    }
}
