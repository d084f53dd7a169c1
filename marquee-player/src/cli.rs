//! Headless front end: runs the controllers to completion and renders what
//! the corresponding view would show.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use marquee_core::CatalogService;
use marquee_model::{GenreCatalog, GenreId, Movie, MovieId, stars};
use serde_json::json;

use crate::domains::details::DetailsController;
use crate::domains::library::ShelfKey;
use crate::home::{HomeController, HomeView};
use crate::settings::BrowseSettings;

#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Browse the movie catalog from the terminal")]
pub struct Cli {
    /// Configuration file (TOML, or JSON by extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the home shelves, or the genre grid when genres are selected
    Home {
        /// Genre id to select; repeat for more
        #[arg(long = "genre", value_name = "ID")]
        genres: Vec<GenreId>,

        /// Load the top rated shelf too
        #[arg(long)]
        top_rated: bool,
    },
    /// Search titles by free text
    Search { query: String },
    /// Show the detail page of one title
    Details { id: MovieId },
    /// List the genre reference set
    Genres,
}

/// Runs `command` and returns its rendered output.
pub async fn execute(
    command: &Command,
    as_json: bool,
    catalog: Arc<dyn CatalogService>,
    settings: BrowseSettings,
) -> anyhow::Result<String> {
    match command {
        Command::Home { genres, top_rated } => {
            let mut home = HomeController::new(catalog, settings);
            home.start();
            if *top_rated {
                home.load_shelf(ShelfKey::TopRated);
            }
            for genre in genres {
                home.toggle_genre(*genre);
            }
            home.run_until_idle().await;
            let output = render_home(&home, as_json)?;
            home.shutdown();
            Ok(output)
        }
        Command::Search { query } => {
            let mut home = HomeController::new(catalog, settings);
            home.set_query(query.as_str());
            home.run_until_idle().await;
            if let Some(error) = &home.search().last_error {
                bail!("search for {query:?} failed: {error}");
            }
            let output = if as_json {
                to_json(&json!({
                    "query": home.query(),
                    "results": home.search_results(),
                }))?
            } else {
                let mut out = String::new();
                if home.search_results().is_empty() {
                    writeln!(out, "No results for {query:?}")?;
                }
                for movie in home.search_results() {
                    writeln!(out, "{}", movie_line(movie))?;
                }
                out
            };
            home.shutdown();
            Ok(output)
        }
        Command::Details { id } => {
            let mut page = DetailsController::new(catalog, settings);
            page.open(*id);
            page.run_until_idle().await;
            let output = render_details(&page, *id, as_json)?;
            page.shutdown();
            Ok(output)
        }
        Command::Genres => {
            let mut home = HomeController::new(catalog, settings);
            home.load_genres();
            home.run_until_idle().await;
            let output = render_genres(home.genres(), as_json)?;
            home.shutdown();
            Ok(output)
        }
    }
}

fn to_json(value: &serde_json::Value) -> anyhow::Result<String> {
    let mut out =
        serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    out.push('\n');
    Ok(out)
}

fn movie_line(movie: &Movie) -> String {
    let year = movie
        .release_year()
        .map(|year| format!(" ({year})"))
        .unwrap_or_default();
    format!(
        "{:>8}  {}{}  {}",
        movie.id.get(),
        movie.title,
        year,
        stars(movie.vote_average)
    )
}

fn render_home(
    home: &HomeController,
    as_json: bool,
) -> anyhow::Result<String> {
    let view = home.view();
    if as_json {
        let body = match &view {
            HomeView::Search { query, results } => {
                json!({ "mode": "search", "query": query, "movies": results })
            }
            HomeView::Filtered { selection, movies } => json!({
                "mode": "filtered",
                "genres": selection.iter().collect::<Vec<_>>(),
                "movies": movies,
            }),
            HomeView::Sections(shelves) => json!({
                "mode": "sections",
                "shelves": shelves
                    .iter()
                    .map(|shelf| json!({
                        "title": shelf.key.title(),
                        "movies": shelf.movies,
                    }))
                    .collect::<Vec<_>>(),
            }),
        };
        return to_json(&body);
    }

    let mut out = String::new();
    match &view {
        HomeView::Search { query, results } => {
            writeln!(out, "Results for {query:?}")?;
            for movie in *results {
                writeln!(out, "{}", movie_line(movie))?;
            }
        }
        HomeView::Filtered { selection, movies } => {
            let names: Vec<String> = selection
                .iter()
                .map(|id| {
                    home.genres()
                        .name_of(id)
                        .map(str::to_string)
                        .unwrap_or_else(|| id.to_string())
                })
                .collect();
            writeln!(out, "Genres: {}", names.join(", "))?;
            if movies.is_empty() {
                writeln!(out, "No loaded titles match")?;
            }
            for movie in *movies {
                writeln!(out, "{}", movie_line(movie))?;
            }
        }
        HomeView::Sections(shelves) => {
            for shelf in shelves {
                writeln!(out, "== {} ==", shelf.key.title())?;
                for movie in shelf.movies {
                    writeln!(out, "{}", movie_line(movie))?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(out)
}

fn render_details(
    page: &DetailsController,
    id: MovieId,
    as_json: bool,
) -> anyhow::Result<String> {
    let Some(details) = page.state().details.as_ref() else {
        bail!("could not load details for movie {id}");
    };

    if as_json {
        return to_json(&json!({
            "details": details,
            "runtime": page.runtime_label(),
            "stars": page.stars_label(),
            "age_rating": page.age_rating_label(),
            "cast": page.state().cast,
            "trailer": page.trailer_url(),
            "imdb": page.imdb_link(),
            "poster": page.poster_url(),
        }));
    }

    let mut out = String::new();
    let year = details
        .movie
        .release_year()
        .map(|year| format!(" ({year})"))
        .unwrap_or_default();
    writeln!(out, "{}{}", details.title(), year)?;
    if let Some(tagline) = &details.tagline {
        writeln!(out, "{tagline}")?;
    }

    let mut facts = Vec::new();
    if let Some(runtime) = page.runtime_label() {
        facts.push(runtime);
    }
    if let Some(rating) = page.age_rating_label() {
        facts.push(rating.to_string());
    }
    if let Some(stars) = page.stars_label() {
        facts.push(stars);
    }
    writeln!(out, "{}", facts.join("  "))?;

    let genres: Vec<&str> = details.genre_names().collect();
    if !genres.is_empty() {
        writeln!(out, "Genres: {}", genres.join(", "))?;
    }
    if let Some(overview) = page.overview_text() {
        writeln!(out, "\n{overview}")?;
    }

    if !page.state().cast.is_empty() {
        writeln!(out, "\nCast")?;
        for actor in &page.state().cast {
            match &actor.character {
                Some(character) => {
                    writeln!(out, "  {} as {character}", actor.name)?
                }
                None => writeln!(out, "  {}", actor.name)?,
            }
        }
    }

    writeln!(out)?;
    match page.trailer_url() {
        Some(url) => writeln!(out, "Trailer: {url}")?,
        None => writeln!(out, "Trailer: no trailer")?,
    }
    if let Some(url) = page.imdb_link() {
        writeln!(out, "IMDb: {url}")?;
    }
    Ok(out)
}

fn render_genres(
    genres: &GenreCatalog,
    as_json: bool,
) -> anyhow::Result<String> {
    if as_json {
        return to_json(&json!(genres.iter().collect::<Vec<_>>()));
    }
    let mut out = String::new();
    for genre in genres.iter() {
        writeln!(out, "{:>6}  {}", genre.id.get(), genre.name)?;
    }
    Ok(out)
}
