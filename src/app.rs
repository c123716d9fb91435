use crate::environment::entities::{AuthData, FavoriteData, ReviewData, ReviewPost};
use crate::environment::types::{CityName, Sorting};
use crate::environment::{Environment, Repository};
use crate::helper::{capitalize, pluralize, rating_width, review_date};
use crate::routing::{guard, AppRoute, Guard};
use crate::store::{selectors, Action, Store};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "six-cities", about = "Browse the Six Cities rental listings")]
pub struct Cli {
    /// Backend base url, overrides the stored config
    #[arg(long, env = "SIX_CITIES_BASE_URL")]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the offers of a city
    Offers {
        #[arg(long, default_value = "Paris")]
        city: CityName,
        #[arg(long, value_enum, default_value_t = SortArg::Popular)]
        sort: SortArg,
    },
    /// Show an offer with its neighbourhood and reviews
    Offer { id: String },
    Favorites,
    Favorite {
        id: String,
        /// Remove instead of add
        #[arg(long)]
        remove: bool,
    },
    Review {
        id: String,
        #[arg(long)]
        rating: u8,
        comment: String,
    },
    Login { email: String, password: String },
    Logout,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Popular,
    LowToHigh,
    HighToLow,
    TopRated,
}

impl From<SortArg> for Sorting {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Popular => Sorting::Popular,
            SortArg::LowToHigh => Sorting::LowToHigh,
            SortArg::HighToLow => Sorting::HighToLow,
            SortArg::TopRated => Sorting::TopRated,
        }
    }
}

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Could not start runtime: {e:?}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(session(cli)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn session(cli: Cli) -> Result<(), String> {
    let repository = Repository::new()?;
    let mut config = repository.config().with_env_overrides();
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    let environment = Environment::live(config, repository)?;
    let mut store = Store::new(environment);

    // unauthenticated is fine for most commands
    let _ = store.check_auth().await;

    match cli.command {
        Command::Offers { city, sort } => {
            store.dispatch(Action::ChangeCity(city));
            store.dispatch(Action::ChangeSorting(sort.into()));
            store.fetch_offers().await.map_err(|e| e.to_string())?;
            let offers = selectors::city_offers(store.state());
            println!("{} places to stay in {city}", offers.len());
            for offer in offers {
                let mark = if offer.is_favorite { "*" } else { " " };
                println!(
                    "{mark} {} €{}/night {}% {} ({})",
                    offer.id,
                    offer.price,
                    rating_width(offer.rating),
                    offer.title,
                    capitalize(&offer.kind)
                );
            }
        }
        Command::Offer { id } => {
            let offer = store.load_offer_page(id).await.map_err(|e| e.to_string())?;
            println!("{} €{}/night, {}", offer.title, offer.price, offer.city.name);
            println!("{}", offer.description);
            println!(
                "{}, {}, max {}, hosted by {}",
                capitalize(&offer.kind),
                pluralize(offer.bedrooms, "Bedroom"),
                pluralize(offer.max_adults, "adult"),
                offer.host.name
            );
            if !offer.goods.is_empty() {
                println!("What's inside: {}", offer.goods.join(", "));
            }
            println!("Other places in the neighbourhood:");
            for place in selectors::near_places(store.state()) {
                println!("  {} €{} {}", place.id, place.price, place.title);
            }
            let reviews = selectors::latest_reviews(store.state());
            println!("Reviews · {}", store.state().reviews.reviews.len());
            for review in reviews {
                println!(
                    "  {} ({}/5, {}): {}",
                    review.author.name,
                    review.rating,
                    review_date(&review.date),
                    review.comment
                );
            }
        }
        Command::Favorites => {
            navigate(&mut store, AppRoute::Favorites)?;
            store.fetch_favorites().await.map_err(|e| e.to_string())?;
            for (city, offers) in selectors::favorites_by_city(store.state()) {
                println!("{city}");
                for offer in offers {
                    println!("  {} €{} {}", offer.id, offer.price, offer.title);
                }
            }
        }
        Command::Favorite { id, remove } => {
            let changed = store
                .change_favorite(FavoriteData::new(id, !remove))
                .await
                .map_err(|e| e.to_string())?;
            match changed {
                Some(offer) if offer.is_favorite => println!("Added {}", offer.title),
                Some(offer) => println!("Removed {}", offer.title),
                None => return Err("Please log in first".to_string()),
            }
        }
        Command::Review {
            id,
            rating,
            comment,
        } => {
            let review = ReviewData { comment, rating };
            if !review.is_valid() {
                return Err(format!(
                    "A review needs {}-{} characters and a rating of {}-{}",
                    ReviewData::COMMENT_MIN_LENGTH,
                    ReviewData::COMMENT_MAX_LENGTH,
                    ReviewData::MIN_RATING,
                    ReviewData::MAX_RATING
                ));
            }
            let post = ReviewPost {
                offer_id: id,
                review,
            };
            store.post_review(post).await.map_err(|e| e.to_string())?;
            println!("Review posted");
        }
        Command::Login { email, password } => {
            navigate(&mut store, AppRoute::Login)?;
            let user = store
                .log_in(AuthData { email, password })
                .await
                .map_err(|e| e.to_string())?;
            println!("Logged in as {}", user.email);
        }
        Command::Logout => {
            store.log_out().await.map_err(|e| e.to_string())?;
            println!("Logged out");
        }
    }

    if let Some(error) = store.state().app.error.clone() {
        log::warn!("{error}");
        store.clear_error().await.map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Follow the route guard before entering a page
fn navigate(store: &mut Store, route: AppRoute) -> Result<(), String> {
    let status = store.state().user.authorization_status;
    match guard(&route, status) {
        Guard::Continue => {
            store.dispatch(Action::RedirectToRoute(route));
            Ok(())
        }
        Guard::Redirect(AppRoute::Login) => {
            store.dispatch(Action::RedirectToRoute(AppRoute::Login));
            Err("Please log in first".to_string())
        }
        Guard::Redirect(other) => {
            store.dispatch(Action::RedirectToRoute(other.clone()));
            Err(format!("Nothing to do here, continue at {other}"))
        }
    }
}
