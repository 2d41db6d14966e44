use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use trustfin::config::AppConfig;
use trustfin::error::AppError;
use trustfin::missions::{MissionIntent, MissionService};
use trustfin::notifications::unread_count;
use trustfin::recommend::{RecommendationResult, RecommendationService};
use trustfin::store::{JsonFileStore, StateStore, PERSONA_KEY, USER_DATA_KEY};
use trustfin::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "TrustFin Engine",
    about = "Score loan products, tailor credit missions, and track progress from the command line",
    version
)]
struct Cli {
    /// Emit machine-readable JSON instead of the text rendering
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the state file with a sample user and persona
    Seed(SeedArgs),
    /// Rank the product catalog for the stored user
    Recommend,
    /// Breakdown for a single product
    Product {
        /// Catalog product id, e.g. p1
        id: String,
    },
    /// Generate, list, and advance improvement missions
    Missions {
        #[command(subcommand)]
        command: MissionCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MissionCommand {
    /// Tailor a new mission for a stated intent
    Generate {
        /// One of: limit, rate, period, method
        intent: String,
    },
    /// Show stored missions with their reward preview
    List,
    /// Re-check tracking rules against current state
    Advance,
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Annual income in the catalog's currency unit
    #[arg(long, default_value_t = 4000.0)]
    income: f64,
    /// Credit score (0..=1000)
    #[arg(long, default_value_t = 820)]
    credit_score: u16,
    /// Employment type: regular, business_owner, or other
    #[arg(long, default_value = "regular")]
    employment: String,
    /// Loan purpose: living, refinance, housing, or business
    #[arg(long, default_value = "living")]
    purpose: String,
    /// Measured debt ratio percentage; omitted means estimated
    #[arg(long)]
    dsr: Option<f64>,
    /// Accumulated reward points
    #[arg(long, default_value_t = 0)]
    points: u64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let store = Arc::new(JsonFileStore::new(config.state_path.clone()));
    info!(state_path = %config.state_path.display(), "state store ready");

    match cli.command {
        Command::Seed(args) => seed(store.as_ref(), &args),
        Command::Recommend => recommend(store, cli.json),
        Command::Product { id } => product_detail(store, &id, cli.json),
        Command::Missions { command } => missions(store, command, cli.json),
    }
}

fn seed(store: &dyn StateStore, args: &SeedArgs) -> Result<(), AppError> {
    let mut user = json!({
        "income": args.income.to_string(),
        "creditScore": args.credit_score.to_string(),
        "employmentType": args.employment,
        "loanPurpose": args.purpose,
    });
    if let Some(dsr) = args.dsr {
        user["dsr"] = json!(dsr);
    }
    store.put(USER_DATA_KEY, user).map_err(AppError::from)?;

    let persona = json!({
        "accounts": [
            { "bank": "Woori Bank", "balance": 12_500_000u64 },
            { "bank": "Kakao Bank", "balance": 3_200_000u64 },
        ],
        "points": args.points,
    });
    store.put(PERSONA_KEY, persona).map_err(AppError::from)?;

    info!(income = args.income, credit_score = args.credit_score, "seeded demo state");
    println!("Seeded user and persona.");
    Ok(())
}

fn recommend(store: Arc<JsonFileStore>, as_json: bool) -> Result<(), AppError> {
    let service = RecommendationService::new(store);
    let results = service.recommend()?;

    if results.is_empty() {
        println!("No stored user data. Run `seed` first.");
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results).map_err(|err| {
            AppError::Store(trustfin::store::StoreError::Serialization(err))
        })?);
        return Ok(());
    }

    info!(products = results.len(), "ranked catalog");
    for result in &results {
        render_result(result);
    }
    Ok(())
}

fn product_detail(store: Arc<JsonFileStore>, id: &str, as_json: bool) -> Result<(), AppError> {
    let service = RecommendationService::new(store);
    let Some(result) = service.product_detail(id)? else {
        println!("No stored user data. Run `seed` first.");
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result).map_err(|err| {
            AppError::Store(trustfin::store::StoreError::Serialization(err))
        })?);
        return Ok(());
    }

    render_result(&result);
    for contribution in &result.contributions {
        println!("    {:+} {:?}: {}", contribution.points, contribution.factor, contribution.note);
    }
    for counterfactual in &result.counterfactuals {
        println!("    [{:?}] {}", counterfactual.kind, counterfactual.text);
        for sub in &counterfactual.sub_missions {
            println!("        - {}", sub.text);
        }
    }
    Ok(())
}

fn render_result(result: &RecommendationResult) {
    println!(
        "{:>2} | {} {} | rate {:.2}% | limit {} ",
        result.match_score,
        result.product.bank_name,
        result.product.product_name,
        result.final_rate,
        result.final_limit,
    );
}

fn missions(
    store: Arc<JsonFileStore>,
    command: MissionCommand,
    as_json: bool,
) -> Result<(), AppError> {
    let service = MissionService::new(Arc::clone(&store));

    match command {
        MissionCommand::Generate { intent } => {
            let Some(intent) = MissionIntent::parse(&intent) else {
                println!("Unknown intent '{intent}'. Use limit, rate, period, or method.");
                return Ok(());
            };
            match service.generate(intent)? {
                Some(mission) => {
                    info!(mission_id = %mission.id, intent = intent.label(), "mission generated");
                    println!("{} ({})", mission.text, mission.id);
                    for sub in &mission.sub_missions {
                        println!("  - {}", sub.text);
                    }
                }
                None => println!("No stored user data. Run `seed` first."),
            }
        }
        MissionCommand::List => {
            let missions = service.load_missions()?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&missions).map_err(|err| {
                    AppError::Store(trustfin::store::StoreError::Serialization(err))
                })?);
                return Ok(());
            }
            for mission in &missions {
                let reward = service.reward_for(mission)?;
                println!(
                    "{} | {} | {} pts on completion{}",
                    mission.id,
                    mission.text,
                    reward.final_point,
                    if reward.is_high_reward { " (high reward)" } else { "" },
                );
                for sub in &mission.sub_missions {
                    let mark = if sub.is_completed() { "x" } else { " " };
                    println!("  [{mark}] {}", sub.text);
                }
            }
        }
        MissionCommand::Advance => {
            let events = service.advance_all()?;
            info!(completed = events.len(), "mission progress checked");
            if events.is_empty() {
                println!("Nothing newly completed.");
            } else {
                for event in &events {
                    println!("Completed: {}", event.text);
                }
                println!("Unread notifications: {}", unread_count(store.as_ref())?);
            }
        }
    }

    Ok(())
}
