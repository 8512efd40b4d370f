use anyhow::Context;
use hypixel::GameType;

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "game-type",
    description = "look up game types by id or name, or list them all"
)]
pub struct Options {
    #[argh(positional, description = "the game type id or type name")]
    query: Option<String>,
}

pub fn exec(options: Options) -> anyhow::Result<()> {
    let query = match options.query.as_deref() {
        Some(query) => query,
        None => {
            for game_type in GameType::all() {
                print_game_type(game_type);
            }
            return Ok(());
        }
    };

    let game_type = match query.parse::<u32>() {
        Ok(id) => GameType::from_id(id),
        Err(_) => GameType::from_type_name(&query.to_ascii_uppercase()),
    }
    .with_context(|| format!("unknown game type '{query}'"))?;
    print_game_type(game_type);

    Ok(())
}

fn print_game_type(game_type: &GameType) {
    println!(
        "{:>2} {:<16} {:<16} {}",
        game_type.id, game_type.type_name, game_type.database_name, game_type.clean_name
    );
}
