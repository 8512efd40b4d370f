use super::OutputType;
use anyhow::Context;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "guild", description = "get a guild")]
pub struct Options {
    #[argh(option, long = "name", short = 'n', description = "the guild name")]
    name: Option<String>,

    #[argh(option, long = "id", description = "the guild id")]
    id: Option<String>,

    #[argh(
        option,
        long = "player",
        short = 'p',
        description = "the uuid of a player in the guild"
    )]
    player: Option<String>,

    #[argh(
        switch,
        long = "find",
        short = 'f',
        description = "only look up the guild id, by name or player"
    )]
    find: bool,

    #[argh(
        option,
        long = "output-type",
        short = 't',
        default = "OutputType::Human",
        description = "the output type"
    )]
    output_type: OutputType,
}

/// How to select a guild
#[derive(Debug, PartialEq, Eq)]
enum Selector<'a> {
    Name(&'a str),
    Id(&'a str),
    Player(&'a str),
}

impl<'a> Selector<'a> {
    /// Pick the one selector given. `--find` only works by name or player.
    fn from_options(options: &'a Options) -> anyhow::Result<Self> {
        if options.find && options.id.is_some() {
            anyhow::bail!("--find cannot be used with --id");
        }

        match (
            options.name.as_deref(),
            options.id.as_deref(),
            options.player.as_deref(),
        ) {
            (Some(name), None, None) => Ok(Self::Name(name)),
            (None, Some(id), None) => Ok(Self::Id(id)),
            (None, None, Some(player)) => Ok(Self::Player(player)),
            _ if options.find => anyhow::bail!("--find needs exactly one of --name or --player"),
            _ => anyhow::bail!("exactly one of --name, --id, or --player is needed"),
        }
    }
}

pub async fn exec(client: &hypixel::Client, options: Options) -> anyhow::Result<()> {
    let selector = Selector::from_options(&options)?;

    if options.find {
        let id = match selector {
            Selector::Name(name) => client.find_guild_by_name(name).await?,
            Selector::Player(player) => client.find_guild_by_uuid(player).await?,
            Selector::Id(_) => anyhow::bail!("--find cannot be used with --id"),
        };

        match options.output_type {
            OutputType::Human => match id {
                Some(id) => println!("{id}"),
                None => println!("No Guild"),
            },
            OutputType::Json => super::print_json(&id)?,
        }

        return Ok(());
    }

    let guild = match selector {
        Selector::Name(name) => client.get_guild_by_name(name).await,
        Selector::Id(id) => client.get_guild_by_id(id).await,
        Selector::Player(player) => client.get_guild_by_player(player).await,
    }
    .context("failed to get guild")?;

    match options.output_type {
        OutputType::Human => {
            println!("Name: {}", guild.name);
            println!("Id: {}", guild.id);
            if let Some(tag) = guild.tag.as_deref() {
                println!("Tag: [{tag}]");
            }
            if let Some(description) = guild.description.as_deref() {
                println!("Description: {description}");
            }
            println!("Created: {}", guild.created);
            println!("Exp: {}", guild.exp);
            println!("Members: {}", guild.members.len());
            println!();

            for (i, member) in guild.members.iter().enumerate() {
                println!("{}) {}", i + 1, member.uuid);
                println!("Rank: {}", member.rank);
                println!("Joined: {}", member.joined);
                println!("Weekly Exp: {}", member.weekly_exp());
                println!();
            }
        }
        OutputType::Json => super::print_json(&guild)?,
    }

    Ok(())
}
