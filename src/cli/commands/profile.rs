use super::OutputType;
use hypixel::Profile;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "profile", description = "get skyblock profiles")]
pub struct Options {
    #[argh(
        positional,
        description = "the profile id, or the player uuid with --player"
    )]
    id: String,

    #[argh(
        switch,
        long = "player",
        short = 'p',
        description = "list all profiles of a player"
    )]
    player: bool,

    #[argh(
        option,
        long = "output-type",
        short = 't',
        default = "OutputType::Human",
        description = "the output type"
    )]
    output_type: OutputType,
}

pub async fn exec(client: &hypixel::Client, options: Options) -> anyhow::Result<()> {
    let profiles = if options.player {
        client.get_profiles(&options.id).await?
    } else {
        vec![client.get_profile(&options.id).await?]
    };

    match options.output_type {
        OutputType::Human => {
            if profiles.is_empty() {
                println!("No Profiles");
            }

            for (i, profile) in profiles.iter().enumerate() {
                print_profile(i + 1, profile);
            }
        }
        OutputType::Json => super::print_json(&profiles)?,
    }

    Ok(())
}

fn print_profile(n: usize, profile: &Profile) {
    println!(
        "{n}) {}",
        profile.cute_name.as_deref().unwrap_or(&profile.profile_id)
    );
    println!("Id: {}", profile.profile_id);
    println!("Members: {}", profile.members.len());

    for (uuid, member) in profile.members.iter() {
        println!("  {uuid}");
        println!("    Purse: {:.1}", member.coin_purse);
        println!("    Fairy Souls: {}", member.fairy_souls_collected);
        println!("    Deaths: {}", member.death_count);
        if let Some(last_save) = member.last_save {
            println!("    Last Save: {last_save}");
        }
        let completed = member
            .quests
            .values()
            .filter(|quest| quest.is_complete())
            .count();
        println!("    Quests: {completed}/{}", member.quests.len());
    }
    println!();
}
