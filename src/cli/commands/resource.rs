use hypixel::Resource;
use std::str::FromStr;

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "resource",
    description = "get a resource as json, no api key needed"
)]
pub struct Options {
    #[argh(
        positional,
        description = "the resource: achievements, challenges, quests, guild-achievements, guild-permissions, skyblock-collections, or skyblock-skills"
    )]
    resource: ResourceArg,
}

#[derive(Debug)]
pub struct ResourceArgParseError(String);

impl std::fmt::Display for ResourceArgParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "'{}' is not a known resource", self.0)
    }
}

pub struct ResourceArg(Resource);

impl FromStr for ResourceArg {
    type Err = ResourceArgParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let resource = match s {
            "achievements" => Resource::Achievements,
            "challenges" => Resource::Challenges,
            "quests" => Resource::Quests,
            "guild-achievements" => Resource::GuildAchievements,
            "guild-permissions" => Resource::GuildPermissions,
            "skyblock-collections" => Resource::SkyBlockCollections,
            "skyblock-skills" => Resource::SkyBlockSkills,
            s => return Err(ResourceArgParseError(s.into())),
        };

        Ok(Self(resource))
    }
}

pub async fn exec(client: &hypixel::Client, options: Options) -> anyhow::Result<()> {
    let resource = client.get_resource(options.resource.0).await?;
    super::print_json(&resource)
}
