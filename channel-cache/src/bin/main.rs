use channel_cache::{
    Guild, GuildState, MemoryChannelService, Options, OverwritePermissions, PermissionTarget,
    Result,
};
use model::channel::{Channel, ChannelType, Permission};
use model::Snowflake;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = Options::from_env()?;
    info!(?options, "Loaded options");

    let guild_id = Snowflake(1);
    let service = Arc::new(MemoryChannelService::new());
    service.insert_channel(Channel {
        id: Snowflake(42),
        channel_type: ChannelType::GuildText,
        guild_id: Some(guild_id),
        position: 0,
        permission_overwrites: vec![],
        name: Box::from("general"),
        topic: None,
        nsfw: None,
        parent_id: None,
    });

    let state = GuildState::new(Guild::new(guild_id, service.clone(), options));

    let snapshot = service
        .channel(Snowflake(42))
        .expect("channel was just inserted");
    let channel = state.add_channel(&snapshot);

    let target = PermissionTarget::User(Snowflake(7));
    let permissions = OverwritePermissions::from_permissions(
        &[Permission::ViewChannel, Permission::SendMessages],
        &[Permission::MentionEveryone],
    );
    channel.add_permission_overwrite(target, permissions).await?;

    channel
        .modify(Some(|params: &mut model::channel::ModifyGuildChannel| {
            params.name = Some("support".to_string());
            params.position = Some(3);
        }))
        .await?;

    let invite = channel.create_invite(None, Some(10), false, true).await?;
    info!(url = %invite.url(), expires_at = ?invite.expires_at(), "Created invite");

    for channel in state.channels() {
        info!(
            channel = ?channel,
            position = channel.position(),
            overwrites = channel.permission_overwrites().len(),
            "Cached channel"
        );
    }

    channel.remove_permission_overwrite(target).await?;
    info!(overwrite = ?channel.permission_overwrite(target), "Removed overwrite");

    Ok(())
}
