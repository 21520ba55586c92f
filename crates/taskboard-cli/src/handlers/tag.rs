use crate::cli::{CreateTagArgs, TagsArgs};
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use taskboard_client::{BoardQueries, QueryKey, TagBadge};
use taskboard_domain::{filter::filter_tags, Tag};

pub async fn handle_list(ctx: &CliContext, args: TagsArgs) -> anyhow::Result<()> {
    let board_id = args
        .board_id
        .unwrap_or_else(|| ctx.board_id().to_string());
    let api = ctx.api()?;

    let tags: Vec<Tag> = ctx
        .cache()
        .fetch(QueryKey::available_tags(&board_id), || {
            api.available_tags(&board_id)
        })
        .await?;

    let term = args.search.unwrap_or_default();
    let badges: Vec<TagBadge> = filter_tags(&tags, &term)
        .into_iter()
        .map(TagBadge::from_tag)
        .collect();
    output::output_list(badges)
}

pub async fn handle_create(ctx: &mut CliContext, args: CreateTagArgs) -> anyhow::Result<()> {
    let board_id = args
        .board_id
        .unwrap_or_else(|| ctx.board_id().to_string());
    let gateway = ctx.gateway()?;

    let tag = gateway.create_tag(&board_id, &args.name).await?;

    if board_id == ctx.board_id() {
        ctx.snapshot.apply_tag(tag.clone());
        ctx.save().await?;
    }

    output::output_success(json!({
        "tag": TagBadge::from_tag(&tag),
        "notifications": ctx.notification_messages(),
    }))
}
