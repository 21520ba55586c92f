use crate::cli::{AssignArgs, RenameArgs};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_client::{CardController, TagBadge};
use taskboard_core::TaskboardError;
use taskboard_domain::Card;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardOutput {
    card: Card,
    tags: Vec<TagBadge>,
    changed: bool,
    notifications: Vec<String>,
}

fn controller_for(ctx: &CliContext, card_id: &str) -> Result<CardController, TaskboardError> {
    ctx.snapshot
        .find_card(card_id)
        .cloned()
        .map(CardController::new)
        .ok_or_else(|| TaskboardError::NotFound(format!("Card not found: {}", card_id)))
}

pub async fn handle_assign(ctx: &mut CliContext, args: AssignArgs) -> anyhow::Result<()> {
    let mut controller = controller_for(ctx, &args.card_id)?;
    let before = controller.assignment().clone();
    let gateway = ctx.gateway()?;

    let user_id = if args.unassign { None } else { args.user_id };
    controller.assign(&gateway, user_id).await?;

    let changed = controller.assignment() != &before;
    finish(ctx, controller, changed).await
}

pub async fn handle_rename(ctx: &mut CliContext, args: RenameArgs) -> anyhow::Result<()> {
    let mut controller = controller_for(ctx, &args.card_id)?;
    let before = controller.card().title.clone();
    let gateway = ctx.gateway()?;

    controller.start_editing_title();
    controller.commit_title(&gateway, args.title).await?;

    let changed = controller.title_editor().confirmed_title() != before;
    finish(ctx, controller, changed).await
}

async fn finish(
    ctx: &mut CliContext,
    controller: CardController,
    changed: bool,
) -> anyhow::Result<()> {
    let card = controller.card().clone();
    if changed {
        ctx.snapshot.apply_card(card.clone());
        ctx.save().await?;
    }

    output::output_success(CardOutput {
        tags: controller.tag_badges(),
        card,
        changed,
        notifications: ctx.notification_messages(),
    })
}
